//! ---
//! dtgen_section: "01-fixture-generation"
//! dtgen_subsection: "module"
//! dtgen_type: "source"
//! dtgen_scope: "code"
//! dtgen_description: "Random timestamp-string model and rendering."
//! dtgen_version: "v0.1.0"
//! dtgen_owner: "tbd"
//! ---
use std::fmt;

use rand::Rng;

/// Numeric sub-fields of a generated timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    OffsetHour,
    OffsetMinute,
}

impl Field {
    /// Number of decimal digits the field is rendered with.
    pub const fn width(self) -> usize {
        match self {
            Field::Year => 4,
            _ => 2,
        }
    }

    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        random_field(rng, self.width())
    }
}

/// Draw a uniform integer in `[0, 10^width - 1]`. Only called with the
/// widths of [`Field`], which stay well inside `u32`.
fn random_field<R: Rng + ?Sized>(rng: &mut R, width: usize) -> u32 {
    let upper = 10u32.pow(width as u32);
    rng.gen_range(0..upper)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Literal `Z` suffix.
    Zulu,
    Offset { sign: Sign, hours: u32, minutes: u32 },
}

/// A timestamp-shaped string whose fields are random and never range checked.
///
/// Only the digit width of each field is guaranteed; calendar and clock limits
/// are ignored on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampString {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub zone: Zone,
}

impl TimestampString {
    /// Sample a new timestamp. Fields are drawn in rendering order, then the
    /// variant coin, then (offset form only) offset hour, offset minute, sign.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let year = Field::Year.sample(rng);
        let month = Field::Month.sample(rng);
        let day = Field::Day.sample(rng);
        let hour = Field::Hour.sample(rng);
        let minute = Field::Minute.sample(rng);
        let second = Field::Second.sample(rng);

        let zone = if rng.gen_bool(0.5) {
            let hours = Field::OffsetHour.sample(rng);
            let minutes = Field::OffsetMinute.sample(rng);
            let sign = if rng.gen_bool(0.5) {
                Sign::Plus
            } else {
                Sign::Minus
            };
            Zone::Offset {
                sign,
                hours,
                minutes,
            }
        } else {
            Zone::Zulu
        };

        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            zone,
        }
    }

    pub fn is_zulu(&self) -> bool {
        matches!(self.zone, Zone::Zulu)
    }
}

impl fmt::Display for TimestampString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date_time = [
            (Field::Year, self.year, "-"),
            (Field::Month, self.month, "-"),
            (Field::Day, self.day, "T"),
            (Field::Hour, self.hour, ":"),
            (Field::Minute, self.minute, ":"),
            (Field::Second, self.second, ""),
        ];
        for (field, value, separator) in date_time {
            write!(f, "{value:0width$}{separator}", width = field.width())?;
        }
        match self.zone {
            Zone::Zulu => f.write_str("Z"),
            Zone::Offset {
                sign,
                hours,
                minutes,
            } => write!(
                f,
                "{}{hours:0hw$}:{minutes:0mw$}",
                sign.as_char(),
                hw = Field::OffsetHour.width(),
                mw = Field::OffsetMinute.width()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_field_stays_within_width() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            assert!(random_field(&mut rng, 2) <= 99);
            assert!(random_field(&mut rng, 4) <= 9_999);
        }
    }

    #[test]
    fn field_widths_match_layout() {
        assert_eq!(Field::Year.width(), 4);
        for field in [
            Field::Month,
            Field::Day,
            Field::Hour,
            Field::Minute,
            Field::Second,
            Field::OffsetHour,
            Field::OffsetMinute,
        ] {
            assert_eq!(field.width(), 2);
        }
    }

    #[test]
    fn renders_zulu_form() {
        let ts = TimestampString {
            year: 42,
            month: 13,
            day: 0,
            hour: 99,
            minute: 5,
            second: 60,
            zone: Zone::Zulu,
        };
        assert_eq!(ts.to_string(), "0042-13-00T99:05:60Z");
        assert!(ts.is_zulu());
    }

    #[test]
    fn renders_offset_form() {
        let ts = TimestampString {
            year: 2024,
            month: 1,
            day: 2,
            hour: 3,
            minute: 4,
            second: 5,
            zone: Zone::Offset {
                sign: Sign::Minus,
                hours: 7,
                minutes: 30,
            },
        };
        assert_eq!(ts.to_string(), "2024-01-02T03:04:05-07:30");
        assert!(!ts.is_zulu());
    }

    #[test]
    fn both_variants_and_signs_appear() {
        let mut rng = StdRng::seed_from_u64(1337);
        let mut zulu = 0;
        let mut plus = 0;
        let mut minus = 0;
        for _ in 0..1_000 {
            match TimestampString::random(&mut rng).zone {
                Zone::Zulu => zulu += 1,
                Zone::Offset {
                    sign: Sign::Plus, ..
                } => plus += 1,
                Zone::Offset {
                    sign: Sign::Minus, ..
                } => minus += 1,
            }
        }
        assert!(zulu > 350 && zulu < 650, "zulu count {zulu}");
        assert!(plus > 100, "plus count {plus}");
        assert!(minus > 100, "minus count {minus}");
    }

    #[test]
    fn rendered_length_depends_only_on_variant() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let ts = TimestampString::random(&mut rng);
            let expected = if ts.is_zulu() { 20 } else { 25 };
            assert_eq!(ts.to_string().len(), expected, "{ts}");
        }
    }
}
