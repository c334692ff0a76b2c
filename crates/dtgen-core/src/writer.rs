//! ---
//! dtgen_section: "01-fixture-generation"
//! dtgen_subsection: "module"
//! dtgen_type: "source"
//! dtgen_scope: "code"
//! dtgen_description: "Fixture file writer driving the timestamp generator."
//! dtgen_version: "v0.1.0"
//! dtgen_owner: "tbd"
//! ---
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::errors::{FixtureError, Result};
use crate::timestamp::TimestampString;

/// Summary of a completed [`FixtureWriter::generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub lines: u64,
    /// Directory created on the way, if the parent did not exist yet.
    pub created_dir: Option<PathBuf>,
}

/// Writes newline-separated random timestamps using an owned random source.
#[derive(Debug)]
pub struct FixtureWriter<R = StdRng> {
    rng: R,
}

impl FixtureWriter<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        let seed = config.resolved_seed();
        debug!(seed, "seeding generator");
        Self::from_seed(seed)
    }
}

impl<R: Rng> FixtureWriter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_timestamp(&mut self) -> TimestampString {
        TimestampString::random(&mut self.rng)
    }

    /// Write `count` lines to `writer`, returning how many were written.
    ///
    /// The writer is not flushed; callers owning a buffered handle flush it
    /// themselves so flush failures are attributed to the right destination.
    pub fn write_lines<W: Write>(&mut self, writer: &mut W, count: u64) -> io::Result<u64> {
        for _ in 0..count {
            let ts = self.next_timestamp();
            writeln!(writer, "{ts}")?;
        }
        Ok(count)
    }

    /// Create (or truncate) `path` and fill it with `count` timestamps.
    ///
    /// Missing parent directories are created first. A failure part way
    /// through leaves whatever already reached the file in place.
    pub fn generate(&mut self, path: impl AsRef<Path>, count: u64) -> Result<GenerationReport> {
        let path = path.as_ref();
        let created_dir = ensure_parent_dir(path)?;

        let file = File::create(path).map_err(|source| FixtureError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        let lines = self
            .write_lines(&mut writer, count)
            .and_then(|lines| writer.flush().map(|()| lines))
            .map_err(|source| FixtureError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), lines, "fixture written");
        Ok(GenerationReport {
            path: path.to_path_buf(),
            lines,
            created_dir,
        })
    }

    /// Stream `count` timestamps to standard output.
    pub fn generate_to_stdout(&mut self, count: u64) -> Result<u64> {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        self.write_lines(&mut writer, count)
            .and_then(|lines| writer.flush().map(|()| lines))
            .map_err(|source| FixtureError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })
    }
}

/// Create the parent directory of `path` (and its ancestors) when missing.
///
/// Returns the directory that was created, or `None` when `path` has no
/// directory component or the directory already exists.
pub fn ensure_parent_dir(path: &Path) -> Result<Option<PathBuf>> {
    let Some(parent) = path.parent() else {
        return Ok(None);
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(None);
    }
    fs::create_dir_all(parent).map_err(|source| FixtureError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;
    debug!(dir = %parent.display(), "created output directory");
    Ok(Some(parent.to_path_buf()))
}

/// Parse the `num_lines` argument as a non-negative integer.
pub fn parse_line_count(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    trimmed.parse::<u64>().map_err(|err| {
        let negative = trimmed.strip_prefix('-').is_some_and(|digits| {
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        });
        let reason = if negative {
            "line count must not be negative".to_owned()
        } else {
            err.to_string()
        };
        FixtureError::Parse {
            input: input.to_owned(),
            reason,
        }
    })
}
