//! ---
//! dtgen_section: "01-fixture-generation"
//! dtgen_subsection: "module"
//! dtgen_type: "source"
//! dtgen_scope: "code"
//! dtgen_description: "Error taxonomy for fixture generation."
//! dtgen_version: "v0.1.0"
//! dtgen_owner: "tbd"
//! ---
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixtureError>;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Usage: {program} <output_file> <num_lines>")]
    Usage { program: String },
    #[error("invalid line count {input:?}: {reason}")]
    Parse { input: String, reason: String },
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open output file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FixtureError {
    pub const EXIT_USAGE: i32 = 1;
    pub const EXIT_PARSE: i32 = 2;
    pub const EXIT_IO: i32 = 3;

    /// Process exit status reported by the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            FixtureError::Usage { .. } => Self::EXIT_USAGE,
            FixtureError::Parse { .. } => Self::EXIT_PARSE,
            FixtureError::CreateDir { .. }
            | FixtureError::Open { .. }
            | FixtureError::Write { .. } => Self::EXIT_IO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn usage_message_names_program() {
        let err = FixtureError::Usage {
            program: "dtgen".into(),
        };
        assert_eq!(err.to_string(), "Usage: dtgen <output_file> <num_lines>");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_variants_share_exit_code() {
        let path = PathBuf::from("out/t.txt");
        let errors = [
            FixtureError::CreateDir {
                path: path.clone(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            },
            FixtureError::Open {
                path: path.clone(),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
            FixtureError::Write {
                path,
                source: io::Error::from(io::ErrorKind::WriteZero),
            },
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), FixtureError::EXIT_IO);
            assert!(err.to_string().contains("out/t.txt"));
        }
    }

    #[test]
    fn parse_error_quotes_input() {
        let err = FixtureError::Parse {
            input: "abc".into(),
            reason: "not a number".into(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("\"abc\""));
    }
}
