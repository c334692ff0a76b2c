//! ---
//! dtgen_section: "01-fixture-generation"
//! dtgen_subsection: "module"
//! dtgen_type: "source"
//! dtgen_scope: "code"
//! dtgen_description: "Fixture generation module exports and shared types."
//! dtgen_version: "v0.1.0"
//! dtgen_owner: "tbd"
//! ---
//! Timestamp fixture generation for exercising date/time parsers.
//!
//! The crate produces deliberately unvalidated ISO-8601 lookalikes: every
//! field is a zero-padded random number of the right width, so values such
//! as month `47` or hour `99` show up and give a downstream parser something
//! to reject.

pub mod config;
pub mod errors;
pub mod timestamp;
pub mod writer;

pub use config::GeneratorConfig;
pub use errors::{FixtureError, Result};
pub use timestamp::{Field, Sign, TimestampString, Zone};
pub use writer::{ensure_parent_dir, parse_line_count, FixtureWriter, GenerationReport};
