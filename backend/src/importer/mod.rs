//! CSV recipient importer.
//!
//! Turns an uploaded CSV file into a validated set of campaign recipients:
//! `parser` splits the raw bytes into data rows, `validator` checks every
//! row against the phone-number format and the template's variable count,
//! and `sample` generates the downloadable blank CSV users start from.
//!
//! Everything in this module is synchronous and pure. Row problems are
//! never surfaced as errors from these functions; they come back as data
//! inside a `ValidationResult` so the preview UI can show all of them at
//! once. Only a file that cannot be parsed at all produces an
//! `ImportError`.

pub mod parser;
pub mod sample;
pub mod validator;

use thiserror::Error;

/// File-level import failure. There is deliberately no per-row detail
/// here: when the file itself is broken the user gets one generic message
/// and has to re-select a file.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to parse CSV file: {0}")]
    Parse(#[from] csv::Error),
}
