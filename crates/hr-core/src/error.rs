//! Errors raised by lookups and setup shared across the `hr-*` crates.
//!
//! Parsing and I/O failures belong to the crate that reads the data
//! (`DataError`, `SubmissionError`), which wrap `HrError` where needed.

use thiserror::Error;

use crate::HeroId;

/// A missing hero or an unusable setup.
#[derive(Debug, Error)]
pub enum HrError {
    #[error("hero {0} not found")]
    HeroNotFound(HeroId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for the `hr-*` crates.
pub type HrResult<T> = Result<T, HrError>;
