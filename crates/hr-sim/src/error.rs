use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("submission must include both 'hero_id' and 'object_id' columns (missing {0:?})")]
    MissingColumn(&'static str),

    #[error("submission parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SubmissionResult<T> = Result<T, SubmissionError>;
