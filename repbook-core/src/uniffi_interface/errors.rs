use thiserror::Error as ThisError;
use uniffi::Error;

#[derive(Debug, ThisError, Error)]
#[uniffi(flat_error)]
#[non_exhaustive]
pub enum RepbookError {
    #[error("error: {0}")]
    Common(String),
}

impl From<anyhow::Error> for RepbookError {
    fn from(e: anyhow::Error) -> Self {
        RepbookError::Common(format!("{:#}", e))
    }
}

impl From<String> for RepbookError {
    fn from(s: String) -> Self {
        RepbookError::Common(s)
    }
}

impl From<&str> for RepbookError {
    fn from(s: &str) -> Self {
        RepbookError::Common(s.to_string())
    }
}
