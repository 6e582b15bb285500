use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid date-time: {0}")]
    InvalidDate(String),
    #[error("end must be after start")]
    InvalidRange,
}
