use thiserror::Error;

pub type Result<T> = std::result::Result<T, MapError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("bounds error: {0}")]
    Bounds(String),
}
