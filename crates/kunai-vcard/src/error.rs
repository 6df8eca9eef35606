use thiserror::Error;

/// vCard mapping and validation errors
#[derive(Error, Debug)]
pub enum VCardError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),
}

pub type VCardResult<T> = std::result::Result<T, VCardError>;
