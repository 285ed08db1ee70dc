use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdlError {
    #[error("SDL parse error: {message}")]
    ParseError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SdlError {
    pub fn parse(message: impl Into<String>) -> Self {
        SdlError::ParseError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        SdlError::ValidationError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SdlError>;
