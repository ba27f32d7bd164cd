//! Error type for the proto generation pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtogenError {
    #[error("Usage error: missing {0}")]
    Usage(String),

    #[error("Unsupported type `{ty}` in function {function}")]
    UnsupportedType { function: String, ty: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parser error: {0}")]
    Parser(#[from] crate::parser::ParserError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProtogenError>;
