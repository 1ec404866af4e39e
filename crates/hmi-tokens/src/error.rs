use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    #[error("unknown border radius token: {0}")]
    UnknownToken(String),
    #[error("invalid dimension '{input}': {reason}")]
    InvalidDimension { input: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, TokenError>;
