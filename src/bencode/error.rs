use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unexpected end of input ({0} byte(s) short)")]
    BufferExhausted(usize),

    #[error("Expected '{0}' before end of input")]
    DelimiterNotFound(char),

    #[error("Unknown type character '{0}'")]
    UnknownTypeChar(char),

    #[error("Invalid integer: {0}")]
    InvalidInteger(ParseIntError),
}

impl From<ParseIntError> for DecodeError {
    fn from(err: ParseIntError) -> Self {
        DecodeError::InvalidInteger(err)
    }
}
