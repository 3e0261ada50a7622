use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid phone number: {0:?}")]
    InvalidNumber(String),
    #[error("unsupported phone number input: {0}")]
    UnsupportedInputType(String),
    #[error("malformed record on line {line}: expected 2 tab-separated fields, found {fields}")]
    MalformedRecord { line: usize, fields: usize },
}
