use thiserror::Error;

/// A raw record could not be normalized into a canonical requirement.
///
/// Never fatal to a batch: the offending record is dropped and the rest of
/// the batch continues.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("raw record is missing required field: {field}")]
    MissingField { field: &'static str },
}

/// Malformed filter criteria. Unlike the other pipeline errors this one is
/// surfaced to the caller and no partial filtering is attempted.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid filter criteria: {0}")]
    InvalidCriteria(String),
}
