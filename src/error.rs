use thiserror::Error;

/// Reasons a calculation request cannot produce a result.
///
/// The front end renders every variant the same way (a blank result), but
/// they stay distinct so callers and tests can tell them apart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("principal is not a number: {0:?}")]
    Parse(String),

    #[error("unknown term: {0:?}")]
    UnknownTerm(String),

    #[error("invalid {field}: {value}")]
    InvalidDomainValue { field: &'static str, value: f64 },
}
