use thiserror::Error;

/// Invalid generator settings or batch requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Term budget must be at least 1")]
    ZeroTerms,
    #[error("Term budget {requested} exceeds the maximum of {max}")]
    TooManyTerms { requested: usize, max: usize },
    #[error("Attempt budget must be at least 1")]
    ZeroAttempts,
    #[error("Empty range: start={start}, end={end}")]
    EmptyRange { start: i64, end: i64 },
    #[error("Range of {len} targets exceeds the maximum of {max}")]
    RangeTooLarge { len: u64, max: u64 },
}

/// Reasons a strategy's output is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{count} terms exceed the budget of {max}")]
    TooManyTerms { count: usize, max: usize },
    #[error("{terms} terms render as {summands} summands")]
    SummandMismatch { terms: usize, summands: usize },
    #[error("Duplicate term: {0}")]
    DuplicateTerm(String),
    #[error("Terms sum to {actual}, expected {expected}")]
    ValueMismatch { expected: i64, actual: i64 },
}
