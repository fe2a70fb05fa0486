use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Advancing by a negative number of generations.
    #[error("Step count must be non-negative, got {0}.")]
    NegativeSteps(i64),
    /// Advancing past the largest representable generation counter.
    #[error("Generation counter {0} cannot advance further.")]
    GenerationOverflow(u64),
    /// A CSV line that is not `<row><separator><column>`.
    #[error("Invalid csv at line {line}: {text:?}.")]
    Csv { line: usize, text: String },
    /// A required input is absent.
    #[error("Missing input: {0}.")]
    MissingInput(&'static str),
    /// A malformed `row:column` pair in a persistence record.
    #[error("Invalid record field: {0}.")]
    Record(String),
    /// A persistence record written by an unknown format version.
    #[error("Unsupported record version {0}.")]
    UnsupportedVersion(u32),
    #[error("Invalid record json: {0}")]
    Json(#[from] serde_json::Error),
    /// Fill rate of a random soup outside `[0, 1]`.
    #[error("Fill rate must be within [0, 1], got {0}.")]
    FillRate(f64),
    #[error("Unknown pattern {0:?}.")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
