/// Errors raised around the mining core: parameter validation, ingestion and
/// configuration loading. Mining and rule generation themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum AprioriError {
    #[error("min_confidence must be within [0, 1], got {value}")]
    InvalidConfidence { value: f64 },

    #[error("data_percentage must be within [0, 1], got {value}")]
    InvalidPercentage { value: f64 },

    #[error("column `{name}` not found in header")]
    MissingColumn { name: String },

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("invalid config: {reason}")]
    Config { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type AprioriResult<T> = Result<T, AprioriError>;
