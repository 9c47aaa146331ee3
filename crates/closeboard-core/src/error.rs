use thiserror::Error;

/// Validation and contract errors exposed by `closeboard-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("company name cannot be empty")]
    EmptyCompanyName,

    #[error(
        "unknown parameter '{value}', expected one of turnover, prev_rate, open_rate, \
         highest_rate, lowest_rate, last_rate, difference"
    )]
    UnknownParameter { value: String },

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("upload name must look like '<prefix>_<YYYY><DD><mon>': '{value}'")]
    InvalidUploadName { value: String },

    #[error("dataset '{label}' has {actual} values for {expected} keys")]
    MisalignedDataset {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
