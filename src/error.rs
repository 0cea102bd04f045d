//! Error types for the generation pass.

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenError {
    /// Unrecognized top-level generator option; fails before any
    /// generation starts.
    #[error("Unknown generator option: {0}")]
    UnknownOption(String),

    /// Option value that does not parse for its key.
    #[error("Invalid value for generator option {key}: `{value}`")]
    InvalidOptionValue { key: String, value: String },

    /// Strict mode only: a non-synthetic message matched no naming
    /// convention.
    #[error("Message {0} matches no naming convention (Req/Resp/Push/Data)")]
    Unclassified(String),

    /// A field shape the conversion dispatcher cannot express.
    #[error("Field {field}: {detail}")]
    UnsupportedField { field: String, detail: String },
}
