/// Model subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("artifact not readable: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported schema version: {actual} (supported: {supported})")]
    UnsupportedVersion { actual: u32, supported: u32 },

    #[error("unsupported task kind: expected regression")]
    UnsupportedTask,

    #[error("coefficient count mismatch: expected {expected}, got {actual}")]
    CoefficientCount { expected: usize, actual: usize },

    #[error("feature order mismatch at column {position}: expected {expected:?}, got {actual:?}")]
    FeatureOrder {
        position: usize,
        expected: String,
        actual: String,
    },

    #[error("feature row shape mismatch: expected {expected} values, got {actual}")]
    RowShape { expected: usize, actual: usize },

    #[error("non-finite value in feature row at position {0}")]
    NonFiniteInput(usize),
}
