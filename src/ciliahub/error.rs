use thiserror::Error;

#[derive(Error, Debug)]
pub enum CiliaHubError {
    /// The gene table could not be fetched or parsed. The table stays
    /// empty; queries against it are no-ops until a successful reload.
    #[error("Failed to load gene table: {cause}")]
    LoadFailure { cause: String },

    /// Batch lookup was invoked with no tokens left after normalization.
    /// Distinct from a lookup that ran and matched nothing.
    #[error("Batch lookup needs at least one gene name or ID")]
    EmptyBatchInput,

    #[error("Invalid sort key '{0}' (expected gene, omim, localization or relevance)")]
    InvalidSortKey(String),

    /// A filter value failed to parse at the CLI edge.
    #[error("Invalid filter '{0}' (expected {1})")]
    InvalidFilter(String, &'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, CiliaHubError>;
