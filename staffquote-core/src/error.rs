use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Role '{0}' not found in benchmark catalog")]
    RoleNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
