use thiserror::Error;

/// Violations of the host limits enforced while a contract executes
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage key too large: {size} bytes (max {max})")]
    KeyTooLarge { size: usize, max: usize },

    #[error("Storage value too large: {size} bytes (max {max})")]
    ValueTooLarge { size: usize, max: usize },

    #[error("Return data too large: {size} bytes (max {max})")]
    ReturnDataTooLarge { size: usize, max: usize },

    #[error("Too many events per call: {0}")]
    TooManyEvents(usize),

    #[error("Too many topics for a single event: {0}")]
    TooManyTopics(usize),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}
