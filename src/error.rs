//! Error types for the concurrency primers

use thiserror::Error;

/// Result type alias for primer operations
pub type Result<T> = std::result::Result<T, PrimersError>;

/// Main error type for primer operations
#[derive(Error, Debug)]
pub enum PrimersError {
    /// Channel errors
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// A spawned task panicked or was cancelled
    #[error("Task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Runtime construction errors
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Generic IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Channel-specific error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// Every receiver was dropped before the value could be delivered
    #[error("Receiver dropped before the value was delivered")]
    ReceiverDropped,
}

impl PrimersError {
    /// Create a configuration error
    pub fn config<T: Into<String>>(msg: T) -> Self {
        PrimersError::Config(msg.into())
    }

    /// Create a runtime error
    pub fn runtime<T: Into<String>>(msg: T) -> Self {
        PrimersError::Runtime(msg.into())
    }
}
