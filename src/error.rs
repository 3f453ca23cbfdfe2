//! Error types for drag-and-drop operations
//!
//! Every fallible operation in the crate returns [`DndResult<T>`]. The
//! registrars log transfer channel failures and continue; the in-memory
//! registry carries the payload.

use thiserror::Error;

/// Errors that can occur in the drag-and-drop layer
#[derive(Error, Debug)]
pub enum DndError {
    /// The transfer marker could not be encoded
    #[error("Transfer serialization failed: {0}")]
    TransferSerialization(#[source] serde_json::Error),

    /// The platform transfer channel rejected a write
    #[error("Transfer channel is read-only")]
    TransferReadOnly,

    /// An edge name outside top/bottom/left/right
    #[error("Unknown edge: {0}")]
    UnknownEdge(String),

    /// IO error while loading settings
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file did not parse
    #[error("Settings parse error: {0}")]
    Settings(#[source] serde_json::Error),
}

/// Result type alias for drag-and-drop operations
pub type DndResult<T> = Result<T, DndError>;

impl DndError {
    /// Returns true for errors raised by the platform transfer channel
    pub fn is_transfer_error(&self) -> bool {
        matches!(
            self,
            DndError::TransferSerialization(_) | DndError::TransferReadOnly
        )
    }
}
