//! Buffer Error Types

use thiserror::Error;

/// Errors reported by the ring buffer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BufferError {
    /// Capacity of zero cannot hold any sample
    #[error("capacity must be greater than zero")]
    InvalidCapacity,

    /// Backing storage could not be reserved
    #[error("failed to allocate storage for {capacity} samples")]
    Allocation { capacity: usize },

    /// Removal attempted on an empty buffer
    #[error("buffer is empty")]
    Empty,
}
