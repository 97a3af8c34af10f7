//! Queue Error Types

use thiserror::Error;

/// Errors reported by the bounded queue
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueueError {
    /// A maximum size of zero cannot hold any entry
    #[error("max size must be greater than zero")]
    InvalidCapacity,

    /// Node storage could not be reserved
    #[error("failed to allocate queue node storage")]
    Allocation,

    /// Operation requires a non-empty queue
    #[error("queue is empty")]
    Empty,
}
