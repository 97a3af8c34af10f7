//! Sample Ring Buffer
//!
//! Provides a fixed-capacity circular buffer for timestamped amplitude
//! samples, overwriting the oldest sample once full.

mod buffer;
mod error;

pub use buffer::{RingBuffer, DEFAULT_CAPACITY};
pub use error::BufferError;

use serde::{Deserialize, Serialize};

/// Timestamped amplitude sample stored in the ring buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: u32,
    pub amplitude: f32,
}

impl Sample {
    /// Create a new sample
    pub fn new(timestamp: u32, amplitude: f32) -> Self {
        Self {
            timestamp,
            amplitude,
        }
    }
}
