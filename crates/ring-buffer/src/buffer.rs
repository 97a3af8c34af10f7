//! Sample Ring Buffer Implementation

use crate::{BufferError, Sample};
use tracing::trace;

/// Default buffer capacity (1024 samples = ~2 s at 512 Hz acquisition)
pub const DEFAULT_CAPACITY: usize = 1024;

/// Fixed-capacity circular buffer of timestamped samples
pub struct RingBuffer {
    /// Pre-allocated storage
    storage: Box<[Sample]>,
    /// Capacity of the buffer
    capacity: usize,
    /// Head position (next write slot)
    head: usize,
    /// Tail position (oldest readable slot)
    tail: usize,
    /// Number of valid samples
    len: usize,
    /// Cached full flag (len == capacity)
    full: bool,
    /// Total samples written (for statistics)
    total_written: u64,
}

impl RingBuffer {
    /// Create a new ring buffer with given capacity
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::InvalidCapacity);
        }
        let mut storage: Vec<Sample> = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| BufferError::Allocation { capacity })?;
        storage.resize(capacity, Sample::default());
        Ok(Self {
            storage: storage.into_boxed_slice(),
            capacity,
            head: 0,
            tail: 0,
            len: 0,
            full: false,
            total_written: 0,
        })
    }

    /// Create a buffer with default capacity (1024 samples)
    pub fn with_default_capacity() -> Result<Self, BufferError> {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Restore the just-initialized state without reallocating storage
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
        self.full = false;
    }

    /// Get the number of valid samples currently in the buffer
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f64 {
        self.len as f64 / self.capacity as f64
    }

    /// Get total samples written (for statistics)
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Push a sample into the buffer (overwrites oldest if full)
    pub fn push(&mut self, sample: Sample) {
        if self.full {
            trace!(
                dropped = self.storage[self.head].timestamp,
                "overwriting oldest sample"
            );
        }
        self.storage[self.head] = sample;
        self.advance();
        self.total_written += 1;
    }

    /// Remove and return the oldest sample
    pub fn pop(&mut self) -> Result<Sample, BufferError> {
        if self.len == 0 {
            return Err(BufferError::Empty);
        }
        let sample = self.storage[self.tail];
        self.retreat();
        Ok(sample)
    }

    /// Discard the `n` oldest samples; more than `len()` clamps to a full flush
    pub fn flush(&mut self, n: usize) {
        if n <= self.len {
            self.flush_range(n);
        } else {
            self.flush_all();
        }
    }

    /// Discard all samples, zeroing each slot as it is released
    pub fn flush_all(&mut self) {
        self.flush_range(self.capacity);
    }

    /// Timestamp of the most recently written sample, or 0 when empty
    pub fn latest_timestamp(&self) -> u32 {
        if self.len == 0 {
            return 0;
        }
        // Head has already advanced past the slot just written.
        let idx = if self.head == 0 {
            self.capacity - 1
        } else {
            self.head - 1
        };
        self.storage[idx].timestamp
    }

    /// Copy all valid samples, oldest first, into `out`.
    ///
    /// `out` must hold at least `len()` samples. Returns the number copied.
    pub fn snapshot_into(&self, out: &mut [Sample]) -> usize {
        if self.len == 0 {
            return 0;
        }
        let mut n = 0;
        if self.full {
            for i in self.tail..self.capacity {
                out[n] = self.storage[i];
                n += 1;
            }
            if self.tail != 0 {
                for i in 0..self.head {
                    out[n] = self.storage[i];
                    n += 1;
                }
            }
        } else if self.head > self.tail {
            for i in self.tail..self.head {
                out[n] = self.storage[i];
                n += 1;
            }
        } else {
            // Partially filled with the valid region wrapped around the end.
            for i in self.tail..self.capacity {
                out[n] = self.storage[i];
                n += 1;
            }
            for i in 0..self.head {
                out[n] = self.storage[i];
                n += 1;
            }
        }
        n
    }

    /// Copy all valid samples, oldest first, into a new vector
    pub fn snapshot(&self) -> Vec<Sample> {
        let mut out = vec![Sample::default(); self.len];
        self.snapshot_into(&mut out);
        out
    }

    /// Copy of the `idx`-th oldest sample.
    ///
    /// The caller guarantees `idx < len()`. The tail-relative position is
    /// reduced modulo capacity, so an out-of-range index reads a stale slot
    /// rather than failing.
    pub fn get(&self, idx: usize) -> Sample {
        self.storage[(self.tail + idx) % self.capacity]
    }

    /// Map a tail-relative position to an absolute storage index
    pub fn slot_index(&self, idx: usize) -> usize {
        (idx + self.tail) % self.capacity
    }

    /// Apply `op` to every backing slot in storage order.
    ///
    /// Visits all `capacity()` slots, including slots never written or
    /// already flushed. Callers that only want valid samples should use
    /// [`RingBuffer::snapshot`] instead.
    pub fn for_each_slot<F>(&self, mut op: F)
    where
        F: FnMut(&Sample),
    {
        for slot in self.storage.iter() {
            op(slot);
        }
    }

    /// Read the last `count` samples (most recent first)
    pub fn read_last(&self, count: usize) -> Vec<Sample> {
        let count = count.min(self.len);
        let mut samples = Vec::with_capacity(count);
        for i in 0..count {
            let idx = if self.head >= i + 1 {
                self.head - i - 1
            } else {
                self.capacity - (i + 1 - self.head)
            };
            samples.push(self.storage[idx]);
        }
        samples
    }

    fn advance(&mut self) {
        if self.len < self.capacity {
            self.len += 1;
            if self.len == self.capacity {
                self.full = true;
            }
        }
        self.head = (self.head + 1) % self.capacity;
        if self.full {
            // Head and tail coincide once full; the slot at head holds the
            // eldest sample and is the next to be overwritten.
            self.tail = self.head;
        }
    }

    fn retreat(&mut self) {
        self.full = false;
        if self.len > 0 {
            self.len -= 1;
        }
        self.tail = (self.tail + 1) % self.capacity;
        if self.len == 0 {
            // Re-synchronize the indices after full depletion.
            self.head = 0;
            self.tail = 0;
        }
    }

    fn flush_range(&mut self, n: usize) {
        for _ in 0..n {
            self.storage[self.tail] = Sample::default();
            self.retreat();
        }
    }
}
