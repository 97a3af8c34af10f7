//! Randomized invariant checks for the sample ring buffer.

use proptest::prelude::*;
use ring_buffer::{RingBuffer, Sample};

proptest! {
    /// After N pushes into a capacity-C buffer, only the newest
    /// min(N, C) samples remain, in insertion order.
    #[test]
    fn retains_newest_window(n in 1usize..200, cap in 1usize..32) {
        let mut buffer = RingBuffer::new(cap).unwrap();
        for i in 0..n {
            buffer.push(Sample::new(i as u32 + 1, i as f32));
        }

        prop_assert_eq!(buffer.len(), n.min(cap));
        prop_assert_eq!(buffer.is_full(), n >= cap);

        let expected_first = (n - n.min(cap)) as u32 + 1;
        let mut expected = expected_first;
        while let Ok(sample) = buffer.pop() {
            prop_assert_eq!(sample.timestamp, expected);
            expected += 1;
        }
        prop_assert_eq!(expected, n as u32 + 1);
        prop_assert!(buffer.is_empty());
    }

    /// Emptiness and fullness queries agree with len()/capacity() in every
    /// state reachable through a random push/pop/flush/reset sequence.
    #[test]
    fn queries_agree_with_len(cap in 1usize..16, ops in prop::collection::vec(0u8..5, 0..120)) {
        let mut buffer = RingBuffer::new(cap).unwrap();
        let mut stamp = 0u32;
        for op in ops {
            match op {
                0 | 1 => {
                    stamp += 1;
                    buffer.push(Sample::new(stamp, 0.0));
                }
                2 => {
                    let _ = buffer.pop();
                }
                3 => buffer.flush(1),
                _ => buffer.reset(),
            }
            prop_assert_eq!(buffer.is_empty(), buffer.len() == 0);
            prop_assert_eq!(buffer.is_full(), buffer.len() == buffer.capacity());
            prop_assert!(buffer.len() <= buffer.capacity());
        }
    }

    /// A snapshot holds exactly len() samples, oldest first, and agrees
    /// with random access from the tail.
    #[test]
    fn snapshot_is_oldest_first(cap in 1usize..16, n in 0usize..64) {
        let mut buffer = RingBuffer::new(cap).unwrap();
        for i in 0..n {
            buffer.push(Sample::new(i as u32 + 1, 0.0));
        }

        let snap = buffer.snapshot();
        prop_assert_eq!(snap.len(), buffer.len());
        for (i, sample) in snap.iter().enumerate() {
            prop_assert_eq!(*sample, buffer.get(i));
            if i > 0 {
                prop_assert!(sample.timestamp > snap[i - 1].timestamp);
            }
        }
        if !snap.is_empty() {
            prop_assert_eq!(snap[0], buffer.get(0));
        }
    }

    /// The latest timestamp tracks the newest push through wraparound and
    /// reads 0 only on an empty buffer.
    #[test]
    fn latest_timestamp_tracks_newest(cap in 1usize..8, n in 0usize..40) {
        let mut buffer = RingBuffer::new(cap).unwrap();
        prop_assert_eq!(buffer.latest_timestamp(), 0);
        let mut last = 0u32;
        for i in 0..n {
            last = i as u32 + 1;
            buffer.push(Sample::new(last, 0.0));
            prop_assert_eq!(buffer.latest_timestamp(), last);
        }
    }
}
