//! Uniform random integers
//!
//! The walker draws every random choice (root pick, link pick, sleep length,
//! user agent) through [`RandomSource`]. The default source reads from the
//! operating system and cannot be seeded; tests swap in a scripted one.

use rand::rngs::OsRng;
use rand::Rng;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of uniformly distributed integers
pub trait RandomSource: Send + Sync {
    /// Returns a value uniformly distributed in the half-open `range`
    ///
    /// Callers must not pass an empty range.
    fn next_in_range(&self, range: Range<u64>) -> u64;
}

/// Cryptographically strong source backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_in_range(&self, range: Range<u64>) -> u64 {
        OsRng.gen_range(range)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted
///
/// Each draw is reduced modulo the size of the requested range, so a
/// sequence of zeros always picks the first element.
#[derive(Debug, Default)]
pub struct SequenceRandom {
    values: Vec<u64>,
    position: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(values: Vec<u64>) -> Self {
        Self {
            values,
            position: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_in_range(&self, range: Range<u64>) -> u64 {
        let span = range.end.saturating_sub(range.start);
        if self.values.is_empty() || span == 0 {
            return range.start;
        }

        let index = self.position.fetch_add(1, Ordering::Relaxed) % self.values.len();
        range.start + self.values[index] % span
    }
}

/// Picks an index uniformly in `[0, len)`, or `None` when `len` is zero
pub fn pick_index<R: RandomSource + ?Sized>(rng: &R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(rng.next_in_range(0..len as u64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_os_random_stays_in_range() {
        for _ in 0..1000 {
            let value = OsRandom.next_in_range(10..20);
            assert!((10..20).contains(&value));
        }
    }

    #[test]
    fn test_os_random_covers_range() {
        let seen: HashSet<u64> = (0..1000).map(|_| OsRandom.next_in_range(0..4)).collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_single_value_range() {
        assert_eq!(OsRandom.next_in_range(7..8), 7);
    }

    #[test]
    fn test_sequence_random_cycles() {
        let rng = SequenceRandom::new(vec![0, 1, 2]);
        let draws: Vec<u64> = (0..6).map(|_| rng.next_in_range(0..10)).collect();
        assert_eq!(draws, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_sequence_random_wraps_into_range() {
        let rng = SequenceRandom::new(vec![7]);
        assert_eq!(rng.next_in_range(100..105), 102);
    }

    #[test]
    fn test_pick_index_empty() {
        assert_eq!(pick_index(&OsRandom, 0), None);
    }

    #[test]
    fn test_pick_index_in_bounds() {
        for _ in 0..100 {
            let index = pick_index(&OsRandom, 3).unwrap();
            assert!(index < 3);
        }
    }
}
