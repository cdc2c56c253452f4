//! Non-overlapping parallel streams
//!
//! Stream `i` of a seed is the seeded generator jumped `i` more times, so each
//! stream owns a disjoint window of 2^64 outputs. Streams share no state and
//! can be moved to separate threads.

use super::xoroshiro::Xoroshiro128Plus;

/// Build `count` independent generators from one seed.
///
/// # Example
/// ```
/// use xoroshiro128p::{streams, Xoroshiro128Plus};
///
/// let rngs = streams(42, 3);
/// assert_eq!(rngs[0], Xoroshiro128Plus::new(42));
/// assert_eq!(rngs[2], Xoroshiro128Plus::new(42).jumped().jumped());
/// ```
pub fn streams(seed: u64, count: usize) -> Vec<Xoroshiro128Plus> {
    log::trace!("building {} xoroshiro128+ streams from seed {:#018x}", count, seed);
    StreamIter::new(seed).take(count).collect()
}

/// Unbounded iterator over the streams of one seed
///
/// Each item is the previous one jumped once; the first is the plain seeded
/// generator.
#[derive(Debug, Clone)]
pub struct StreamIter {
    current: Xoroshiro128Plus,
    started: bool,
}

impl StreamIter {
    /// Start from the generator seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self::from_generator(Xoroshiro128Plus::new(seed))
    }

    /// Start from an existing generator instead of a seed
    pub fn from_generator(rng: Xoroshiro128Plus) -> Self {
        Self {
            current: rng,
            started: false,
        }
    }
}

impl Iterator for StreamIter {
    type Item = Xoroshiro128Plus;

    fn next(&mut self) -> Option<Self::Item> {
        // Jump only when the next stream is asked for
        if self.started {
            self.current.jump();
        } else {
            self.started = true;
        }
        Some(self.current.clone())
    }
}
