//! Deterministic random number generation
//!
//! Uses the xoroshiro128+ algorithm, seeded through SplitMix64, for fast,
//! deterministic 64-bit output.
//! CRITICAL: Same seed → same sequence, on every platform.

mod splitmix;
mod streams;
mod xoroshiro;

pub use streams::{streams, StreamIter};
pub use xoroshiro::{rotl, StateError, Xoroshiro128Plus, DEFAULT_SEED, JUMP};
