//! Xoroshiro128+ Core - Rust Engine
//!
//! Deterministic, seedable, non-cryptographic 64-bit pseudo-random number
//! generation.
//!
//! # Architecture
//!
//! - **rng**: SplitMix64 seeding, the xoroshiro128+ generator, jump-ahead
//!   and stream partitioning
//! - **config**: Serializable seeding configuration
//!
//! # Critical Invariants
//!
//! 1. All arithmetic is wrapping 64-bit; every seed is accepted
//! 2. Same seed → same sequence (construction always seeds, then jumps once)
//! 3. One generator per owner; parallelism comes from jumped streams
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod config;
pub mod rng;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig, MAX_STREAMS};
pub use rng::{rotl, streams, StateError, StreamIter, Xoroshiro128Plus, DEFAULT_SEED, JUMP};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xoroshiro128p(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyXoroshiro128Plus>()?;
    m.add("DEFAULT_SEED", DEFAULT_SEED)?;
    Ok(())
}
