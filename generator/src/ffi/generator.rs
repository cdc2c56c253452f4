//! PyO3 wrapper for Xoroshiro128Plus
//!
//! # Example (from Python)
//!
//! ```python
//! from xoroshiro128p import Xoroshiro128Plus
//!
//! rng = Xoroshiro128Plus(12345)
//! first = rng.next()
//! rng.jump()
//! assert Xoroshiro128Plus.max() == 2**64 - 1
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::{Xoroshiro128Plus as RustXoroshiro, DEFAULT_SEED};

/// Python wrapper for the Rust generator
#[pyclass(name = "Xoroshiro128Plus")]
pub struct PyXoroshiro128Plus {
    inner: RustXoroshiro,
}

#[pymethods]
impl PyXoroshiro128Plus {
    /// Create a generator; `seed` defaults to the same constant as Rust callers get
    #[new]
    #[pyo3(signature = (seed = DEFAULT_SEED))]
    fn new(seed: u64) -> Self {
        PyXoroshiro128Plus {
            inner: RustXoroshiro::new(seed),
        }
    }

    /// Restore from a `(state0, state1)` pair returned by `state()`
    ///
    /// # Errors
    ///
    /// Raises ValueError for the all-zero state.
    #[staticmethod]
    fn from_state(state0: u64, state1: u64) -> PyResult<Self> {
        let inner = RustXoroshiro::from_state([state0, state1])
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyXoroshiro128Plus { inner })
    }

    /// Draw the next 64-bit value
    fn next(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Draw a float in [0.0, 1.0)
    fn next_f64(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Advance by 2^64 draws
    fn jump(&mut self) {
        self.inner.jump();
    }

    fn state(&self) -> (u64, u64) {
        let [s0, s1] = self.inner.state();
        (s0, s1)
    }

    #[staticmethod]
    fn min() -> u64 {
        RustXoroshiro::min()
    }

    #[staticmethod]
    fn max() -> u64 {
        RustXoroshiro::max()
    }
}
