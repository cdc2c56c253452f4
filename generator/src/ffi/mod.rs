//! PyO3 bindings
//!
//! Minimal, safe FFI boundary: Python sees an owned generator object and
//! plain integers, nothing else.

pub mod generator;
