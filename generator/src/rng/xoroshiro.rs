//! xoroshiro128+ random number generator
//!
//! Built on xoroshiro128+ by David Blackman and Sebastiano Vigna (CC-0, see
//! <http://xoroshiro.di.unimi.it/xoroshiro128plus.c>), holding its state per
//! instance instead of globally.
//!
//! # Algorithm
//!
//! 128 bits of state split into two 64-bit words. Every draw returns the
//! wrapping sum of both words, then mixes them with a rotate/xor/shift step.
//! Seeding expands a single 64-bit seed through SplitMix64 and applies one
//! jump, so consecutive seeds (0, 1, 2, ...) do not yield correlated first
//! outputs.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact runs)
//! - Testing (verify behavior)
//! - Parallel work (partition one seed into disjoint streams via [`Xoroshiro128Plus::jump`])
//!
//! # Degenerate state
//!
//! The all-zero state is a fixed point: it yields zero forever. Seeding never
//! reaches it in practice and [`Xoroshiro128Plus::new`] does not check for it,
//! keeping output-for-output parity with the reference generator. Only
//! [`Xoroshiro128Plus::from_state`] rejects it.
//!
//! Not cryptographically secure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::splitmix::splitmix64;

/// Seed used when none is given: `-42` reinterpreted as `u64`.
pub const DEFAULT_SEED: u64 = (-42i64) as u64;

/// Jump polynomial for 2^64 steps, consumed low bit first.
pub const JUMP: [u64; 2] = [0xbeac_0467_eba5_facb, 0xd86b_048b_86aa_9922];

/// Rotate `x` left by `k` bits.
///
/// On most targets this compiles to a single instruction.
#[inline]
pub const fn rotl(x: u64, k: u32) -> u64 {
    x.rotate_left(k)
}

/// Errors that can occur when restoring a generator from raw state
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("Generator state cannot be all zero")]
    AllZero,
}

/// Deterministic random number generator using xoroshiro128+
///
/// Each instance is single-owner: wrap it in a lock, or better, give each
/// thread its own instance advanced by a distinct number of jumps.
///
/// # Example
/// ```
/// use xoroshiro128p::Xoroshiro128Plus;
///
/// let mut rng = Xoroshiro128Plus::new(12345);
/// let value = rng.next_u64();
/// let die = rng.range(1, 7); // [1, 7)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u64; 2]", into = "[u64; 2]")]
pub struct Xoroshiro128Plus {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128Plus {
    /// Smallest value [`next_u64`](Self::next_u64) can return
    pub const MIN: u64 = 0;

    /// Largest value [`next_u64`](Self::next_u64) can return
    pub const MAX: u64 = u64::MAX;

    /// Create a new RNG with given seed
    ///
    /// The seed is expanded to 128 bits with one SplitMix64 step, then the
    /// state is jumped once before any output is produced. Every seed is
    /// accepted, including zero.
    ///
    /// # Example
    /// ```
    /// use xoroshiro128p::Xoroshiro128Plus;
    ///
    /// let rng = Xoroshiro128Plus::new(0);
    /// assert_ne!(rng.state(), [0, 0]);
    /// ```
    ///
    /// Usable in constant contexts:
    /// ```
    /// use xoroshiro128p::Xoroshiro128Plus;
    ///
    /// const SEEDED: Xoroshiro128Plus = Xoroshiro128Plus::new(42);
    /// assert_eq!(SEEDED, Xoroshiro128Plus::new(42));
    /// ```
    pub const fn new(seed: u64) -> Self {
        let mut scratch = seed;
        let s1 = splitmix64(&mut scratch);
        let mut rng = Self { s0: scratch, s1 };
        rng.jump();
        rng
    }

    /// Rebuild a generator from a previously captured [`state`](Self::state)
    ///
    /// No seeding or jumping is applied: the next draw continues exactly where
    /// the captured generator left off.
    ///
    /// # Errors
    /// Returns [`StateError::AllZero`] for `[0, 0]`.
    ///
    /// # Example
    /// ```
    /// use xoroshiro128p::Xoroshiro128Plus;
    ///
    /// let mut rng = Xoroshiro128Plus::new(7);
    /// let checkpoint = rng.state();
    /// let expected = rng.next_u64();
    ///
    /// let mut restored = Xoroshiro128Plus::from_state(checkpoint).unwrap();
    /// assert_eq!(restored.next_u64(), expected);
    /// ```
    pub fn from_state(state: [u64; 2]) -> Result<Self, StateError> {
        if state == [0, 0] {
            log::warn!("rejected all-zero xoroshiro128+ state");
            return Err(StateError::AllZero);
        }
        Ok(Self {
            s0: state[0],
            s1: state[1],
        })
    }

    /// Get current RNG state (for checkpointing/replay)
    pub const fn state(&self) -> [u64; 2] {
        [self.s0, self.s1]
    }

    /// Smallest possible output, independent of any instance
    pub const fn min() -> u64 {
        Self::MIN
    }

    /// Largest possible output, independent of any instance
    pub const fn max() -> u64 {
        Self::MAX
    }

    /// Generate next random u64 value
    ///
    /// Returns the sum of the state words as they were *before* the update.
    #[inline]
    pub const fn next_u64(&mut self) -> u64 {
        let s0 = self.s0;
        let mut s1 = self.s1;
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.s0 = rotl(s0, 55) ^ s1 ^ (s1 << 14); // a, b
        self.s1 = rotl(s1, 36); // c

        result
    }

    /// Advance the internal state by 2^64 steps
    ///
    /// Equivalent to 2^64 calls to [`next_u64`](Self::next_u64), at the cost
    /// of 128. Instances jumped 0, 1, 2, ... times from the same seed produce
    /// non-overlapping subsequences for parallel computations.
    pub const fn jump(&mut self) {
        let mut s0 = 0;
        let mut s1 = 0;
        let mut i = 0;
        while i < JUMP.len() {
            let mut bit = 0;
            while bit < 64 {
                if JUMP[i] & (1u64 << bit) != 0 {
                    s0 ^= self.s0;
                    s1 ^= self.s1;
                }
                self.next_u64();
                bit += 1;
            }
            i += 1;
        }
        self.s0 = s0;
        self.s1 = s1;
    }

    /// By-value [`jump`](Self::jump)
    ///
    /// # Example
    /// ```
    /// use xoroshiro128p::Xoroshiro128Plus;
    ///
    /// let second = Xoroshiro128Plus::new(1).jumped();
    /// assert_ne!(second, Xoroshiro128Plus::new(1));
    /// ```
    #[must_use]
    pub const fn jumped(mut self) -> Self {
        self.jump();
        self
    }

    /// Generate random value in range [min, max)
    ///
    /// Reduces by modulo, so a tiny bias remains for spans that do not divide
    /// 2^64.
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use xoroshiro128p::Xoroshiro128Plus;
    ///
    /// let mut rng = Xoroshiro128Plus::new(12345);
    /// let roll = rng.range(1, 7);
    /// assert!((1..7).contains(&roll));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next_u64();
        let range_size = max.wrapping_sub(min) as u64;
        min.wrapping_add((value % range_size) as i64)
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Uses the top 53 bits, which are the strongest bits of xoroshiro128+.
    ///
    /// # Example
    /// ```
    /// use xoroshiro128p::Xoroshiro128Plus;
    ///
    /// let mut rng = Xoroshiro128Plus::default();
    /// let probability = rng.next_f64();
    /// assert!((0.0..1.0).contains(&probability));
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}

impl Default for Xoroshiro128Plus {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl TryFrom<[u64; 2]> for Xoroshiro128Plus {
    type Error = StateError;

    fn try_from(state: [u64; 2]) -> Result<Self, Self::Error> {
        Self::from_state(state)
    }
}

impl From<Xoroshiro128Plus> for [u64; 2] {
    fn from(rng: Xoroshiro128Plus) -> Self {
        rng.state()
    }
}

impl rand_core::RngCore for Xoroshiro128Plus {
    fn next_u32(&mut self) -> u32 {
        (Xoroshiro128Plus::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Xoroshiro128Plus::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl rand_core::SeedableRng for Xoroshiro128Plus {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
