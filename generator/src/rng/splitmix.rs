//! SplitMix64 step
//!
//! A lower-quality 64-bit generator. Only used to expand a 64-bit seed into
//! the 128-bit xoroshiro128+ state; never handed out as a generator itself.

/// Golden-ratio increment added to the state on every step.
const GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Advance `state` by one SplitMix64 step and return the mixed output.
///
/// All arithmetic wraps modulo 2^64.
#[inline]
pub(crate) const fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(GAMMA);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
