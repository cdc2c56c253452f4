//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence.

use proptest::prelude::*;
use xoroshiro128p::{rotl, Xoroshiro128Plus, DEFAULT_SEED};

// ============================================================================
// Golden Vectors
// ============================================================================

#[test]
fn test_default_seed_golden_sequence() {
    let mut rng = Xoroshiro128Plus::default();

    let expected = [
        0xb75a_3284_b525_a55a,
        0x83c6_9a74_63d4_1b16,
        0xc1b5_1c87_afa4_470e,
        0xd9de_9712_ea0f_b13f,
        0x46c3_4a6c_774f_88c8,
    ];

    for (i, want) in expected.iter().enumerate() {
        let got = rng.next_u64();
        assert_eq!(got, *want, "Golden mismatch at draw {}: {:#x}", i, got);
    }
}

#[test]
fn test_seed_zero_first_output() {
    let mut rng = Xoroshiro128Plus::new(0);
    assert_eq!(rng.next_u64(), 0x3bcc_6d5c_c19d_126b);
}

#[test]
fn test_seed_12345_golden_sequence() {
    let mut rng = Xoroshiro128Plus::new(12345);
    assert_eq!(rng.next_u64(), 0x2d26_776e_3219_432d);
    assert_eq!(rng.next_u64(), 0x9fca_0b6b_10d9_88f9);
    assert_eq!(rng.next_u64(), 0x5b24_b2d1_ea37_5695);
}

#[test]
fn test_default_matches_explicit_default_seed() {
    let mut rng1 = Xoroshiro128Plus::default();
    let mut rng2 = Xoroshiro128Plus::new(DEFAULT_SEED);
    let mut rng3 = Xoroshiro128Plus::new(-42i64 as u64);

    for _ in 0..10 {
        let val = rng1.next_u64();
        assert_eq!(val, rng2.next_u64());
        assert_eq!(val, rng3.next_u64());
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = Xoroshiro128Plus::new(12345);
    let mut rng2 = Xoroshiro128Plus::new(12345);

    // Same seed should produce same sequence
    for _ in 0..100 {
        let val1 = rng1.next_u64();
        let val2 = rng2.next_u64();
        assert_eq!(val1, val2, "RNG not deterministic!");
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = Xoroshiro128Plus::new(12345);
    let mut rng2 = Xoroshiro128Plus::new(54321);

    assert_ne!(
        rng1.next_u64(),
        rng2.next_u64(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_consecutive_seeds_uncorrelated_first_outputs() {
    let firsts: Vec<u64> = (0..8)
        .map(|seed| Xoroshiro128Plus::new(seed).next_u64())
        .collect();

    let unique = firsts
        .iter()
        .collect::<std::collections::HashSet<_>>()
        .len();
    assert_eq!(unique, firsts.len());

    // Neighboring seeds should differ in many bits, not just the low ones
    for pair in firsts.windows(2) {
        let differing_bits = (pair[0] ^ pair[1]).count_ones();
        assert!(
            differing_bits > 8,
            "Neighboring seeds too similar: {:#x} vs {:#x}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_rng_state_advances() {
    let mut rng = Xoroshiro128Plus::new(12345);
    let initial_state = rng.state();

    rng.next_u64();

    assert_ne!(initial_state, rng.state(), "RNG state should advance");
}

#[test]
fn test_rng_long_sequence_not_degenerate() {
    let mut rng = Xoroshiro128Plus::default();
    let first = rng.next_u64();

    let mut zeros = 0;
    let mut all_same = true;
    let mut or_bits = first;
    let mut and_bits = first;

    for _ in 0..10_000 {
        let val = rng.next_u64();
        if val == 0 {
            zeros += 1;
        }
        if val != first {
            all_same = false;
        }
        or_bits |= val;
        and_bits &= val;
    }

    assert!(!all_same, "RNG output constant over 10,000 draws");
    assert_eq!(zeros, 0, "Unexpected zero outputs");
    assert_eq!(or_bits, u64::MAX, "Some bit never set");
    assert_eq!(and_bits, 0, "Some bit never cleared");
}

#[test]
fn test_rng_produces_diverse_values() {
    let mut rng = Xoroshiro128Plus::new(12345);
    let values: std::collections::HashSet<u64> = (0..100).map(|_| rng.next_u64()).collect();

    assert!(
        values.len() > 90,
        "RNG not diverse enough: only {} unique values out of 100",
        values.len()
    );
}

#[test]
fn test_declared_bounds() {
    assert_eq!(Xoroshiro128Plus::MIN, 0);
    assert_eq!(Xoroshiro128Plus::MAX, u64::MAX);
    assert_eq!(Xoroshiro128Plus::min(), 0);
    assert_eq!(Xoroshiro128Plus::max(), u64::MAX);
}

#[test]
fn test_rng_range_single_value() {
    let mut rng = Xoroshiro128Plus::new(12345);

    // Range [5, 6) should always return 5
    for _ in 0..10 {
        assert_eq!(rng.range(5, 6), 5);
    }
}

#[test]
fn test_next_f64_deterministic() {
    let mut rng1 = Xoroshiro128Plus::new(99999);
    let mut rng2 = Xoroshiro128Plus::new(99999);

    for _ in 0..100 {
        assert_eq!(rng1.next_f64(), rng2.next_f64(), "next_f64() not deterministic");
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_same_seed_same_sequence(seed in any::<u64>()) {
        let mut rng1 = Xoroshiro128Plus::new(seed);
        let mut rng2 = Xoroshiro128Plus::new(seed);
        for _ in 0..32 {
            prop_assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn prop_rotl_round_trips(x in any::<u64>(), k in prop::sample::select(vec![1u32, 14, 36, 55, 63])) {
        prop_assert_eq!(rotl(rotl(x, k), 64 - k), x);
    }

    #[test]
    fn prop_rotl_matches_shift_definition(x in any::<u64>(), k in 1u32..64) {
        prop_assert_eq!(rotl(x, k), (x << k) | (x >> (64 - k)));
    }

    #[test]
    fn prop_range_within_bounds(seed in any::<u64>(), min in -1_000_000i64..1_000_000, span in 1i64..1_000_000) {
        let mut rng = Xoroshiro128Plus::new(seed);
        let max = min + span;
        for _ in 0..16 {
            let val = rng.range(min, max);
            prop_assert!(val >= min && val < max, "Value {} out of range [{}, {})", val, min, max);
        }
    }
}
