//! Property-based tests for the matching engine
//!
//! These tests verify the matching pipeline for ALL valid inputs, not just
//! specific examples: a broadcast captured within clock-skew tolerance is
//! always found, one captured beyond tolerance never is, and windowed
//! generation never leaves a key's validity day.

use proptest::prelude::*;
use proxid_core::{
    EpochInterval, ProtocolConfig, ProximityIdentifier, TemporaryExposureKey, candidate_keys,
    find_matches, identifiers_for_full_day, identifiers_for_window,
};

/// Strategy for 16-byte rotating key secrets
fn arbitrary_secret() -> impl Strategy<Value = [u8; 16]> {
    prop::array::uniform16(any::<u8>())
}

/// A key log with one key per day for `days` consecutive days starting at
/// `first_day`.
fn key_log(first_day: u32, days: u32) -> Vec<TemporaryExposureKey> {
    (first_day..first_day + days)
        .filter_map(|day| {
            let mut secret = [0u8; 16];
            secret[0..4].copy_from_slice(&day.to_le_bytes());
            TemporaryExposureKey::new(EpochInterval::new(day * 144), &secret).ok()
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_capture_within_tolerance_always_matches(
        secret in arbitrary_secret(),
        day in 1u32..100_000,
        offset in 0u32..144,
        skew in -12i64..=12,
    ) {
        let config = ProtocolConfig::default();
        let key = TemporaryExposureKey::new(EpochInterval::new(day * 144), &secret)
            .expect("16-byte secret");

        let broadcast_interval = day * 144 + offset;
        let broadcast = identifiers_for_full_day(&config, &key)[offset as usize];
        let captured_at = EpochInterval::from_raw(i64::from(broadcast_interval) + skew)
            .expect("stays in range");
        let observed = ProximityIdentifier::new(*broadcast.bytes(), captured_at);

        let matches = find_matches(&config, std::slice::from_ref(&key), &[observed]);

        // PROPERTY: a genuine broadcast captured with up to ±tolerance skew
        // is found exactly once
        prop_assert_eq!(matches.len(), 1);
        prop_assert_eq!(&matches[0].key, &key);
        prop_assert_eq!(matches[0].captured.interval(), captured_at);
    }

    #[test]
    fn prop_capture_beyond_tolerance_never_matches(
        secret in arbitrary_secret(),
        day in 1u32..100_000,
        offset in 0u32..144,
        extra_skew in 1i64..1000,
        ahead in any::<bool>(),
    ) {
        let config = ProtocolConfig::default();
        let key = TemporaryExposureKey::new(EpochInterval::new(day * 144), &secret)
            .expect("16-byte secret");

        let broadcast_interval = day * 144 + offset;
        let skew = if ahead { 12 + extra_skew } else { -(12 + extra_skew) };
        let captured_at =
            EpochInterval::from_raw((i64::from(broadcast_interval) + skew).max(0))
                .expect("non-negative");

        let broadcast = identifiers_for_full_day(&config, &key)[offset as usize];
        let observed = ProximityIdentifier::new(*broadcast.bytes(), captured_at);

        let matches = find_matches(&config, std::slice::from_ref(&key), &[observed]);

        // PROPERTY: skew beyond the tolerance window is never bridged
        prop_assert!(matches.is_empty());
    }

    #[test]
    fn prop_windowed_generation_stays_inside_the_key_day(
        secret in arbitrary_secret(),
        day in 0u32..100_000,
        target in 0u32..20_000_000,
        tolerance in 0u32..143,
    ) {
        let config = ProtocolConfig::default();
        let key = TemporaryExposureKey::new(EpochInterval::new(day * 144), &secret)
            .expect("16-byte secret");

        let identifiers = identifiers_for_window(
            &config,
            &key,
            EpochInterval::new(target),
            tolerance,
        );

        // PROPERTY: a key never produces identifiers outside its own day
        for identifier in &identifiers {
            prop_assert!(identifier.interval() >= EpochInterval::new(day * 144));
            prop_assert!(identifier.interval() <= EpochInterval::new(day * 144 + 143));
        }

        // PROPERTY: ascending interval order, both bounds inclusive
        for pair in identifiers.windows(2) {
            prop_assert!(pair[0].interval() < pair[1].interval());
        }
    }

    #[test]
    fn prop_random_identifiers_match_nothing(
        data in prop::array::uniform16(any::<u8>()),
        captured_at in 1440u32..(1440 + 14 * 144),
    ) {
        let config = ProtocolConfig::default();
        let keys = key_log(10, 14);

        let observed = ProximityIdentifier::new(data, EpochInterval::new(captured_at));
        let matches = find_matches(&config, &keys, &[observed]);

        // Soundness smoke test: 16 random bytes colliding with a real
        // derivation chain is a 2^-128 event
        prop_assert!(matches.is_empty());
    }

    #[test]
    fn prop_at_most_two_candidate_days(
        captured_at in 0u32..20_000_000,
        tolerance in 0u32..143,
    ) {
        let config = ProtocolConfig::default();
        let keys = key_log(0, 200);

        let candidates =
            candidate_keys(&config, &keys, EpochInterval::new(captured_at), tolerance);

        // One key per day in the log, so a capture can name at most two
        prop_assert!(candidates.len() <= 2);

        // PROPERTY: earlier day first when the window straddles a boundary
        if candidates.len() == 2 {
            prop_assert!(candidates[0].interval() < candidates[1].interval());
        }
    }

    #[test]
    fn prop_matching_is_deterministic(
        secret in arbitrary_secret(),
        day in 1u32..100_000,
        offset in 0u32..144,
    ) {
        let config = ProtocolConfig::default();
        let key = TemporaryExposureKey::new(EpochInterval::new(day * 144), &secret)
            .expect("16-byte secret");

        let broadcast = identifiers_for_full_day(&config, &key)[offset as usize];
        let observed = ProximityIdentifier::new(
            *broadcast.bytes(),
            EpochInterval::new(day * 144 + offset),
        );

        let first = find_matches(&config, std::slice::from_ref(&key), &[observed]);
        let second = find_matches(&config, std::slice::from_ref(&key), &[observed]);

        prop_assert_eq!(first, second);
    }
}
