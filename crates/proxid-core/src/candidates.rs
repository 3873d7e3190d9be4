//! Candidate key selection.
//!
//! Given the local interval a broadcast was captured at, finds which
//! published rotating keys could possibly have produced it. Clock skew up to
//! the tolerance width means the sender's interval may fall on either side of
//! a day boundary, so up to two day slots are considered: the day containing
//! `captured_at - tolerance` and, if different, the day containing
//! `captured_at + tolerance`. Under the one-key-per-day invariant this yields
//! at most two keys, earlier day first.

use crate::config::ProtocolConfig;
use crate::interval::EpochInterval;
use crate::keys::TemporaryExposureKey;

/// Select the keys whose validity day could cover a capture at
/// `captured_at`, allowing `tolerance` intervals of clock skew.
///
/// Keys from the earlier day slot come first; within a slot, keys keep their
/// `all_keys` order.
pub fn candidate_keys<'a>(
    config: &ProtocolConfig,
    all_keys: &'a [TemporaryExposureKey],
    captured_at: EpochInterval,
    tolerance: u32,
) -> Vec<&'a TemporaryExposureKey> {
    candidate_indices(config, all_keys, captured_at, tolerance)
        .into_iter()
        .map(|index| &all_keys[index])
        .collect()
}

/// Positions in `all_keys` of the candidate keys, in candidate order.
///
/// The matching engine uses indices to pair each candidate with its memoized
/// identifier key.
pub(crate) fn candidate_indices(
    config: &ProtocolConfig,
    all_keys: &[TemporaryExposureKey],
    captured_at: EpochInterval,
    tolerance: u32,
) -> Vec<usize> {
    let earliest_day = config.day_start(captured_at.saturating_sub(tolerance));
    let latest_day = config.day_start(captured_at.saturating_add(tolerance));

    let mut indices = indices_for_day(config, all_keys, earliest_day);
    if latest_day != earliest_day {
        indices.extend(indices_for_day(config, all_keys, latest_day));
    }
    indices
}

fn indices_for_day(
    config: &ProtocolConfig,
    all_keys: &[TemporaryExposureKey],
    day_start: EpochInterval,
) -> Vec<usize> {
    all_keys
        .iter()
        .enumerate()
        .filter(|(_, key)| config.day_start(key.interval()) == day_start)
        .map(|(index, _)| index)
        .collect()
}
