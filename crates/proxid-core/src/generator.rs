//! Rolling identifier generation.
//!
//! Reconstructs the identifier sequence a rotating key emits: the full
//! 144-interval day for broadcast precomputation and self-test, or a
//! tolerance window around a target interval for matching. A key never
//! produces identifiers outside its own validity day, so windows are clamped
//! to `[day_start, day_start + intervals_per_day - 1]`.

use proxid_crypto::{IdentifierKey, derive_identifier};

use crate::config::ProtocolConfig;
use crate::identifier::ProximityIdentifier;
use crate::interval::EpochInterval;
use crate::keys::TemporaryExposureKey;

/// Generate the identifiers for every interval in the key's validity day.
///
/// Returns one identifier per interval in `key.interval() + 0 ..
/// intervals_per_day`, in ascending interval order.
pub fn identifiers_for_full_day(
    config: &ProtocolConfig,
    key: &TemporaryExposureKey,
) -> Vec<ProximityIdentifier> {
    let identifier_key = key.identifier_key(config);
    let start = key.interval();

    (0..config.intervals_per_day().get())
        .map(|offset| derive_at(config, &identifier_key, start.saturating_add(offset)))
        .collect()
}

/// Generate the identifiers for a tolerance window around `target`, clamped
/// to the key's own day.
///
/// The window is `[target - tolerance, target + tolerance]`, both bounds
/// inclusive; the lower bound is raised to the key's day start and the upper
/// bound lowered to the last interval of that day. Returns identifiers in
/// ascending interval order, empty if the window does not intersect the
/// key's day.
pub fn identifiers_for_window(
    config: &ProtocolConfig,
    key: &TemporaryExposureKey,
    target: EpochInterval,
    tolerance: u32,
) -> Vec<ProximityIdentifier> {
    let identifier_key = key.identifier_key(config);
    identifiers_for_window_with(config, &identifier_key, key.interval(), target, tolerance)
}

/// Windowed generation with a caller-held identifier key.
///
/// The matching engine derives each candidate key's identifier key once per
/// scan and reuses it here; the output is identical to
/// [`identifiers_for_window`].
pub(crate) fn identifiers_for_window_with(
    config: &ProtocolConfig,
    identifier_key: &IdentifierKey,
    key_start: EpochInterval,
    target: EpochInterval,
    tolerance: u32,
) -> Vec<ProximityIdentifier> {
    let day_start = config.day_start(key_start);
    let day_end = config.day_end(key_start);

    let lower = target.saturating_sub(tolerance).max(day_start);
    let upper = target.saturating_add(tolerance).min(day_end);
    if lower > upper {
        return Vec::new();
    }

    (lower.get()..=upper.get())
        .map(|interval| derive_at(config, identifier_key, EpochInterval::new(interval)))
        .collect()
}

fn derive_at(
    config: &ProtocolConfig,
    identifier_key: &IdentifierKey,
    interval: EpochInterval,
) -> ProximityIdentifier {
    let data = derive_identifier(identifier_key, config.identifier_label(), interval.get());
    ProximityIdentifier::new(data, interval)
}
