//! The matching engine.
//!
//! Correlates captured identifiers with published rotating keys: for each
//! captured identifier, candidate keys are selected around its capture
//! interval and their windowed identifier sequences compared byte-for-byte
//! against the observation. The scan is cubic in (captured × candidates ×
//! window) but each factor is small: at most two candidates per capture and a
//! window of `2 * tolerance + 1` intervals.

use tracing::{debug, trace};

use proxid_crypto::IdentifierKey;

use crate::candidates::candidate_indices;
use crate::config::ProtocolConfig;
use crate::generator::identifiers_for_window_with;
use crate::identifier::ProximityIdentifier;
use crate::keys::TemporaryExposureKey;

/// One confirmed correspondence between a published rotating key and a
/// captured identifier.
///
/// Handed to downstream risk evaluation; the core mandates no further schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposureMatch {
    /// The published key that produced the captured identifier
    pub key: TemporaryExposureKey,
    /// The captured identifier, with its local capture interval
    pub captured: ProximityIdentifier,
}

/// Find every (key, captured identifier) pair where the key could have
/// produced the identifier within the configured clock-skew tolerance.
///
/// Pairs are emitted in the order captured identifiers were supplied, and
/// within one captured identifier, in candidate-key order (earlier day
/// first). A captured identifier can yield multiple pairs (duplicate
/// candidate keys or a derivation collision are reported, not collapsed),
/// and the scan never stops at the first hit.
///
/// An empty result means no exposure, not a failure.
pub fn find_matches(
    config: &ProtocolConfig,
    all_keys: &[TemporaryExposureKey],
    captured: &[ProximityIdentifier],
) -> Vec<ExposureMatch> {
    debug!(keys = all_keys.len(), captured = captured.len(), "scanning captured identifiers");

    // One identifier-key derivation per rotating key for the whole scan.
    // Candidate selection returns indices into `all_keys`, which pair each
    // candidate with its memoized key here.
    let identifier_keys: Vec<IdentifierKey> =
        all_keys.iter().map(|key| key.identifier_key(config)).collect();

    let mut matches = Vec::new();
    for observed in captured {
        let candidates =
            candidate_indices(config, all_keys, observed.interval(), config.tolerance());

        for key_index in candidates {
            let key = &all_keys[key_index];
            let generated = identifiers_for_window_with(
                config,
                &identifier_keys[key_index],
                key.interval(),
                observed.interval(),
                config.tolerance(),
            );

            for candidate in &generated {
                if candidate == observed {
                    trace!(
                        key_start = %key.interval(),
                        captured_at = %observed.interval(),
                        "captured identifier matched"
                    );
                    matches.push(ExposureMatch { key: key.clone(), captured: *observed });
                }
            }
        }
    }

    debug!(matches = matches.len(), "scan complete");
    matches
}
