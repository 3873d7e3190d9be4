//! Proxid Exposure-Notification Core
//!
//! The cryptographic core of a decentralized proximity-exposure-notification
//! protocol: rotating identifiers derived from daily secrets, and a
//! time-windowed matching engine that correlates captured broadcasts with
//! rotating keys later published by diagnosed users.
//!
//! # Architecture
//!
//! Data flows one way, leaves first:
//!
//! ```text
//! EpochInterval (temporal model)
//!        │
//!        ▼
//! proxid-crypto (HKDF → identifier key, AES-128 → identifier)
//!        │
//!        ▼
//! generator (full-day / windowed identifier sequences)
//!        │                    candidates (which keys fit a capture time)
//!        │                         │
//!        └────────┬────────────────┘
//!                 ▼
//!            matching (find_matches)
//! ```
//!
//! Every operation is a pure, synchronous computation over caller-supplied
//! snapshots: no wall clock, no RNG, no I/O. Callers hand in
//! [`EpochInterval`] values, key material, and captured identifiers, and get
//! values back; the [`store`] module defines the boundary to whatever
//! persists them.
//!
//! Matching is fuzzy in time. A scanner stamps captures with its *own*
//! interval, and the broadcaster's clock may disagree, so the engine
//! compares a captured identifier against every identifier a candidate key
//! emitted within the configured tolerance window (±12 intervals by
//! default), clamped to that key's validity day.
//!
//! Protocol constants (interval grid, day length, tolerance, derivation
//! labels) live in [`ProtocolConfig`] and are passed explicitly to every
//! entry point.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod candidates;
pub mod captured;
pub mod config;
pub mod error;
pub mod generator;
pub mod identifier;
pub mod interval;
pub mod keys;
pub mod matching;
pub mod metadata;
pub mod store;

pub use candidates::candidate_keys;
pub use captured::CapturedPayload;
pub use config::ProtocolConfig;
pub use error::ProtocolError;
pub use generator::{identifiers_for_full_day, identifiers_for_window};
pub use identifier::ProximityIdentifier;
pub use interval::EpochInterval;
pub use keys::{DiagnosisKey, TemporaryExposureKey};
pub use matching::{ExposureMatch, find_matches};
pub use metadata::{AssociatedMetadata, METADATA_LENGTH};
pub use store::{ExposureStore, MemoryStore, StoreError};
