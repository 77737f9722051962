//! Data model for one tracked match.
//!
//! Everything here is built once per tracker lookup and discarded with the
//! request. `RawEnvelope` mirrors the stored wire object; the remaining types
//! are the normalized view produced by [`crate::ingest`].

mod envelope;
mod stage;

pub use envelope::RawEnvelope;
pub use stage::{BoardPiece, PlayerStatus, RoundType, StageSnapshot, UnitDamageRecord};
