//! Snapshot ingestion: byte buffer in, normalized stage sequence out.
//!
//! - `envelope` decodes the stored blob into the outer envelope and the raw
//!   stage array. This is the only stage of the pipeline that can fail.
//! - `normalize` converts each raw stage record into a
//!   [`StageSnapshot`](crate::models::StageSnapshot) with defined fallbacks
//!   for every field. It never fails.

mod envelope;
mod normalize;

pub use envelope::{decode_envelope, DecodedEnvelope};
pub use normalize::normalize_stage;
