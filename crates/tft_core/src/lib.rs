//! # tft_core - Match Snapshot Ingestion & Analytics Engine
//!
//! Turns one stored tracker snapshot (a possibly-compressed blob describing
//! a player's round-by-round performance in a single match) into a
//! normalized timeline and derived analytics: economy tracking, key
//! decision-point selection and carry-damage ranking.
//!
//! ## Pipeline
//! 1. [`ingest::decode_envelope`] - bytes → envelope + raw stage array
//! 2. [`ingest::normalize_stage`] - raw record → [`models::StageSnapshot`]
//! 3. [`analysis`] - timeline, key stages, carries, economy
//! 4. [`api::build_report`] - assembled `summary` or `complete` report
//!
//! The crate fetches nothing and persists nothing: bytes come from the
//! storage collaborator, display names come from an injected
//! [`data::NameResolver`], and each request builds and discards its own
//! model.

pub mod analysis;
pub mod api;
pub mod data;
pub mod error;
pub mod ingest;
pub mod models;

pub use api::{
    build_report, build_report_json, error_json, MatchReport, ReportMode, ReportRequest,
};
pub use data::{NameKind, NameResolver, StaticNameResolver};
pub use error::{Result, TrackerError};
pub use models::{RawEnvelope, StageSnapshot};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
