//! Post-ingestion analytics over the normalized stage sequence.
//!
//! ## Submodules
//!
//! - `timeline` - compact per-round summaries and running economy totals
//! - `key_stages` - decision-point selection for the reduced summary view
//! - `carries` - cross-stage damage accumulation and carry ranking
//!
//! All of it is pure: each request folds over its own stage sequence and no
//! state survives the request.

pub mod carries;
pub mod key_stages;
pub mod timeline;

pub use carries::{rank_carries, CarryTotal};
pub use key_stages::{select_key_stages, DECISION_ROUNDS};
pub use timeline::{build_timeline, economy_totals, EconomyTotals, RoundSummary};
