//! Library entry points.
//!
//! The typed surface is [`build_report`]; [`build_report_json`] wraps it for
//! the surrounding tool-dispatch layer, which talks JSON strings in both
//! directions and expects failures as one structured error object.

mod report;

pub use report::{
    CarryView, DamageView, FinalState, MatchReport, PieceView, ReportMode, StageDetail,
};

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::data::NameResolver;
use crate::error::{Result, TrackerError};
use crate::ingest::{decode_envelope, normalize_stage};
use crate::models::StageSnapshot;

/// Parameters of one tracker lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportRequest {
    #[serde(default, rename = "matchIdentifier", alias = "matchId")]
    pub match_id: String,
    /// Defaults to [`ReportMode::Summary`] when absent or unrecognized.
    #[serde(default, deserialize_with = "mode_or_default")]
    pub mode: ReportMode,
}

fn mode_or_default<'de, D>(de: D) -> std::result::Result<ReportMode, D::Error>
where
    D: Deserializer<'de>,
{
    // Accept any JSON value here: a non-string mode is treated the same as
    // an unrecognized one.
    let raw = Option::<Value>::deserialize(de)?;
    Ok(ReportMode::parse(raw.as_ref().and_then(Value::as_str)))
}

/// Run the full pipeline over a stored snapshot blob.
///
/// Decodes the envelope, normalizes every stage record and assembles the
/// report shape selected by `request.mode`. The only failure is a malformed
/// envelope; partially-instrumented stages degrade to zeroed fields.
pub fn build_report(
    bytes: &[u8],
    request: &ReportRequest,
    resolver: &dyn NameResolver,
) -> Result<MatchReport> {
    let decoded = decode_envelope(bytes)?;
    debug!(
        match_id = %decoded.envelope.match_id,
        stages = decoded.stages.len(),
        "decoded snapshot envelope"
    );

    let stages: Vec<StageSnapshot> = decoded.stages.iter().map(normalize_stage).collect();
    Ok(report::assemble_report(&decoded.envelope, &stages, request, resolver))
}

/// JSON-string front of [`build_report`] for the tool-dispatch layer.
///
/// Always returns a single JSON document: the report on success, or
/// `{"error": {"kind", "message"}}` on failure, never a partial result.
pub fn build_report_json(bytes: &[u8], request_json: &str, resolver: &dyn NameResolver) -> String {
    let result = serde_json::from_str::<ReportRequest>(request_json)
        .map_err(|e| TrackerError::InvalidRequest { reason: e.to_string() })
        .and_then(|request| build_report(bytes, &request, resolver))
        .and_then(|report| {
            serde_json::to_string(&report).map_err(|e| TrackerError::Internal {
                reason: format!("report serialization failed: {e}"),
            })
        });

    match result {
        Ok(json) => json,
        Err(err) => error_json(&err),
    }
}

/// Render a failure as the structured error object of the JSON surface.
pub fn error_json(err: &TrackerError) -> String {
    serde_json::json!({
        "error": { "kind": err.kind(), "message": err.to_string() }
    })
    .to_string()
}
