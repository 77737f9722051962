use thiserror::Error;

/// Errors surfaced by the snapshot pipeline.
///
/// Only a totally unreadable envelope aborts a request. Per-field problems
/// inside a parsed stage are defaulted by the normalizer and never reach
/// this type.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The outer envelope or the stage array itself could not be parsed.
    #[error("malformed envelope: {reason}")]
    MalformedEnvelope { reason: String },

    /// No tracker snapshot exists for the requested match. Raised by the
    /// storage collaborator, not by this crate; defined here so the whole
    /// lookup path shares one error taxonomy.
    #[error("no tracker snapshot found for match {match_id}")]
    NotFound { match_id: String },

    /// The report request document could not be parsed.
    #[error("invalid report request: {reason}")]
    InvalidRequest { reason: String },

    /// Response serialization failed.
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl TrackerError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        TrackerError::MalformedEnvelope { reason: reason.into() }
    }

    /// Stable machine-readable tag used in the structured error object.
    pub fn kind(&self) -> &'static str {
        match self {
            TrackerError::MalformedEnvelope { .. } => "malformed_envelope",
            TrackerError::NotFound { .. } => "not_found",
            TrackerError::InvalidRequest { .. } => "invalid_request",
            TrackerError::Internal { .. } => "internal",
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
