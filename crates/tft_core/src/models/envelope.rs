use serde::Deserialize;
use serde_json::Value;

/// Outer container object as it comes back from snapshot storage.
///
/// The writer side is not under our control: fields appear and disappear
/// across game patches, so every one of them is defaulted. `stageData` is
/// usually a JSON-encoded string holding the stage array, but older writers
/// stored the array directly; both forms are accepted by the decoder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnvelope {
    #[serde(default)]
    pub match_id: String,

    #[serde(default)]
    pub server: String,

    /// Game name of the tracked player.
    #[serde(default)]
    pub summoner_name: String,

    #[serde(default)]
    pub tracker_id: String,

    /// JSON string or pre-decoded array; see [`crate::ingest::decode_envelope`].
    #[serde(default)]
    pub stage_data: Value,

    #[serde(default)]
    pub portal: Option<String>,

    #[serde(default)]
    pub rank_label: Option<String>,

    #[serde(default)]
    pub set_name: Option<String>,
}
