use lz4_flex::decompress_size_prepended;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::RawEnvelope;

/// Envelope plus the raw stage array extracted from its `stageData` field.
#[derive(Debug)]
pub struct DecodedEnvelope {
    pub envelope: RawEnvelope,
    pub stages: Vec<Value>,
}

/// Decode a stored snapshot blob.
///
/// Storage may or may not compress payloads, so the buffer is first tried as
/// size-prepended LZ4; when that fails it is parsed as plain UTF-8 JSON.
/// `stageData` is accepted either as a JSON-encoded string or as a
/// pre-decoded array.
///
/// The only fatal condition is total unparseability: the envelope itself does
/// not parse, or `stageData` does not decode to an array.
pub fn decode_envelope(bytes: &[u8]) -> Result<DecodedEnvelope> {
    let payload = match decompress_size_prepended(bytes) {
        Ok(decompressed) => decompressed,
        Err(err) => {
            debug!("snapshot payload is not LZ4 framed ({err}); parsing as plain text");
            bytes.to_vec()
        }
    };

    let mut envelope: RawEnvelope = serde_json::from_slice(&payload)
        .map_err(|e| TrackerError::malformed(format!("envelope parse failed: {e}")))?;

    let stages = match std::mem::take(&mut envelope.stage_data) {
        Value::Array(items) => items,
        Value::String(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(other) => {
                return Err(TrackerError::malformed(format!(
                    "stageData decoded to {}, expected an array",
                    json_type_name(&other)
                )))
            }
            Err(e) => {
                return Err(TrackerError::malformed(format!("stageData string did not decode: {e}")))
            }
        },
        other => {
            return Err(TrackerError::malformed(format!(
                "stageData is {}, expected a string or an array",
                json_type_name(&other)
            )))
        }
    };

    Ok(DecodedEnvelope { envelope, stages })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lz4_flex::compress_prepend_size;
    use serde_json::json;

    fn envelope_json(stage_data: Value) -> String {
        json!({
            "matchId": "EUW1_1234",
            "server": "euw",
            "summonerName": "Alice",
            "trackerId": "t-42",
            "stageData": stage_data,
        })
        .to_string()
    }

    #[test]
    fn plain_and_compressed_bytes_decode_identically() {
        let text = envelope_json(json!([{"roundName": "1-1"}]));

        let plain = decode_envelope(text.as_bytes()).unwrap();
        let compressed = decode_envelope(&compress_prepend_size(text.as_bytes())).unwrap();

        assert_eq!(plain.envelope.match_id, compressed.envelope.match_id);
        assert_eq!(plain.stages, compressed.stages);
    }

    #[test]
    fn stage_data_string_and_array_are_equivalent() {
        let stages = json!([{"roundName": "1-1"}, {"roundName": "2-1"}]);

        let as_array = decode_envelope(envelope_json(stages.clone()).as_bytes()).unwrap();
        let as_string =
            decode_envelope(envelope_json(Value::String(stages.to_string())).as_bytes()).unwrap();

        assert_eq!(as_array.stages, as_string.stages);
        assert_eq!(as_array.stages.len(), 2);
    }

    #[test]
    fn missing_metadata_fields_default() {
        let text = json!({"stageData": []}).to_string();
        let decoded = decode_envelope(text.as_bytes()).unwrap();
        assert!(decoded.envelope.match_id.is_empty());
        assert!(decoded.envelope.set_name.is_none());
        assert!(decoded.stages.is_empty());
    }

    #[test]
    fn unparseable_envelope_is_fatal() {
        let err = decode_envelope(b"not json at all").unwrap_err();
        assert!(matches!(err, TrackerError::MalformedEnvelope { .. }));
    }

    #[test]
    fn non_array_stage_data_is_fatal() {
        for stage_data in [json!({"oops": 1}), json!(7), Value::Null, json!("{\"k\":1}")] {
            let err = decode_envelope(envelope_json(stage_data).as_bytes()).unwrap_err();
            assert!(matches!(err, TrackerError::MalformedEnvelope { .. }));
        }
    }
}
