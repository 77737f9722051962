use serde_json::Value;

use crate::models::{BoardPiece, PlayerStatus, RoundType, StageSnapshot, UnitDamageRecord};

/// Fixed item slots on a piece record. Absent slots are skipped, so the
/// resulting item list is compact (no gaps).
const ITEM_SLOTS: [&str; 3] = ["item1", "item2", "item3"];

/// Convert one raw stage record into a normalized snapshot.
///
/// Every extraction is defensive: missing sub-objects yield empty
/// collections, numbers arriving as strings are parsed with a 0 fallback,
/// and an absent round type becomes `Unknown`. This function never fails;
/// the worst case is a snapshot with empty and zeroed fields.
///
/// Board, bench, shop and result data are stored upstream as id-keyed maps
/// with no ordering guarantee beyond insertion order, so they convert to
/// lists in key-iteration order and are not re-sorted.
pub fn normalize_stage(raw: &Value) -> StageSnapshot {
    let me = raw.get("me");

    StageSnapshot {
        round_label: str_field(raw, "roundName").unwrap_or_default(),
        round_type: RoundType::parse(raw.get("roundType").and_then(Value::as_str)),
        opponent: str_field(raw, "vsPlayer").filter(|s| !s.is_empty()),
        health: opt_int_field(me, "health"),
        gold: opt_int_field(me, "gold"),
        level: opt_int_field(me, "level"),
        gold_earned: opt_int_field(me, "goldEarned"),
        rerolls: opt_int_field(me, "rerollCount"),
        board: pieces(raw.get("board")),
        bench: pieces(raw.get("bench")),
        unit_damage: damage_records(raw.get("damages")),
        players: player_statuses(raw.get("players")),
        shop: shop_contents(raw.get("shop")),
        round_results: round_results(raw.get("result")),
    }
}

/// Lenient integer read: JSON numbers and numeric strings both parse,
/// anything else is 0.
fn as_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn as_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn int_field(obj: &Value, key: &str) -> i64 {
    obj.get(key).map(as_i64).unwrap_or(0)
}

fn opt_int_field(obj: Option<&Value>, key: &str) -> i64 {
    obj.map(|o| int_field(o, key)).unwrap_or(0)
}

fn str_field(obj: &Value, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn pieces(value: Option<&Value>) -> Vec<BoardPiece> {
    let Some(Value::Object(map)) = value else {
        return Vec::new();
    };
    map.values().map(piece_from_value).collect()
}

fn piece_from_value(value: &Value) -> BoardPiece {
    BoardPiece {
        unit_id: str_field(value, "unitName").unwrap_or_default(),
        star_level: int_field(value, "starLevel"),
        items: ITEM_SLOTS
            .iter()
            .filter_map(|slot| str_field(value, slot))
            .filter(|item| !item.is_empty())
            .collect(),
    }
}

/// Damage entries have shipped both as an array and as a unit-keyed map.
fn damage_records(value: Option<&Value>) -> Vec<UnitDamageRecord> {
    match value {
        Some(Value::Array(items)) => items.iter().map(damage_from_value).collect(),
        Some(Value::Object(map)) => map.values().map(damage_from_value).collect(),
        _ => Vec::new(),
    }
}

fn damage_from_value(value: &Value) -> UnitDamageRecord {
    UnitDamageRecord {
        unit_id: str_field(value, "unitName").unwrap_or_default(),
        damage: value.get("damage").map(as_f64).unwrap_or(0.0),
        star_level: int_field(value, "starLevel"),
    }
}

/// Lobby standings: a name-keyed map, or an array of entries carrying their
/// own `name` field.
fn player_statuses(value: Option<&Value>) -> Vec<PlayerStatus> {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(name, entry)| PlayerStatus {
                name: name.clone(),
                health: int_field(entry, "health"),
                level: int_field(entry, "level"),
            })
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|entry| PlayerStatus {
                name: str_field(entry, "name").unwrap_or_default(),
                health: int_field(entry, "health"),
                level: int_field(entry, "level"),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn shop_contents(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Object(map)) => {
            map.values().filter_map(Value::as_str).map(str::to_owned).collect()
        }
        Some(Value::Array(items)) => {
            items.iter().filter_map(Value::as_str).map(str::to_owned).collect()
        }
        _ => Vec::new(),
    }
}

fn round_results(value: Option<&Value>) -> Vec<(String, String)> {
    let Some(Value::Object(map)) = value else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(name, outcome)| outcome.as_str().map(|o| (name.clone(), o.to_owned())))
        .collect()
}
