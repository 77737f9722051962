use serde::Serialize;

/// Combat classification of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundType {
    Pvp,
    Pve,
    #[default]
    Unknown,
}

impl RoundType {
    /// Parse the upstream round-type tag. Anything unrecognized is `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("pvp") => RoundType::Pvp,
            Some(s) if s.eq_ignore_ascii_case("pve") => RoundType::Pve,
            _ => RoundType::Unknown,
        }
    }
}

/// A unit placed on the board or bench, with star level and equipped items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardPiece {
    /// Opaque unit identifier (e.g. `TFT9_Ahri`). Resolved to a display name
    /// only at output-assembly time.
    pub unit_id: String,
    /// 1-3 upstream; carried through as-is, not enforced.
    pub star_level: i64,
    /// Up to three equipped item ids, compacted (no gaps).
    pub items: Vec<String>,
}

/// Damage dealt by one unit during one round's combat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitDamageRecord {
    pub unit_id: String,
    pub damage: f64,
    pub star_level: i64,
}

/// Health and level of one lobby participant at a round boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerStatus {
    pub name: String,
    pub health: i64,
    pub level: i64,
}

/// One normalized round of the match.
///
/// Every field has a defined zero/empty fallback: a stage record that is
/// missing whole sub-objects still normalizes into a valid snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageSnapshot {
    /// `<stage>-<round>` label, e.g. `"2-1"`.
    pub round_label: String,
    pub round_type: RoundType,
    /// Opposing player for PVP rounds, when recorded.
    pub opponent: Option<String>,

    pub health: i64,
    pub gold: i64,
    pub level: i64,
    /// Passive income granted at the start of the round; 0 when absent.
    pub gold_earned: i64,
    /// Shop rerolls bought during the round; 0 when absent.
    pub rerolls: i64,

    pub board: Vec<BoardPiece>,
    pub bench: Vec<BoardPiece>,
    pub unit_damage: Vec<UnitDamageRecord>,
    /// Lobby-wide standings at this round, in upstream insertion order.
    pub players: Vec<PlayerStatus>,
    /// Unit ids offered in the shop.
    pub shop: Vec<String>,
    /// Per-player round outcome mapping, in upstream insertion order. The
    /// timeline aggregator reduces this to the tracked player's entry.
    pub round_results: Vec<(String, String)>,
}
