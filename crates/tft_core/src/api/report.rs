//! Assembled report model and the output assembler.

use serde::Serialize;

use super::ReportRequest;
use crate::analysis::{
    build_timeline, economy_totals, rank_carries, select_key_stages, EconomyTotals, RoundSummary,
};
use crate::data::{NameKind, NameResolver};
use crate::models::{BoardPiece, PlayerStatus, RawEnvelope, RoundType, StageSnapshot};

/// How much of the timeline the assembled report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Compact round list plus detailed views of the decision-point stages.
    #[default]
    Summary,
    /// Detailed views of every stage; the compact list is redundant and
    /// omitted.
    Complete,
}

impl ReportMode {
    /// Absent or unrecognized mode values fall back to `Summary`; mode
    /// parsing never fails.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("complete") => ReportMode::Complete,
            _ => ReportMode::Summary,
        }
    }
}

/// Board or bench piece with resolved display names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieceView {
    pub name: String,
    pub star_level: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageView {
    pub name: String,
    pub damage: f64,
    pub star_level: i64,
}

/// One of the top damage contributors of the match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarryView {
    pub name: String,
    pub total_damage: f64,
    pub avg_damage: f64,
    pub rounds: u32,
    pub star_level: i64,
}

/// Full view of one round, emitted for key stages (`summary`) or for every
/// stage (`complete`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageDetail {
    /// 1-based round position, matching [`RoundSummary::index`].
    pub index: usize,
    pub label: String,
    pub round_type: RoundType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    pub health: i64,
    pub gold: i64,
    pub level: i64,
    pub board: Vec<PieceView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bench: Vec<PieceView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub damage: Vec<DamageView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shop: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub standings: Vec<PlayerStatus>,
}

/// Match-end state: the last stage always represents it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FinalState {
    pub health: i64,
    pub level: i64,
    pub gold: i64,
    pub board: Vec<PieceView>,
}

/// The assembled result of one tracker lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub match_id: String,
    pub server: String,
    pub player: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_label: Option<String>,
    pub mode: ReportMode,
    /// Compact per-round timeline; present in `summary` mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<Vec<RoundSummary>>,
    pub stages: Vec<StageDetail>,
    pub final_state: FinalState,
    /// Top damage contributors, ranked.
    pub carries: Vec<CarryView>,
    pub economy: EconomyTotals,
}

/// Carries surfaced in the report.
const TOP_CARRIES: usize = 5;

/// Combine timeline, key-stage selection and carry analytics into the
/// requested report shape. All unit and item ids pass through the resolver;
/// raw opaque ids never appear in the output.
pub(crate) fn assemble_report(
    envelope: &RawEnvelope,
    stages: &[StageSnapshot],
    request: &ReportRequest,
    resolver: &dyn NameResolver,
) -> MatchReport {
    let labels: Vec<&str> = stages.iter().map(|s| s.round_label.as_str()).collect();

    let (rounds, detail_indices) = match request.mode {
        ReportMode::Summary => {
            (Some(build_timeline(stages, &envelope.summoner_name)), select_key_stages(&labels))
        }
        ReportMode::Complete => (None, (0..stages.len()).collect()),
    };

    let details = detail_indices
        .into_iter()
        .filter_map(|idx| stages.get(idx).map(|stage| stage_detail(idx, stage, resolver)))
        .collect();

    let final_state = stages
        .last()
        .map(|stage| FinalState {
            health: stage.health,
            level: stage.level,
            gold: stage.gold,
            board: piece_views(&stage.board, resolver),
        })
        .unwrap_or_default();

    let carries = rank_carries(stages)
        .into_iter()
        .take(TOP_CARRIES)
        .map(|total| CarryView {
            name: resolver.resolve(NameKind::Champion, &total.unit_id),
            total_damage: total.total_damage,
            avg_damage: total.avg_damage(),
            rounds: total.rounds,
            star_level: total.max_star,
        })
        .collect();

    MatchReport {
        match_id: if envelope.match_id.is_empty() {
            request.match_id.clone()
        } else {
            envelope.match_id.clone()
        },
        server: envelope.server.clone(),
        player: envelope.summoner_name.clone(),
        set_name: envelope.set_name.clone(),
        rank_label: envelope.rank_label.clone(),
        mode: request.mode,
        rounds,
        stages: details,
        final_state,
        carries,
        economy: economy_totals(stages),
    }
}

fn stage_detail(idx: usize, stage: &StageSnapshot, resolver: &dyn NameResolver) -> StageDetail {
    StageDetail {
        index: idx + 1,
        label: stage.round_label.clone(),
        round_type: stage.round_type,
        opponent: stage.opponent.clone(),
        health: stage.health,
        gold: stage.gold,
        level: stage.level,
        board: piece_views(&stage.board, resolver),
        bench: piece_views(&stage.bench, resolver),
        damage: stage
            .unit_damage
            .iter()
            .map(|record| DamageView {
                name: resolver.resolve(NameKind::Champion, &record.unit_id),
                damage: record.damage,
                star_level: record.star_level,
            })
            .collect(),
        shop: stage.shop.iter().map(|id| resolver.resolve(NameKind::Champion, id)).collect(),
        standings: stage.players.clone(),
    }
}

fn piece_views(pieces: &[BoardPiece], resolver: &dyn NameResolver) -> Vec<PieceView> {
    pieces
        .iter()
        .map(|piece| PieceView {
            name: resolver.resolve(NameKind::Champion, &piece.unit_id),
            star_level: piece.star_level,
            items: piece.items.iter().map(|id| resolver.resolve(NameKind::Item, id)).collect(),
        })
        .collect()
}
