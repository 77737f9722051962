//! Per-round compact summaries and running economy totals.

use serde::Serialize;

use crate::models::{RoundType, StageSnapshot};

/// Compact view of one round for the summary timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    /// 1-based round position in the match.
    pub index: usize,
    pub label: String,
    pub round_type: RoundType,
    pub health: i64,
    pub gold: i64,
    pub level: i64,
    pub board_size: usize,
    /// Omitted from serialized output when zero to keep summaries compact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerolls: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

/// Reroll and income totals accumulated across the whole match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EconomyTotals {
    pub total_rerolls: i64,
    pub total_income: i64,
}

/// Build the compact per-round timeline for `player_name`.
pub fn build_timeline(stages: &[StageSnapshot], player_name: &str) -> Vec<RoundSummary> {
    stages
        .iter()
        .enumerate()
        .map(|(idx, stage)| RoundSummary {
            index: idx + 1,
            label: stage.round_label.clone(),
            round_type: stage.round_type,
            health: stage.health,
            gold: stage.gold,
            level: stage.level,
            board_size: stage.board.len(),
            income: (stage.gold_earned != 0).then_some(stage.gold_earned),
            rerolls: (stage.rerolls != 0).then_some(stage.rerolls),
            opponent: stage.opponent.clone(),
            outcome: round_outcome(stage, player_name).map(str::to_owned),
        })
        .collect()
}

/// Sum rerolls and income over the match; absent values were normalized to 0.
pub fn economy_totals(stages: &[StageSnapshot]) -> EconomyTotals {
    let mut totals = EconomyTotals::default();
    for stage in stages {
        totals.total_rerolls += stage.rerolls;
        totals.total_income += stage.gold_earned;
    }
    totals
}

/// Pick the round outcome entry for the requesting player.
///
/// The outcome mapping is keyed by full riot-style names (`Name#TAG`) while
/// the envelope carries the bare game name, so the match is a
/// case-insensitive substring check. First match wins; if two lobby names
/// both contain the requested name the upstream behavior is undefined and we
/// keep the first entry in mapping order.
fn round_outcome<'a>(stage: &'a StageSnapshot, player_name: &str) -> Option<&'a str> {
    if player_name.is_empty() {
        return None;
    }
    let needle = player_name.to_lowercase();
    stage
        .round_results
        .iter()
        .find(|(name, _)| name.to_lowercase().contains(&needle))
        .map(|(_, outcome)| outcome.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BoardPiece;

    fn stage(label: &str, health: i64, gold_earned: i64, rerolls: i64) -> StageSnapshot {
        StageSnapshot {
            round_label: label.to_string(),
            health,
            gold: 30,
            level: 6,
            gold_earned,
            rerolls,
            board: vec![BoardPiece::default(); 3],
            ..StageSnapshot::default()
        }
    }

    #[test]
    fn summaries_are_one_indexed_and_compact() {
        let stages = vec![stage("1-1", 100, 0, 0), stage("2-1", 94, 5, 2)];
        let timeline = build_timeline(&stages, "Alice");

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].index, 1);
        assert_eq!(timeline[1].index, 2);
        assert_eq!(timeline[1].label, "2-1");
        assert_eq!(timeline[1].board_size, 3);

        // zero income/rerolls are dropped, non-zero survive
        assert_eq!(timeline[0].income, None);
        assert_eq!(timeline[0].rerolls, None);
        assert_eq!(timeline[1].income, Some(5));
        assert_eq!(timeline[1].rerolls, Some(2));

        let json = serde_json::to_string(&timeline[0]).unwrap();
        assert!(!json.contains("income"));
        assert!(!json.contains("rerolls"));
    }

    #[test]
    fn economy_totals_sum_the_whole_match() {
        let stages = vec![stage("1-1", 100, 0, 0), stage("2-1", 94, 5, 2), stage("2-2", 90, 6, 1)];
        assert_eq!(economy_totals(&stages), EconomyTotals { total_rerolls: 3, total_income: 11 });
        assert_eq!(economy_totals(&[]), EconomyTotals::default());
    }

    #[test]
    fn outcome_matches_case_insensitive_substring() {
        let mut s = stage("2-1", 90, 0, 0);
        s.round_results =
            vec![("Bob#EUW".into(), "defeat".into()), ("ALICE#KR1".into(), "victory".into())];

        let timeline = build_timeline(&[s], "alice");
        assert_eq!(timeline[0].outcome.as_deref(), Some("victory"));
    }

    #[test]
    fn outcome_first_match_wins_on_colliding_names() {
        // Known limitation: "Ann" is a substring of both lobby names, and
        // the mapping gives no better key to disambiguate on. The first
        // entry in mapping order is kept.
        let mut s = stage("2-1", 90, 0, 0);
        s.round_results =
            vec![("Annabel#EUW".into(), "defeat".into()), ("Ann#EUW".into(), "victory".into())];

        let timeline = build_timeline(&[s], "Ann");
        assert_eq!(timeline[0].outcome.as_deref(), Some("defeat"));
    }

    #[test]
    fn no_outcome_without_results_or_player_name() {
        let mut s = stage("2-1", 90, 0, 0);
        assert_eq!(build_timeline(&[s.clone()], "Alice")[0].outcome, None);

        s.round_results = vec![("Alice#KR1".into(), "victory".into())];
        assert_eq!(build_timeline(&[s], "")[0].outcome, None);
    }
}
