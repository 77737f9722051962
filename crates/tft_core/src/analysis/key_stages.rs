//! Decision-point selection.
//!
//! The reduced summary view does not show every round in detail; it shows
//! the rounds where the player made the choices that decide a match:
//! augment-selection rounds and the late-game checkpoints.

/// Canonical decision-point round labels, in match order.
pub const DECISION_ROUNDS: [&str; 5] = ["2-1", "3-2", "4-2", "5-1", "6-1"];

/// Select the indices of the decision-point stages.
///
/// The first occurrence of each canonical label is selected (repeats are
/// ignored) and the final stage index is always included, so the selection
/// ends on the match-end state. The result is strictly ascending and
/// deduplicated. Labels that never occur are simply skipped.
pub fn select_key_stages<S: AsRef<str>>(labels: &[S]) -> Vec<usize> {
    let mut selected = Vec::with_capacity(DECISION_ROUNDS.len() + 1);

    for canonical in DECISION_ROUNDS {
        if let Some(idx) = labels.iter().position(|label| label.as_ref() == canonical) {
            selected.push(idx);
        }
    }

    if let Some(last) = labels.len().checked_sub(1) {
        selected.push(last);
    }

    selected.sort_unstable();
    selected.dedup();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_first_occurrences_plus_final_stage() {
        let labels = ["1-1", "2-1", "2-1", "3-2", "4-2", "5-1", "6-1", "6-2"];
        // First "2-1" is index 1; the repeat at index 2 is ignored. The final
        // stage (index 7) is appended even though "6-2" is not canonical.
        assert_eq!(select_key_stages(&labels), vec![1, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn final_stage_not_duplicated_when_already_selected() {
        let labels = ["1-1", "2-1"];
        assert_eq!(select_key_stages(&labels), vec![1]);
    }

    #[test]
    fn short_match_selects_only_final_stage() {
        let labels = ["1-1", "1-2", "1-3"];
        assert_eq!(select_key_stages(&labels), vec![2]);
    }

    #[test]
    fn empty_sequence_selects_nothing() {
        assert_eq!(select_key_stages::<&str>(&[]), Vec::<usize>::new());
    }

    #[test]
    fn selection_is_strictly_ascending() {
        let labels = ["6-1", "5-1", "4-2", "3-2", "2-1"];
        let selected = select_key_stages(&labels);
        assert!(selected.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(selected, vec![0, 1, 2, 3, 4]);
    }
}
