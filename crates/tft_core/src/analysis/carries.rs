//! Carry ranking: cross-stage damage accumulation per unit.

use crate::models::StageSnapshot;

/// Accumulated damage contribution of one unit across the match.
#[derive(Debug, Clone, PartialEq)]
pub struct CarryTotal {
    pub unit_id: String,
    pub total_damage: f64,
    /// Number of rounds the unit dealt positive damage in.
    pub rounds: u32,
    /// Highest star level the unit was observed at.
    pub max_star: i64,
}

impl CarryTotal {
    pub fn avg_damage(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.total_damage / f64::from(self.rounds)
    }
}

/// Fold every positive damage record into per-unit totals and rank them.
///
/// Zero and negative damage entries are excluded from the ranking but are
/// not an error. Units are ordered by total damage descending; the sort is
/// stable, so ties keep first-encounter order (the upstream data defines no
/// secondary key).
pub fn rank_carries(stages: &[StageSnapshot]) -> Vec<CarryTotal> {
    let mut totals: Vec<CarryTotal> = Vec::new();

    for stage in stages {
        for record in &stage.unit_damage {
            if record.damage <= 0.0 {
                continue;
            }
            match totals.iter_mut().find(|t| t.unit_id == record.unit_id) {
                Some(total) => {
                    total.total_damage += record.damage;
                    total.rounds += 1;
                    total.max_star = total.max_star.max(record.star_level);
                }
                None => totals.push(CarryTotal {
                    unit_id: record.unit_id.clone(),
                    total_damage: record.damage,
                    rounds: 1,
                    max_star: record.star_level,
                }),
            }
        }
    }

    totals.sort_by(|a, b| {
        b.total_damage.partial_cmp(&a.total_damage).unwrap_or(std::cmp::Ordering::Equal)
    });
    totals
}
