use serde::Serialize;

use crate::analyzers::types::{GroupSummary, MatchExtreme, MatchRef};
use crate::analyzers::utility::{Extremum, mean, select_first};
use crate::record::MatchRecord;

/// Season means of the goal and xG columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeasonAverages {
    pub goals_for: Option<f64>,
    pub goals_against: Option<f64>,
    pub xg_for: Option<f64>,
    pub xg_against: Option<f64>,
}

impl SeasonAverages {
    pub fn from_records(records: &[MatchRecord]) -> Self {
        SeasonAverages {
            goals_for: mean(records.iter().map(|r| r.goals_for.map(f64::from))),
            goals_against: mean(records.iter().map(|r| r.goals_against.map(f64::from))),
            xg_for: mean(records.iter().map(|r| r.xg_for)),
            xg_against: mean(records.iter().map(|r| r.xg_against)),
        }
    }
}

/// Groups records by exact opponent text. Groups come out in the order each
/// opponent is first met. Records with a blank opponent are left out.
pub fn group_by_opponent(records: &[MatchRecord]) -> Vec<GroupSummary> {
    let mut keys: Vec<&str> = Vec::new();
    let mut members: Vec<Vec<&MatchRecord>> = Vec::new();

    for r in records {
        if r.opponent.trim().is_empty() {
            continue;
        }
        match keys.iter().position(|k| *k == r.opponent) {
            Some(i) => members[i].push(r),
            None => {
                keys.push(&r.opponent);
                members.push(vec![r]);
            }
        }
    }

    keys.into_iter()
        .zip(members)
        .map(|(opponent, group)| GroupSummary {
            opponent: opponent.to_string(),
            matches: group.len(),
            mean_xg_for: mean(group.iter().map(|r| r.xg_for)),
            mean_xg_against: mean(group.iter().map(|r| r.xg_against)),
        })
        .collect()
}

/// Opponents against whom the team created or conceded the most and least xG.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpponentExtremes {
    /// Highest mean xG for.
    pub best_attack: Option<GroupSummary>,
    /// Lowest mean xG for.
    pub worst_attack: Option<GroupSummary>,
    /// Lowest mean xG against.
    pub best_defence: Option<GroupSummary>,
    /// Highest mean xG against.
    pub worst_defence: Option<GroupSummary>,
}

impl OpponentExtremes {
    pub fn from_groups(groups: &[GroupSummary]) -> Self {
        let pick = |key: fn(&GroupSummary) -> Option<f64>, which| {
            select_first(groups.iter().map(|g| (g, key(g))), which).map(|(g, _)| g.clone())
        };

        OpponentExtremes {
            best_attack: pick(|g| g.mean_xg_for, Extremum::Max),
            worst_attack: pick(|g| g.mean_xg_for, Extremum::Min),
            best_defence: pick(|g| g.mean_xg_against, Extremum::Min),
            worst_defence: pick(|g| g.mean_xg_against, Extremum::Max),
        }
    }
}

/// Selects the single match with the smallest or largest value of `key`.
/// Earliest match wins a tie.
pub fn select_match(
    records: &[MatchRecord],
    key: impl Fn(&MatchRecord) -> Option<u32>,
    which: Extremum,
) -> Option<MatchExtreme> {
    select_first(records.iter().enumerate().map(|(i, r)| (i, key(r))), which).map(
        |(index, value)| MatchExtreme {
            at: MatchRef::new(index, &records[index]),
            value,
        },
    )
}

/// Highest- and lowest-scoring matches at each end of the pitch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchExtremes {
    pub most_goals_for: Option<MatchExtreme>,
    pub fewest_goals_for: Option<MatchExtreme>,
    pub most_goals_against: Option<MatchExtreme>,
    pub fewest_goals_against: Option<MatchExtreme>,
}

impl MatchExtremes {
    pub fn from_records(records: &[MatchRecord]) -> Self {
        MatchExtremes {
            most_goals_for: select_match(records, |r| r.goals_for, Extremum::Max),
            fewest_goals_for: select_match(records, |r| r.goals_for, Extremum::Min),
            most_goals_against: select_match(records, |r| r.goals_against, Extremum::Max),
            fewest_goals_against: select_match(records, |r| r.goals_against, Extremum::Min),
        }
    }
}
