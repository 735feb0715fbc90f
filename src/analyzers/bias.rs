//! Referee outcome bias.
//!
//! Referees are kept in the order they first appear in the match log, and
//! that order decides ties when picking the referee with the largest share
//! of an outcome.

use serde::Serialize;

use crate::analyzers::utility::{Extremum, pct, select_first};
use crate::record::{MatchRecord, Outcome};

/// Win/draw/loss counts for one referee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefereeOutcomes {
    pub referee: String,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl RefereeOutcomes {
    pub fn total(&self) -> usize {
        self.wins + self.draws + self.losses
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Win => self.wins,
            Outcome::Draw => self.draws,
            Outcome::Loss => self.losses,
        }
    }

    pub fn share(&self, outcome: Outcome) -> f64 {
        pct(self.count(outcome), self.total())
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
    }
}

/// One referee's counts with derived percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefereeShare {
    pub referee: String,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub total: usize,
    pub win_pct: f64,
    pub draw_pct: f64,
    pub loss_pct: f64,
}

/// Referee with the largest share of one outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiasLeader {
    pub referee: String,
    pub pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BiasLeaders {
    pub most_wins: Option<BiasLeader>,
    pub most_draws: Option<BiasLeader>,
    pub most_losses: Option<BiasLeader>,
}

/// Referee → outcome counts, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefereeOutcomeTable {
    entries: Vec<RefereeOutcomes>,
}

impl RefereeOutcomeTable {
    /// Counts results per referee. Matches without a parsed result or with a
    /// blank referee do not contribute.
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let mut table = RefereeOutcomeTable::default();
        for r in records {
            let referee = r.referee.trim();
            if referee.is_empty() {
                continue;
            }
            if let Some(outcome) = r.result {
                table.entry(referee).record(outcome);
            }
        }
        table
    }

    /// Builds a table from pre-aggregated counts, keeping the given order.
    /// Entries with no matches are dropped.
    pub fn from_counts(entries: impl IntoIterator<Item = RefereeOutcomes>) -> Self {
        RefereeOutcomeTable {
            entries: entries.into_iter().filter(|e| e.total() > 0).collect(),
        }
    }

    fn entry(&mut self, referee: &str) -> &mut RefereeOutcomes {
        let idx = match self.entries.iter().position(|e| e.referee == referee) {
            Some(i) => i,
            None => {
                self.entries.push(RefereeOutcomes {
                    referee: referee.to_string(),
                    ..Default::default()
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx]
    }

    pub fn entries(&self) -> &[RefereeOutcomes] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn shares(&self) -> Vec<RefereeShare> {
        self.entries
            .iter()
            .map(|e| RefereeShare {
                referee: e.referee.clone(),
                wins: e.wins,
                draws: e.draws,
                losses: e.losses,
                total: e.total(),
                win_pct: e.share(Outcome::Win),
                draw_pct: e.share(Outcome::Draw),
                loss_pct: e.share(Outcome::Loss),
            })
            .collect()
    }

    /// Referee with the highest share of `outcome`; first-seen wins a tie.
    pub fn leader(&self, outcome: Outcome) -> Option<BiasLeader> {
        select_first(
            self.entries.iter().map(|e| (e, Some(e.share(outcome)))),
            Extremum::Max,
        )
        .map(|(e, pct)| BiasLeader {
            referee: e.referee.clone(),
            pct,
        })
    }

    pub fn leaders(&self) -> BiasLeaders {
        BiasLeaders {
            most_wins: self.leader(Outcome::Win),
            most_draws: self.leader(Outcome::Draw),
            most_losses: self.leader(Outcome::Loss),
        }
    }
}
