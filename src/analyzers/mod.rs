//! Season statistics over normalized match records.
//!
//! Means and extremes by match and by opponent, goals against expected
//! goals, and referee outcome shares. Every analyzer reads the records and
//! none of them mutates them.

pub mod aggregate;
pub mod bias;
pub mod metrics;
pub mod types;
pub mod utility;

#[cfg(test)]
pub(crate) mod testing {
    use crate::record::{MatchRecord, Outcome};

    pub fn record(
        opponent: &str,
        goals_for: Option<u32>,
        goals_against: Option<u32>,
        xg_for: Option<f64>,
        xg_against: Option<f64>,
    ) -> MatchRecord {
        MatchRecord {
            date: None,
            start_time: String::new(),
            competition: String::new(),
            round: String::new(),
            day_of_week: String::new(),
            venue: None,
            result: None,
            goals_for,
            goals_against,
            opponent: opponent.to_string(),
            xg_for,
            xg_against,
            possession: String::new(),
            attendance: String::new(),
            captain: String::new(),
            formation: String::new(),
            referee: String::new(),
            notes: String::new(),
        }
    }

    pub fn officiated(referee: &str, result: Option<Outcome>) -> MatchRecord {
        MatchRecord {
            referee: referee.to_string(),
            result,
            ..record("X", None, None, None, None)
        }
    }
}
