//! Goals against expected goals.

use serde::Serialize;

use crate::analyzers::types::{MatchDelta, MatchRef};
use crate::analyzers::utility::mean;
use crate::record::MatchRecord;

/// Absolute goals-minus-xG margin beyond which a match is significant.
pub const SIGNIFICANT_DELTA: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Performance {
    Overperformance,
    Expected,
    Underperformance,
}

impl Performance {
    /// Strictly above `+SIGNIFICANT_DELTA` or strictly below `-SIGNIFICANT_DELTA`.
    pub fn classify(delta: f64) -> Self {
        if delta > SIGNIFICANT_DELTA {
            Performance::Overperformance
        } else if delta < -SIGNIFICANT_DELTA {
            Performance::Underperformance
        } else {
            Performance::Expected
        }
    }
}

/// `goals_for - xg_for`, if both are present.
pub fn goals_vs_xg(record: &MatchRecord) -> Option<f64> {
    Some(f64::from(record.goals_for?) - record.xg_for?)
}

/// `goals_against - xg_against`, if both are present.
pub fn goals_against_vs_xg(record: &MatchRecord) -> Option<f64> {
    Some(f64::from(record.goals_against?) - record.xg_against?)
}

/// Season-level finishing summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct XgPerformance {
    pub mean_goals_vs_xg: Option<f64>,
    pub mean_goals_against_vs_xg: Option<f64>,
    /// Matches scoring more than xG by over the threshold, in table order.
    pub overperformances: Vec<MatchDelta>,
    /// Matches scoring less than xG by over the threshold, in table order.
    pub underperformances: Vec<MatchDelta>,
    /// Matches conceding more than xGA by over the threshold.
    pub conceded_above_xg: Vec<MatchDelta>,
    /// Matches conceding less than xGA by over the threshold.
    pub conceded_below_xg: Vec<MatchDelta>,
}

impl XgPerformance {
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let mut out = XgPerformance {
            mean_goals_vs_xg: mean(records.iter().map(goals_vs_xg)),
            mean_goals_against_vs_xg: mean(records.iter().map(goals_against_vs_xg)),
            ..Default::default()
        };

        for (i, r) in records.iter().enumerate() {
            if let (Some(goals), Some(xg)) = (r.goals_for, r.xg_for) {
                let delta = MatchDelta {
                    at: MatchRef::new(i, r),
                    goals,
                    xg,
                    delta: f64::from(goals) - xg,
                };
                match Performance::classify(delta.delta) {
                    Performance::Overperformance => out.overperformances.push(delta),
                    Performance::Underperformance => out.underperformances.push(delta),
                    Performance::Expected => {}
                }
            }

            if let (Some(goals), Some(xg)) = (r.goals_against, r.xg_against) {
                let delta = MatchDelta {
                    at: MatchRef::new(i, r),
                    goals,
                    xg,
                    delta: f64::from(goals) - xg,
                };
                match Performance::classify(delta.delta) {
                    Performance::Overperformance => out.conceded_above_xg.push(delta),
                    Performance::Underperformance => out.conceded_below_xg.push(delta),
                    Performance::Expected => {}
                }
            }
        }

        out
    }
}
