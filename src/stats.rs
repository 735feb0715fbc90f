use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::analyzers::aggregate::{
    MatchExtremes, OpponentExtremes, SeasonAverages, group_by_opponent,
};
use crate::analyzers::bias::{BiasLeaders, RefereeOutcomeTable, RefereeShare};
use crate::analyzers::metrics::XgPerformance;
use crate::analyzers::types::GroupSummary;
use crate::normalize::MissingCounts;
use crate::record::MatchRecord;

/// Everything one pipeline run derives from a season's records.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonReport {
    pub generated_at: DateTime<Utc>,
    pub source: Option<String>,
    pub matches: usize,
    pub missing: MissingCounts,
    pub averages: SeasonAverages,
    pub match_extremes: MatchExtremes,
    pub opponents: Vec<GroupSummary>,
    pub opponent_extremes: OpponentExtremes,
    pub xg_performance: XgPerformance,
    pub referees: Vec<RefereeShare>,
    pub referee_leaders: BiasLeaders,
}

impl SeasonReport {
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let opponents = group_by_opponent(records);
        let opponent_extremes = OpponentExtremes::from_groups(&opponents);
        let referees = RefereeOutcomeTable::from_records(records);

        SeasonReport {
            generated_at: Utc::now(),
            source: None,
            matches: records.len(),
            missing: MissingCounts::from_records(records),
            averages: SeasonAverages::from_records(records),
            match_extremes: MatchExtremes::from_records(records),
            opponents,
            opponent_extremes,
            xg_performance: XgPerformance::from_records(records),
            referees: referees.shares(),
            referee_leaders: referees.leaders(),
        }
    }

    /// Set where the records came from (URL or path)
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}

/// Per-match numeric columns, aligned by index, for a plotting consumer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    pub dates: Vec<Option<NaiveDate>>,
    pub goals_for: Vec<Option<u32>>,
    pub goals_against: Vec<Option<u32>>,
    pub xg_for: Vec<Option<f64>>,
    pub xg_against: Vec<Option<f64>>,
}

impl Series {
    pub fn from_records(records: &[MatchRecord]) -> Self {
        Series {
            dates: records.iter().map(|r| r.date).collect(),
            goals_for: records.iter().map(|r| r.goals_for).collect(),
            goals_against: records.iter().map(|r| r.goals_against).collect(),
            xg_for: records.iter().map(|r| r.xg_for).collect(),
            xg_against: records.iter().map(|r| r.xg_against).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
