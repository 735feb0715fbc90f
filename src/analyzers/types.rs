//! Shared result types for the analyzers.

use chrono::NaiveDate;
use serde::Serialize;

use crate::record::MatchRecord;

/// Identifies one match in the season by table position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRef {
    pub index: usize,
    pub date: Option<NaiveDate>,
    pub opponent: String,
}

impl MatchRef {
    pub fn new(index: usize, record: &MatchRecord) -> Self {
        MatchRef {
            index,
            date: record.date,
            opponent: record.opponent.clone(),
        }
    }

    /// Date for display; `"?"` when the date did not parse.
    pub fn date_label(&self) -> String {
        self.date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// A match selected as the extreme of an integer field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchExtreme {
    #[serde(flatten)]
    pub at: MatchRef,
    pub value: u32,
}

/// Mean expected goals for and against one opponent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub opponent: String,
    pub matches: usize,
    pub mean_xg_for: Option<f64>,
    pub mean_xg_against: Option<f64>,
}

/// A match whose actual goals differ from xG, with the delta.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchDelta {
    #[serde(flatten)]
    pub at: MatchRef,
    pub goals: u32,
    pub xg: f64,
    pub delta: f64,
}
