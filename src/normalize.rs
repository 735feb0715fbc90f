//! Coercion of [`RawMatch`] text into typed [`MatchRecord`] fields.
//!
//! Nothing here fails: a field that does not parse becomes `None` and the
//! record is kept.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::trace;

use crate::record::{MatchRecord, Outcome, RawMatch, Venue};

/// Date format used in the provider's match-log table.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

fn starts_with_digit(text: &str) -> bool {
    text.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// Strict parse of a goal count: ASCII digits only, no sign.
pub fn parse_goals(text: &str) -> Option<u32> {
    let text = text.trim();
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Strict parse of an expected-goals figure; negative or non-finite values are rejected.
pub fn parse_xg(text: &str) -> Option<f64> {
    let text = text.trim();
    if !starts_with_digit(text) {
        return None;
    }
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

pub fn normalize_match(raw: &RawMatch) -> MatchRecord {
    let record = MatchRecord {
        date: parse_date(&raw.date),
        start_time: raw.start_time.clone(),
        competition: raw.competition.clone(),
        round: raw.round.clone(),
        day_of_week: raw.day_of_week.clone(),
        venue: Venue::parse(&raw.venue),
        result: Outcome::parse(&raw.result),
        goals_for: parse_goals(&raw.goals_for),
        goals_against: parse_goals(&raw.goals_against),
        opponent: raw.opponent.clone(),
        xg_for: parse_xg(&raw.xg_for),
        xg_against: parse_xg(&raw.xg_against),
        possession: raw.possession.clone(),
        attendance: raw.attendance.clone(),
        captain: raw.captain.clone(),
        formation: raw.formation.clone(),
        referee: raw.referee.clone(),
        notes: raw.notes.clone(),
    };

    if record.date.is_none() {
        trace!(text = %raw.date, opponent = %raw.opponent, "date did not parse");
    }
    if record.xg_for.is_none() || record.xg_against.is_none() {
        trace!(xg_for = %raw.xg_for, xg_against = %raw.xg_against, opponent = %raw.opponent, "xG did not parse");
    }

    record
}

/// Normalizes every record, preserving order and count.
pub fn normalize_matches(raw: &[RawMatch]) -> Vec<MatchRecord> {
    raw.iter().map(normalize_match).collect()
}

/// Per-field count of values that failed coercion.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCounts {
    pub date: usize,
    pub venue: usize,
    pub result: usize,
    pub goals_for: usize,
    pub goals_against: usize,
    pub xg_for: usize,
    pub xg_against: usize,
}

impl MissingCounts {
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let mut m = MissingCounts::default();
        for r in records {
            m.date += r.date.is_none() as usize;
            m.venue += r.venue.is_none() as usize;
            m.result += r.result.is_none() as usize;
            m.goals_for += r.goals_for.is_none() as usize;
            m.goals_against += r.goals_against.is_none() as usize;
            m.xg_for += r.xg_for.is_none() as usize;
            m.xg_against += r.xg_against.is_none() as usize;
        }
        m
    }

    pub fn total(&self) -> usize {
        self.date
            + self.venue
            + self.result
            + self.goals_for
            + self.goals_against
            + self.xg_for
            + self.xg_against
    }
}
