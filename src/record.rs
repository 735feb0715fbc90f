//! Match record types: the raw text form and the typed form.

use chrono::NaiveDate;
use serde::Serialize;

/// Number of positional columns in a full match-log row.
pub const COLUMN_COUNT: usize = 18;

/// Column labels as rendered by the provider, by position.
pub const HEADER_LABELS: [&str; COLUMN_COUNT] = [
    "Date",
    "Time",
    "Comp",
    "Round",
    "Day",
    "Venue",
    "Result",
    "GF",
    "GA",
    "Opponent",
    "xG",
    "xGA",
    "Poss",
    "Attendance",
    "Captain",
    "Formation",
    "Referee",
    "Notes",
];

/// One table row, field-keyed, every field still trimmed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawMatch {
    pub date: String,
    pub start_time: String,
    pub competition: String,
    pub round: String,
    pub day_of_week: String,
    pub venue: String,
    pub result: String,
    pub goals_for: String,
    pub goals_against: String,
    pub opponent: String,
    pub xg_for: String,
    pub xg_against: String,
    pub possession: String,
    pub attendance: String,
    pub captain: String,
    pub formation: String,
    pub referee: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Venue {
    Home,
    Away,
    Neutral,
}

impl Venue {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Venue::Home),
            "away" => Some(Venue::Away),
            "neutral" => Some(Venue::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
            Venue::Neutral => "Neutral",
        }
    }
}

/// Match outcome from the perspective of the squad whose log this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Reads the leading `W`/`D`/`L`; trailing text such as a shoot-out note is ignored.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().chars().next()?.to_ascii_uppercase() {
            'W' => Some(Outcome::Win),
            'D' => Some(Outcome::Draw),
            'L' => Some(Outcome::Loss),
            _ => None,
        }
    }
}

/// A normalized match. Fields that failed to coerce are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub date: Option<NaiveDate>,
    pub start_time: String,
    pub competition: String,
    pub round: String,
    pub day_of_week: String,
    pub venue: Option<Venue>,
    pub result: Option<Outcome>,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
    pub opponent: String,
    pub xg_for: Option<f64>,
    pub xg_against: Option<f64>,
    pub possession: String,
    pub attendance: String,
    pub captain: String,
    pub formation: String,
    pub referee: String,
    pub notes: String,
}

impl MatchRecord {
    /// `"{gf}-{ga}"`, or `None` if either side is missing.
    pub fn score(&self) -> Option<String> {
        Some(format!("{}-{}", self.goals_for?, self.goals_against?))
    }
}
