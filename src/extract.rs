//! Positional mapping from table rows to [`RawMatch`] values.

use tracing::debug;

use crate::parser::RawTable;
use crate::record::{HEADER_LABELS, RawMatch};

/// How a header restated as a body row is recognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HeaderPolicy {
    /// Drop any accepted row whose cells equal the known column labels.
    #[default]
    MatchLabels,
    /// Drop the first accepted row, whatever it contains.
    DropFirst,
}

/// Minimum number of leading cells that must match labels for a row to count as a header.
const MIN_HEADER_MATCH: usize = 3;

/// Converts every data row of `table` into a [`RawMatch`], in document order.
///
/// Rows with no data cells are skipped. Positions beyond the end of a short
/// row read as empty text.
pub fn extract_matches(table: &RawTable, policy: HeaderPolicy) -> Vec<RawMatch> {
    let accepted = table.rows.iter().filter(|cells| !cells.is_empty());

    let matches: Vec<RawMatch> = match policy {
        HeaderPolicy::DropFirst => accepted.skip(1).map(|c| row_to_match(c)).collect(),
        HeaderPolicy::MatchLabels => accepted
            .filter(|cells| !is_header_row(cells))
            .map(|c| row_to_match(c))
            .collect(),
    };

    debug!(
        rows = table.rows.len(),
        matches = matches.len(),
        ?policy,
        "Rows extracted"
    );
    matches
}

/// True when the row restates the column labels. Blank cells are ignored;
/// every other cell must equal its label and at least
/// `MIN_HEADER_MATCH` of them must be present.
pub fn is_header_row(cells: &[String]) -> bool {
    let mut matched = 0;
    for (cell, label) in cells.iter().zip(HEADER_LABELS) {
        if cell.is_empty() {
            continue;
        }
        if !cell.eq_ignore_ascii_case(label) {
            return false;
        }
        matched += 1;
    }
    matched >= MIN_HEADER_MATCH
}

fn row_to_match(cells: &[String]) -> RawMatch {
    let col = |i: usize| cells.get(i).cloned().unwrap_or_default();

    RawMatch {
        date: col(0),
        start_time: col(1),
        competition: col(2),
        round: col(3),
        day_of_week: col(4),
        venue: col(5),
        result: col(6),
        goals_for: col(7),
        goals_against: col(8),
        opponent: col(9),
        xg_for: col(10),
        xg_against: col(11),
        possession: col(12),
        attendance: col(13),
        captain: col(14),
        formation: col(15),
        referee: col(16),
        notes: col(17),
    }
}
