//! Document → records → report, as one call.

use tracing::{debug, warn};

use crate::error::Result;
use crate::extract::{HeaderPolicy, extract_matches};
use crate::normalize::normalize_matches;
use crate::parser::{DEFAULT_TABLE_ID, parse_table};
use crate::record::MatchRecord;
use crate::stats::{SeasonReport, Series};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub table_id: String,
    pub header_policy: HeaderPolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            table_id: DEFAULT_TABLE_ID.to_string(),
            header_policy: HeaderPolicy::default(),
        }
    }
}

/// Output of a run: the typed records and what was derived from them.
#[derive(Debug, Clone)]
pub struct Season {
    pub records: Vec<MatchRecord>,
    pub report: SeasonReport,
}

impl Season {
    pub fn series(&self) -> Series {
        Series::from_records(&self.records)
    }
}

/// Parses and normalizes the match-log table in `html`.
///
/// # Errors
///
/// [`crate::Error::SchemaNotFound`] if the table is absent. Bad field values
/// never fail the run.
pub fn load_records(html: &str, options: &PipelineOptions) -> Result<Vec<MatchRecord>> {
    let table = parse_table(html, &options.table_id)?;
    let raw = extract_matches(&table, options.header_policy);
    let records = normalize_matches(&raw);
    debug!(records = records.len(), "Records normalized");
    Ok(records)
}

/// Runs every stage over an already-fetched document.
#[tracing::instrument(skip(html), fields(bytes = html.len()))]
pub fn run(html: &str, options: &PipelineOptions) -> Result<Season> {
    let records = load_records(html, options)?;
    let report = SeasonReport::from_records(&records);

    if records.is_empty() {
        warn!(table_id = %options.table_id, "Table contained no match rows");
    }
    if report.missing.total() > 0 {
        warn!(missing = ?report.missing, "Some fields could not be parsed and were left out of the statistics");
    }

    Ok(Season { records, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const DOC: &str = r#"
        <html><body>
        <table id="matchlogs_for">
          <thead><tr><th>Date</th><th>Time</th><th>Comp</th></tr></thead>
          <tbody>
            <tr><td>2022-08-13</td><td>21:00</td><td>La Liga</td><td>Matchweek 1</td><td>Sat</td>
                <td>Home</td><td>D</td><td>0</td><td>0</td><td>Rayo Vallecano</td><td>2.6</td><td>0.5</td>
                <td>69</td><td>83,310</td><td>Sergio Busquets</td><td>4-3-3</td><td>Ricardo de Burgos</td></tr>
            <tr><td>2022-08-21</td><td>22:00</td><td>La Liga</td><td>Matchweek 2</td><td>Sun</td>
                <td>Away</td><td>W</td><td>4</td><td>1</td><td>Real Sociedad</td><td></td><td>0.8</td>
                <td>60</td><td>30,000</td><td>Sergio Busquets</td><td>4-3-3</td><td>Gil Manzano</td><td>Note</td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_run_end_to_end() {
        let season = run(DOC, &PipelineOptions::default()).unwrap();

        assert_eq!(season.records.len(), 2);
        assert_eq!(season.records[0].notes, "");
        assert_eq!(season.records[1].notes, "Note");
        assert_eq!(season.records[1].xg_for, None);
        assert_eq!(season.report.averages.xg_for, Some(2.6));
        assert_eq!(season.report.missing.xg_for, 1);
        assert_eq!(season.series().len(), 2);
    }

    #[test]
    fn test_drop_first_policy_discards_first_match() {
        let options = PipelineOptions {
            header_policy: HeaderPolicy::DropFirst,
            ..Default::default()
        };
        let records = load_records(DOC, &options).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].opponent, "Real Sociedad");
    }

    #[test]
    fn test_missing_table_aborts() {
        let options = PipelineOptions {
            table_id: "matchlogs_against".to_string(),
            ..Default::default()
        };
        let err = run(DOC, &options).unwrap_err();
        assert!(matches!(err, Error::SchemaNotFound { .. }));
    }
}
