//! Output formatting and persistence for season reports.
//!
//! Supports a console summary through `tracing`, JSON serialization, and CSV
//! export of the match list.

use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use tracing::{debug, info};

use crate::analyzers::types::MatchDelta;
use crate::error::Result;
use crate::record::MatchRecord;
use crate::stats::SeasonReport;

/// Logs the report using Rust's debug pretty-print format.
pub fn print_pretty(report: &SeasonReport) {
    debug!("{:#?}", report);
}

/// Logs any serializable value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes any serializable value as pretty-printed JSON to `out`.
pub fn write_json<W: Write>(mut out: W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes pretty-printed JSON to a file at `path`, replacing it.
pub fn write_json_file(path: &str, value: &impl Serialize) -> Result<()> {
    debug!(path, "Writing JSON");
    write_json(File::create(path)?, value)
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    date: String,
    opponent: &'a str,
    venue: &'a str,
    score: String,
}

impl<'a> From<&'a MatchRecord> for ExportRow<'a> {
    fn from(r: &'a MatchRecord) -> Self {
        ExportRow {
            date: r.date.map(|d| d.to_string()).unwrap_or_default(),
            opponent: &r.opponent,
            venue: r.venue.map(|v| v.as_str()).unwrap_or(""),
            score: r.score().unwrap_or_default(),
        }
    }
}

/// Writes `date, opponent, venue, score` for every match, header first.
pub fn export_matches<W: Write>(out: W, records: &[MatchRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(out);
    for r in records {
        writer.serialize(ExportRow::from(r))?;
    }
    writer.flush()?;
    Ok(())
}

/// [`export_matches`] into a new file at `path`.
pub fn export_csv(path: &str, records: &[MatchRecord]) -> Result<()> {
    debug!(path, rows = records.len(), "Exporting CSV");
    export_matches(File::create(path)?, records)
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "undefined".to_string())
}

fn log_deltas(label: &str, deltas: &[MatchDelta]) {
    info!(count = deltas.len(), "{label}");
    for d in deltas {
        info!(
            "  {} vs {}: {} goals from {:.2} xG ({:+.2})",
            d.at.date_label(),
            d.at.opponent,
            d.goals,
            d.xg,
            d.delta
        );
    }
}

/// Logs a readable summary of the report at `info` level.
pub fn log_report(report: &SeasonReport) {
    let avg = &report.averages;
    info!(
        matches = report.matches,
        source = report.source.as_deref().unwrap_or("-"),
        "Season report"
    );
    info!(
        "Averages: goals for {}, goals against {}, xG for {}, xG against {}",
        fmt_opt(avg.goals_for),
        fmt_opt(avg.goals_against),
        fmt_opt(avg.xg_for),
        fmt_opt(avg.xg_against)
    );

    let ext = &report.match_extremes;
    for (label, m) in [
        ("Most goals scored", &ext.most_goals_for),
        ("Fewest goals scored", &ext.fewest_goals_for),
        ("Most goals conceded", &ext.most_goals_against),
        ("Fewest goals conceded", &ext.fewest_goals_against),
    ] {
        match m {
            Some(m) => info!("{label}: {} vs {} ({})", m.at.date_label(), m.at.opponent, m.value),
            None => info!("{label}: undefined"),
        }
    }

    let opp = &report.opponent_extremes;
    for (label, g, xg) in [
        ("Best attacking display", &opp.best_attack, true),
        ("Worst attacking display", &opp.worst_attack, true),
        ("Best defensive display", &opp.best_defence, false),
        ("Worst defensive display", &opp.worst_defence, false),
    ] {
        match g {
            Some(g) => {
                let value = if xg { g.mean_xg_for } else { g.mean_xg_against };
                info!("{label}: {} (mean {})", g.opponent, fmt_opt(value));
            }
            None => info!("{label}: undefined"),
        }
    }

    let perf = &report.xg_performance;
    info!(
        "Goals vs xG: mean {} for, {} against",
        fmt_opt(perf.mean_goals_vs_xg),
        fmt_opt(perf.mean_goals_against_vs_xg)
    );
    log_deltas("Significant overperformances", &perf.overperformances);
    log_deltas("Significant underperformances", &perf.underperformances);

    for r in &report.referees {
        info!(
            "Referee {}: {} matches, W {:.1}% D {:.1}% L {:.1}%",
            r.referee, r.total, r.win_pct, r.draw_pct, r.loss_pct
        );
    }
    let leaders = &report.referee_leaders;
    for (label, l) in [
        ("Highest win share", &leaders.most_wins),
        ("Highest draw share", &leaders.most_draws),
        ("Highest loss share", &leaders.most_losses),
    ] {
        if let Some(l) = l {
            info!("{label}: {} ({:.1}%)", l.referee, l.pct);
        }
    }
}
