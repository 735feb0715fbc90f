use matchlog_stats::Error;
use matchlog_stats::extract::HeaderPolicy;
use matchlog_stats::output::export_matches;
use matchlog_stats::pipeline::{PipelineOptions, load_records, run};
use matchlog_stats::record::{Outcome, Venue};

const FIXTURE: &str = include_str!("fixtures/matchlogs_barcelona_2022.html");

fn close(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}

#[test]
fn test_full_pipeline() {
    let season = run(FIXTURE, &PipelineOptions::default()).expect("Failed to run pipeline");
    let records = &season.records;

    assert_eq!(records.len(), 7);
    assert_eq!(records[0].opponent, "Rayo Vallecano");
    assert_eq!(records[0].notes, "");
    assert_eq!(records[0].venue, Some(Venue::Home));
    assert_eq!(records[0].result, Some(Outcome::Draw));
    assert_eq!(records[4].opponent, "cz Viktoria Plzeň");
    assert_eq!(records[6].xg_for, None);
    assert_eq!(records[6].notes, "Played under protest");
}

#[test]
fn test_both_header_policies_drop_restated_header() {
    for policy in [HeaderPolicy::MatchLabels, HeaderPolicy::DropFirst] {
        let options = PipelineOptions {
            header_policy: policy,
            ..Default::default()
        };
        let records = load_records(FIXTURE, &options).unwrap();
        assert_eq!(records.len(), 7, "{policy:?}");
        assert_eq!(records[0].competition, "La Liga");
    }
}

#[test]
fn test_report_contents() {
    let report = run(FIXTURE, &PipelineOptions::default()).unwrap().report;

    assert_eq!(report.matches, 7);
    assert_eq!(report.missing.xg_for, 1);
    assert!(close(report.averages.goals_for, 19.0 / 7.0));
    assert!(close(report.averages.xg_for, (2.6 + 2.3 + 3.4 + 2.4 + 3.9 + 1.0) / 6.0));

    let ext = &report.match_extremes;
    assert_eq!(ext.most_goals_for.as_ref().unwrap().value, 5);
    assert_eq!(ext.fewest_goals_for.as_ref().unwrap().at.opponent, "Rayo Vallecano");
    assert_eq!(ext.most_goals_against.as_ref().unwrap().at.index, 5);
    assert_eq!(ext.fewest_goals_against.as_ref().unwrap().at.index, 0);

    let madrid = report
        .opponents
        .iter()
        .find(|g| g.opponent == "Real Madrid")
        .unwrap();
    assert_eq!(madrid.matches, 2);
    assert!(close(madrid.mean_xg_for, 1.0));
    assert!(close(madrid.mean_xg_against, 1.25));

    let opp = &report.opponent_extremes;
    assert_eq!(opp.best_attack.as_ref().unwrap().opponent, "cz Viktoria Plzeň");
    assert_eq!(opp.worst_attack.as_ref().unwrap().opponent, "Real Madrid");
    assert_eq!(opp.best_defence.as_ref().unwrap().opponent, "Valladolid");
    assert_eq!(opp.worst_defence.as_ref().unwrap().opponent, "Real Madrid");

    let perf = &report.xg_performance;
    let over: Vec<_> = perf.overperformances.iter().map(|d| d.at.opponent.as_str()).collect();
    let under: Vec<_> = perf.underperformances.iter().map(|d| d.at.opponent.as_str()).collect();
    assert_eq!(over, vec!["Real Sociedad", "cz Viktoria Plzeň"]);
    assert_eq!(under, vec!["Rayo Vallecano"]);

    let leaders = &report.referee_leaders;
    assert_eq!(leaders.most_wins.as_ref().unwrap().referee, "Mateu Lahoz");
    assert_eq!(leaders.most_draws.as_ref().unwrap().referee, "Ricardo de Burgos");
    let loss = leaders.most_losses.as_ref().unwrap();
    assert_eq!(loss.referee, "Gil Manzano");
    assert!((loss.pct - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_export_has_one_row_per_match() {
    let season = run(FIXTURE, &PipelineOptions::default()).unwrap();
    let mut buf = Vec::new();
    export_matches(&mut buf, &season.records).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "date,opponent,venue,score");
    assert_eq!(lines[6], "2022-10-16,Real Madrid,Away,1-3");
}

#[test]
fn test_missing_table_is_fatal() {
    let options = PipelineOptions {
        table_id: "matchlogs_missing".to_string(),
        ..Default::default()
    };
    let err = run(FIXTURE, &options).unwrap_err();
    assert!(matches!(err, Error::SchemaNotFound { .. }));
}
