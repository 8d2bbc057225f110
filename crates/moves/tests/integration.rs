use std::path::PathBuf;

use campground_moves::config::MovesConfig;
use campground_moves::engine::run;
use campground_moves::model::{Artifact, RunResult};
use campground_moves::{Outcome, Severity};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn artifact(file: &str) -> Artifact {
    let path = fixtures_dir().join(file);
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    Artifact::new(file, data)
}

fn load_and_run(files: &[&str]) -> RunResult {
    let artifacts: Vec<Artifact> = files.iter().map(|f| artifact(f)).collect();
    run(&MovesConfig::new(), &artifacts).unwrap()
}

// -------------------------------------------------------------------------
// Fixture reports
// -------------------------------------------------------------------------

#[test]
fn fixture_reports_match() {
    let result = load_and_run(&["Due In Report.csv", "Due Out Report.csv"]);
    assert_eq!(result.status.severity, Severity::Success);

    let report = result.report.unwrap();
    assert_eq!(report.summary.arrivals, 6);
    assert_eq!(report.summary.departures, 7);
    assert_eq!(report.summary.staying, 4);

    let rows: Vec<(&str, &str, &str)> = report
        .guests
        .iter()
        .map(|g| (g.name.as_str(), g.site_leaving.as_str(), g.site_arriving.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Michael Scott", "10", "1"),
            ("Angela Martin", "10", "Cabin 2"),
            ("Pam Beesly", "2", "7"),
            ("Dwight Schrute", "22", "22"),
        ]
    );
}

#[test]
fn fixture_reports_any_order() {
    let forward = load_and_run(&["Due In Report.csv", "Due Out Report.csv"]);
    let reverse = load_and_run(&["Due Out Report.csv", "Due In Report.csv"]);
    assert_eq!(reverse.outcome, Outcome::PairValid { due_in: 1, due_out: 0 });
    assert_eq!(forward.report.unwrap().guests, reverse.report.unwrap().guests);
}

#[test]
fn short_first_names_are_not_partial_matches() {
    // "Jim" arrives; "Jim Halpert" and "Jimothy Smith" depart.
    let result = load_and_run(&["Due In Report.csv", "Due Out Report.csv"]);
    let report = result.report.unwrap();
    assert!(report.guests.iter().all(|g| !g.name.starts_with("Jim")));
}

#[test]
fn single_report_is_rejected() {
    let result = load_and_run(&["Due In Report.csv"]);
    assert_eq!(result.status.message, "'Due Out Report.csv' needs to be uploaded too.");
    assert!(result.report.is_none());
}

// -------------------------------------------------------------------------
// Config-driven layout
// -------------------------------------------------------------------------

#[test]
fn config_file_renames_reports() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("moves.toml");
    std::fs::write(
        &config_path,
        r#"
[due_in]
file = "arrivals.csv"
name_column = "Guest"
site_column = "Site"

[due_out]
file = "departures.csv"
name_column = "Guest"
site_column = "Site"
"#,
    )
    .unwrap();

    let config = MovesConfig::load(&config_path).unwrap();
    let artifacts = vec![
        Artifact::new("departures.csv", "Guest,Site\nToby Flenderson,8\n"),
        Artifact::new("arrivals.csv", "Guest,Site\nToby Flenderson,12\n"),
    ];
    let result = run(&config, &artifacts).unwrap();
    let guests = result.report.unwrap().guests;
    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0].site_leaving, "8");
    assert_eq!(guests[0].site_arriving, "12");

    // Default names are no longer recognized under this config
    let defaults = vec![artifact("Due In Report.csv"), artifact("Due Out Report.csv")];
    let result = run(&config, &defaults).unwrap();
    assert_eq!(result.outcome, Outcome::PairUnrecognized);
    assert_eq!(
        result.status.message,
        "Please only upload 'arrivals.csv' or 'departures.csv'."
    );
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MovesConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().starts_with("IO error: cannot read"));
}

#[test]
fn json_shape() {
    let result = load_and_run(&["Due In Report.csv", "Due Out Report.csv"]);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["outcome"]["kind"], "pair_valid");
    assert_eq!(value["status"]["severity"], "success");
    assert_eq!(value["report"]["summary"]["staying"], 4);
    assert_eq!(value["report"]["guests"][0]["name"], "Michael Scott");
    assert_eq!(value["report"]["guests"][0]["site_leaving"], "10");
    assert_eq!(value["report"]["guests"][0]["site_arriving"], "1");

    let rejected = load_and_run(&[]);
    let value = serde_json::to_value(&rejected).unwrap();
    assert_eq!(value["status"]["severity"], "info");
    assert!(value.get("report").is_none());
}
