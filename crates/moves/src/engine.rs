use crate::classify::classify_with;
use crate::config::MovesConfig;
use crate::error::MovesError;
use crate::extract::{extract_due_in, extract_due_out};
use crate::matcher::{match_guests, summarize};
use crate::model::{Artifact, MovesMeta, MovesReport, RunResult};
use crate::status::describe_with;

/// Classify the uploads, and when they form a valid pair, extract both
/// reports and match them.
///
/// An unusable upload set is not an error: the result carries the status and
/// no report. Extraction failures on a valid pair are returned as errors.
pub fn run(config: &MovesConfig, artifacts: &[Artifact]) -> Result<RunResult, MovesError> {
    let layout = config.layout();
    let names: Vec<&str> = artifacts.iter().map(|a| a.name.as_str()).collect();

    let outcome = classify_with(&names, &layout);
    let status = describe_with(&outcome, &layout);

    let Some((due_in_idx, due_out_idx)) = outcome.pair() else {
        log::info!("upload set rejected: {}", outcome.as_str());
        return Ok(RunResult {
            outcome,
            status,
            report: None,
        });
    };

    let due_in = &artifacts[due_in_idx];
    let due_out = &artifacts[due_out_idx];

    let arrivals = extract_due_in(&due_in.data, &config.due_in)?;
    let departures = extract_due_out(&due_out.data, &config.due_out)?;
    let guests = match_guests(&arrivals, &departures);
    let summary = summarize(&arrivals, &departures, &guests);

    log::info!(
        "{} arrivals, {} departures, {} staying",
        summary.arrivals,
        summary.departures,
        summary.staying
    );

    Ok(RunResult {
        outcome,
        status,
        report: Some(MovesReport {
            meta: MovesMeta {
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                run_at: chrono::Utc::now().to_rfc3339(),
                due_in_file: due_in.name.clone(),
                due_out_file: due_out.name.clone(),
            },
            summary,
            guests,
        }),
    })
}
