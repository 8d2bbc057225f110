//! `campground check|run|validate|init-config` - drive the matching engine from files on disk.

use std::path::{Path, PathBuf};

use campground_moves::{Artifact, MovesConfig, OutputFormat, Role, Severity};

use crate::exit_codes::EXIT_UPLOAD_REJECTED;
use crate::render::{render_csv, render_json, render_table};
use crate::{CliError, FormatArg};

pub struct RunArgs {
    pub files: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: Option<FormatArg>,
    pub output: Option<PathBuf>,
    pub delimiter: char,
    pub max_col_width: usize,
    pub quiet: bool,
}

/// Upload name of a path: its final component, as the browser would send it.
fn artifact_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Explicit `--config`, else the per-user config file if present, else defaults.
fn resolve_config(explicit: Option<PathBuf>) -> Result<MovesConfig, CliError> {
    if let Some(path) = explicit {
        log::debug!("loading config from {}", path.display());
        return MovesConfig::load(&path).map_err(CliError::moves);
    }

    let default_path = MovesConfig::default_path();
    if default_path.is_file() {
        log::debug!("loading config from {}", default_path.display());
        return MovesConfig::load(&default_path).map_err(CliError::moves);
    }

    Ok(MovesConfig::new())
}

fn rejected() -> CliError {
    CliError::new(EXIT_UPLOAD_REJECTED, "")
}

// ============================================================================
// check
// ============================================================================

pub fn cmd_check(files: Vec<PathBuf>, config: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let config = resolve_config(config)?;
    let names: Vec<String> = files.iter().map(|p| artifact_name(p)).collect();
    let review = campground_moves::review(&names, false, &config.layout());

    if json {
        let value = serde_json::json!({
            "outcome": review.outcome,
            "severity": review.status.severity,
            "message": review.status.message,
            "missing": campground_moves::missing_role(&review.outcome),
        });
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| CliError::general(format!("JSON serialization error: {e}")))?;
        println!("{text}");
    } else {
        println!("{}: {}", review.status.severity, review.status.message);
    }

    if review.outcome.is_valid() {
        Ok(())
    } else {
        Err(rejected())
    }
}

// ============================================================================
// run
// ============================================================================

pub fn cmd_run(args: RunArgs) -> Result<(), CliError> {
    if !args.delimiter.is_ascii() {
        return Err(CliError::args(format!(
            "delimiter must be a single ASCII character, got '{}'",
            args.delimiter
        )));
    }

    let config = resolve_config(args.config)?;
    let layout = config.layout();

    // Classify on names first; files are only read for a valid pair.
    let names: Vec<String> = args.files.iter().map(|p| artifact_name(p)).collect();
    let review = campground_moves::review(&names, false, &layout);
    if !args.quiet || review.status.severity == Severity::Error {
        eprintln!("{}: {}", review.status.severity, review.status.message);
    }
    let Some((due_in_idx, due_out_idx)) = review.outcome.pair() else {
        return Err(rejected());
    };

    let mut artifacts = Vec::with_capacity(2);
    for (idx, role) in [(due_in_idx, Role::DueIn), (due_out_idx, Role::DueOut)] {
        let path = &args.files[idx];
        let bytes = std::fs::read(path)
            .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))?;
        let data = campground_moves::decode_report(role, bytes).map_err(CliError::moves)?;
        artifacts.push(Artifact::new(names[idx].clone(), data));
    }

    let result = campground_moves::run(&config, &artifacts).map_err(CliError::moves)?;
    let Some(report) = result.report.as_ref() else {
        return Err(rejected());
    };

    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let text = match format {
        OutputFormat::Table => render_table(&report.guests, args.max_col_width),
        OutputFormat::Csv => render_csv(&report.guests, args.delimiter as u8).map_err(CliError::general)?,
        OutputFormat::Json => {
            let mut json = render_json(&result).map_err(CliError::general)?;
            json.push('\n');
            json
        }
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &text)
                .map_err(|e| CliError::io(format!("cannot write output: {e}")))?;
            if !args.quiet {
                eprintln!("wrote {}", path.display());
            }
        }
        None => print!("{text}"),
    }

    if !args.quiet {
        let s = &report.summary;
        eprintln!(
            "{} staying guests ({} arrivals, {} departures)",
            s.staying, s.arrivals, s.departures
        );
    }

    Ok(())
}

// ============================================================================
// validate / init-config
// ============================================================================

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config = MovesConfig::load(&config_path).map_err(CliError::moves)?;
    eprintln!("config valid: {}", config_path.display());
    eprintln!(
        "  due_in:  '{}' ({}, {})",
        config.due_in.file, config.due_in.name_column, config.due_in.site_column
    );
    eprintln!(
        "  due_out: '{}' ({}, {})",
        config.due_out.file, config.due_out.name_column, config.due_out.site_column
    );
    Ok(())
}

pub fn cmd_init_config(output: Option<PathBuf>, force: bool) -> Result<(), CliError> {
    let text = MovesConfig::new().to_toml().map_err(CliError::moves)?;

    match output {
        Some(path) => {
            if path.exists() && !force {
                return Err(CliError::args(format!("{} already exists", path.display()))
                    .with_hint("pass --force to overwrite"));
            }
            std::fs::write(&path, &text)
                .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_name_is_file_component() {
        assert_eq!(artifact_name(Path::new("/tmp/reports/Due In Report.csv")), "Due In Report.csv");
        assert_eq!(artifact_name(Path::new("Due Out Report.csv")), "Due Out Report.csv");
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moves.toml");
        std::fs::write(&path, "[output]\nformat = \"csv\"\n").unwrap();
        let config = resolve_config(Some(path)).unwrap();
        assert_eq!(config.output.format, OutputFormat::Csv);
    }

    #[test]
    fn invalid_config_maps_to_config_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moves.toml");
        std::fs::write(&path, "[output]\nformat = \"xlsx\"\n").unwrap();
        let err = resolve_config(Some(path)).unwrap_err();
        assert_eq!(err.code, crate::exit_codes::EXIT_CONFIG);
        assert!(err.hint.is_some());
    }
}
