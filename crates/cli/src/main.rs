// Campground CLI - match due-in and due-out reports to find guests changing sites

mod exit_codes;
mod moves;
mod render;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use exit_codes::{EXIT_ERROR, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "campground")]
#[command(about = "Find guests moving from one campsite to another on the same day")]
#[command(long_version = long_version())]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Log engine details to stderr (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the given files are the two reports (by file name only)
    #[command(after_help = "\
Exit code 0 means the files are exactly one due-in and one due-out report.
Exit code 3 means they are not; the message says what is missing.
Report names come from the config file when one is found, as for `run`.

Examples:
  campground check 'Due In Report.csv' 'Due Out Report.csv'
  campground check ~/Downloads/*.csv --json")]
    Check {
        /// Report files (only the file names are inspected)
        files: Vec<PathBuf>,

        /// Config file (default: <config dir>/campground/moves.toml if present)
        #[arg(long, short = 'c', env = "CAMPGROUND_CONFIG")]
        config: Option<PathBuf>,

        /// Print {outcome, severity, message, missing} as JSON
        #[arg(long)]
        json: bool,
    },

    /// Match the due-in and due-out reports and print guests changing sites
    #[command(after_help = "\
Output columns: name, site_leaving, site_arriving (ordered by site_leaving).

Examples:
  campground run 'Due In Report.csv' 'Due Out Report.csv'
  campground run reports/*.csv --format csv --output moves.csv
  campground run 'Due Out Report.csv' 'Due In Report.csv' --format json | jq .guests
  campground run a.csv b.csv --config moves.toml")]
    Run {
        /// The two report files, in either order
        files: Vec<PathBuf>,

        /// Config file (default: <config dir>/campground/moves.toml if present)
        #[arg(long, short = 'c', env = "CAMPGROUND_CONFIG")]
        config: Option<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(long, short = 'f')]
        format: Option<FormatArg>,

        /// Output file (omit for stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// CSV delimiter
        #[arg(long, default_value = ",")]
        delimiter: char,

        /// Widest table column, in display columns
        #[arg(long, default_value_t = 40)]
        max_col_width: usize,

        /// Suppress the status and summary lines on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Validate a config file without running
    #[command(after_help = "\
Examples:
  campground validate moves.toml")]
    Validate {
        /// Path to the config file
        config: PathBuf,
    },

    /// Write the default config (report names and columns) as TOML
    #[command(after_help = "\
Examples:
  campground init-config
  campground init-config --output moves.toml")]
    InitConfig {
        /// Output file (omit for stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Csv,
    Json,
}

impl From<FormatArg> for campground_moves::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => Self::Table,
            FormatArg::Csv => Self::Csv,
            FormatArg::Json => Self::Json,
        }
    }
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\nengine:  campground-moves ", env!("CARGO_PKG_VERSION"),
        "\ntarget:  ", env!("TARGET"),
    )
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Installs the log bridge too, so engine `log` records reach stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None => {
            eprintln!("Usage: campground <command> [options]");
            eprintln!("       campground --help for more information");
            Ok(())
        }
        Some(Commands::Check { files, config, json }) => moves::cmd_check(files, config, json),
        Some(Commands::Run {
            files,
            config,
            format,
            output,
            delimiter,
            max_col_width,
            quiet,
        }) => moves::cmd_run(moves::RunArgs {
            files,
            config,
            format,
            output,
            delimiter,
            max_col_width,
            quiet,
        }),
        Some(Commands::Validate { config }) => moves::cmd_validate(config),
        Some(Commands::InitConfig { output, force }) => moves::cmd_init_config(output, force),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn args(msg: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, msg)
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::new(EXIT_IO, msg)
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self::new(EXIT_ERROR, msg)
    }

    /// Engine error with its registered exit code.
    pub fn moves(err: campground_moves::MovesError) -> Self {
        let code = exit_codes::moves_exit_code(&err);
        let hint = if err.is_schema() {
            Some("export the report again with all columns included".to_string())
        } else if err.is_extraction() {
            Some("save the report as UTF-8 CSV with the same number of fields on every row".to_string())
        } else if err.is_config() {
            Some("run `campground init-config` to see the expected layout".to_string())
        } else {
            None
        };
        Self { code, message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
