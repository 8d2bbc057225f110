//! Upload feedback: maps a classifier [`Outcome`] to the banner shown to the user.

use serde::Serialize;

use crate::classify::{classify_with, Outcome};
use crate::config::{MovesConfig, ReportLayout};
use crate::model::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub severity: Severity,
    pub message: String,
}

impl Status {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Status for `outcome` using the default report file names.
pub fn describe(outcome: &Outcome) -> Status {
    let config = MovesConfig::new();
    describe_with(outcome, &config.layout())
}

/// Status for `outcome`, naming the files configured in `layout`.
pub fn describe_with(outcome: &Outcome, layout: &ReportLayout<'_>) -> Status {
    let due_in = &layout.due_in.file;
    let due_out = &layout.due_out.file;

    match outcome {
        Outcome::Empty => Status::new(Severity::Info, "Please upload the Due In and Due Out Reports."),
        Outcome::SingleMissingPair { present } => {
            let missing = &layout.columns(present.other()).file;
            Status::new(Severity::Error, format!("'{missing}' needs to be uploaded too."))
        }
        Outcome::SingleUnrecognized | Outcome::PairUnrecognized => Status::new(
            Severity::Error,
            format!("Please only upload '{due_in}' or '{due_out}'."),
        ),
        Outcome::PairDuplicate => Status::new(
            Severity::Error,
            format!("Duplicate reports uploaded. Please upload 1 '{due_in}' and 1 '{due_out}'"),
        ),
        Outcome::PairValid { .. } => Status::new(Severity::Success, "Found the correct files!"),
        Outcome::TooMany => Status::new(Severity::Error, "Too many files uploaded. Remove extras."),
    }
}

/// Result of reviewing one upload set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub outcome: Outcome,
    pub status: Status,
    /// Caller-owned flag: has anything ever been uploaded in this session.
    pub interacted: bool,
}

/// Classify and describe `names`, threading the caller's interaction flag.
///
/// The flag starts `false` on the caller's side and latches once any name has
/// been seen. It never changes the outcome or the status.
pub fn review<S: AsRef<str>>(names: &[S], interacted: bool, layout: &ReportLayout<'_>) -> Review {
    let outcome = classify_with(names, layout);
    let status = describe_with(&outcome, layout);
    Review {
        outcome,
        status,
        interacted: interacted || !names.is_empty(),
    }
}

/// Role that a single-upload outcome is still waiting for.
pub fn missing_role(outcome: &Outcome) -> Option<Role> {
    match outcome {
        Outcome::SingleMissingPair { present } => Some(present.other()),
        _ => None,
    }
}
