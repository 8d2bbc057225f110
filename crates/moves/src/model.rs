use serde::Serialize;

use crate::classify::Outcome;
use crate::status::Status;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Which of the two required reports an upload represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    DueIn,
    DueOut,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DueIn => "due_in",
            Self::DueOut => "due_out",
        }
    }

    pub fn other(&self) -> Role {
        match self {
            Self::DueIn => Self::DueOut,
            Self::DueOut => Self::DueIn,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One uploaded report, already read into memory by the caller.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: String,
    pub data: String,
}

impl Artifact {
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalized records
// ---------------------------------------------------------------------------

/// A guest from the due-in report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestArrival {
    pub name: String,
    pub site_arriving: String,
}

/// A guest from the due-out report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestDeparture {
    pub name: String,
    pub site_leaving: String,
}

/// A guest leaving one site and arriving at another on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StayingGuest {
    pub name: String,
    pub site_leaving: String,
    pub site_arriving: String,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovesSummary {
    pub arrivals: usize,
    pub departures: usize,
    pub staying: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovesMeta {
    pub engine_version: String,
    pub run_at: String,
    pub due_in_file: String,
    pub due_out_file: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovesReport {
    pub meta: MovesMeta,
    pub summary: MovesSummary,
    pub guests: Vec<StayingGuest>,
}

/// Result of one pipeline pass. `report` is only present for a valid pair.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub outcome: Outcome,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<MovesReport>,
}
