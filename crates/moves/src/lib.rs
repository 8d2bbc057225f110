//! `campground-moves` - finds guests moving between sites on the same day.
//!
//! Pure engine crate: receives already-read due-in/due-out reports, returns
//! the upload status and the matched guests. No CLI or IO dependencies.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod model;
pub mod status;

pub use classify::{classify, classify_with, Outcome};
pub use config::{MovesConfig, OutputFormat, ReportColumns, ReportLayout};
pub use engine::run;
pub use error::MovesError;
pub use extract::{decode_report, extract_due_in, extract_due_out};
pub use matcher::match_guests;
pub use model::{
    Artifact, GuestArrival, GuestDeparture, MovesReport, Role, RunResult, StayingGuest,
};
pub use status::{describe, describe_with, missing_role, review, Review, Severity, Status};
