use serde::Serialize;

use crate::config::{MovesConfig, ReportLayout};
use crate::model::Role;

/// Decision about one set of uploaded artifact names.
///
/// Every input maps to exactly one variant; an unusable upload set is data,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing uploaded.
    Empty,
    /// One report uploaded; the other role is still missing.
    SingleMissingPair { present: Role },
    /// One file uploaded and it is neither report.
    SingleUnrecognized,
    /// Two files with the same name.
    PairDuplicate,
    /// Two distinct files, at least one of which is neither report.
    PairUnrecognized,
    /// Both reports present; positions refer to the input order.
    PairValid { due_in: usize, due_out: usize },
    /// More than two files.
    TooMany,
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::PairValid { .. })
    }

    /// `(due_in_index, due_out_index)` for a valid pair.
    pub fn pair(&self) -> Option<(usize, usize)> {
        match *self {
            Self::PairValid { due_in, due_out } => Some((due_in, due_out)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::SingleMissingPair { .. } => "single_missing_pair",
            Self::SingleUnrecognized => "single_unrecognized",
            Self::PairDuplicate => "pair_duplicate",
            Self::PairUnrecognized => "pair_unrecognized",
            Self::PairValid { .. } => "pair_valid",
            Self::TooMany => "too_many",
        }
    }
}

/// Classify upload names against the default report file names.
pub fn classify<S: AsRef<str>>(names: &[S]) -> Outcome {
    let config = MovesConfig::new();
    classify_with(names, &config.layout())
}

/// Classify upload names against the file names in `layout`.
pub fn classify_with<S: AsRef<str>>(names: &[S], layout: &ReportLayout<'_>) -> Outcome {
    match names {
        [] => Outcome::Empty,
        [only] => match layout.role_for(only.as_ref()) {
            Some(present) => Outcome::SingleMissingPair { present },
            None => Outcome::SingleUnrecognized,
        },
        [first, second] => {
            let (first, second) = (first.as_ref(), second.as_ref());
            // Duplicates win over role checks.
            if first == second {
                return Outcome::PairDuplicate;
            }
            match (layout.role_for(first), layout.role_for(second)) {
                (Some(Role::DueIn), Some(Role::DueOut)) => Outcome::PairValid { due_in: 0, due_out: 1 },
                (Some(Role::DueOut), Some(Role::DueIn)) => Outcome::PairValid { due_in: 1, due_out: 0 },
                _ => Outcome::PairUnrecognized,
            }
        }
        _ => Outcome::TooMany,
    }
}
