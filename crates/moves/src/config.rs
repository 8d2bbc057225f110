use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MovesError;
use crate::model::Role;

pub const DUE_IN_FILE: &str = "Due In Report.csv";
pub const DUE_OUT_FILE: &str = "Due Out Report.csv";

pub const DUE_IN_NAME_COLUMN: &str = "txtdetailssmallfont-Name";
pub const DUE_IN_SITE_COLUMN: &str = "txtdetailssmallfont-unit_name";
pub const DUE_OUT_NAME_COLUMN: &str = "txtdetails-Customer";
pub const DUE_OUT_SITE_COLUMN: &str = "txtdetails-unit_name";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MovesConfig {
    #[serde(default = "ReportColumns::due_in", deserialize_with = "due_in_columns")]
    pub due_in: ReportColumns,
    #[serde(default = "ReportColumns::due_out", deserialize_with = "due_out_columns")]
    pub due_out: ReportColumns,
    #[serde(default)]
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Report layout
// ---------------------------------------------------------------------------

/// Expected file name and the two source columns of one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportColumns {
    pub file: String,
    pub name_column: String,
    pub site_column: String,
}

impl ReportColumns {
    pub fn due_in() -> Self {
        Self {
            file: DUE_IN_FILE.into(),
            name_column: DUE_IN_NAME_COLUMN.into(),
            site_column: DUE_IN_SITE_COLUMN.into(),
        }
    }

    pub fn due_out() -> Self {
        Self {
            file: DUE_OUT_FILE.into(),
            name_column: DUE_OUT_NAME_COLUMN.into(),
            site_column: DUE_OUT_SITE_COLUMN.into(),
        }
    }
}

/// A `[due_in]` / `[due_out]` table as written; absent keys keep the role's default.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnsOverride {
    file: Option<String>,
    name_column: Option<String>,
    site_column: Option<String>,
}

impl ColumnsOverride {
    fn apply(self, base: ReportColumns) -> ReportColumns {
        ReportColumns {
            file: self.file.unwrap_or(base.file),
            name_column: self.name_column.unwrap_or(base.name_column),
            site_column: self.site_column.unwrap_or(base.site_column),
        }
    }
}

fn due_in_columns<'de, D: Deserializer<'de>>(de: D) -> Result<ReportColumns, D::Error> {
    ColumnsOverride::deserialize(de).map(|o| o.apply(ReportColumns::due_in()))
}

fn due_out_columns<'de, D: Deserializer<'de>>(de: D) -> Result<ReportColumns, D::Error> {
    ColumnsOverride::deserialize(de).map(|o| o.apply(ReportColumns::due_out()))
}

/// Borrowed view of both reports, as consumed by the classifier and reporter.
#[derive(Debug, Clone, Copy)]
pub struct ReportLayout<'a> {
    pub due_in: &'a ReportColumns,
    pub due_out: &'a ReportColumns,
}

impl<'a> ReportLayout<'a> {
    pub fn columns(&self, role: Role) -> &'a ReportColumns {
        match role {
            Role::DueIn => self.due_in,
            Role::DueOut => self.due_out,
        }
    }

    /// Role whose expected file name is exactly `name`.
    pub fn role_for(&self, name: &str) -> Option<Role> {
        if name == self.due_in.file {
            Some(Role::DueIn)
        } else if name == self.due_out.file {
            Some(Role::DueOut)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl Default for MovesConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MovesConfig {
    pub fn new() -> Self {
        Self {
            due_in: ReportColumns::due_in(),
            due_out: ReportColumns::due_out(),
            output: OutputConfig::default(),
        }
    }

    pub fn layout(&self) -> ReportLayout<'_> {
        ReportLayout {
            due_in: &self.due_in,
            due_out: &self.due_out,
        }
    }

    /// `<config_dir>/campground/moves.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campground")
            .join("moves.toml")
    }

    pub fn from_toml(input: &str) -> Result<Self, MovesError> {
        let config: MovesConfig =
            toml::from_str(input).map_err(|e| MovesError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, MovesError> {
        let input = std::fs::read_to_string(path)
            .map_err(|e| MovesError::Io(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&input)
    }

    pub fn to_toml(&self) -> Result<String, MovesError> {
        toml::to_string_pretty(self).map_err(|e| MovesError::ConfigParse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), MovesError> {
        for (role, cols) in [(Role::DueIn, &self.due_in), (Role::DueOut, &self.due_out)] {
            if cols.file.is_empty() {
                return Err(MovesError::ConfigValidation(format!("{role}: file must not be empty")));
            }
            if cols.name_column.is_empty() || cols.site_column.is_empty() {
                return Err(MovesError::ConfigValidation(format!(
                    "{role}: name_column and site_column must not be empty"
                )));
            }
            if cols.name_column == cols.site_column {
                return Err(MovesError::ConfigValidation(format!(
                    "{role}: name_column and site_column are both '{}'",
                    cols.name_column
                )));
            }
        }

        if self.due_in.file == self.due_out.file {
            return Err(MovesError::ConfigValidation(format!(
                "due_in and due_out share the file name '{}'",
                self.due_in.file
            )));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
