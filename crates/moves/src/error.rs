use std::fmt;

#[derive(Debug)]
pub enum MovesError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty file name, duplicate column, etc.).
    ConfigValidation(String),
    /// Required source column absent from an artifact header.
    MissingColumn { role: String, column: String },
    /// Row shape does not match the header, or the CSV could not be read.
    MalformedRow { role: String, line: u64, message: String },
    /// IO error (config file read, etc.).
    Io(String),
}

impl MovesError {
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }

    pub fn is_extraction(&self) -> bool {
        matches!(self, Self::MalformedRow { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::ConfigParse(_) | Self::ConfigValidation(_))
    }
}

impl fmt::Display for MovesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingColumn { role, column } => {
                write!(f, "{role} report: missing column '{column}'")
            }
            Self::MalformedRow { role, line, message } => {
                write!(f, "{role} report, line {line}: {message}")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for MovesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_role_and_column() {
        let err = MovesError::MissingColumn {
            role: "due_in".into(),
            column: "txtdetailssmallfont-Name".into(),
        };
        assert_eq!(err.to_string(), "due_in report: missing column 'txtdetailssmallfont-Name'");
        assert!(err.is_schema());
        assert!(!err.is_extraction());
    }

    #[test]
    fn malformed_row_is_extraction() {
        let err = MovesError::MalformedRow {
            role: "due_out".into(),
            line: 3,
            message: "found record with 1 fields, but the previous record has 2 fields".into(),
        };
        assert!(err.is_extraction());
        assert!(err.to_string().starts_with("due_out report, line 3:"));
    }
}
