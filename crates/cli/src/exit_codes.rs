//! CLI Exit Code Registry
//!
//! Single source of truth for `campground` exit codes. Scripts rely on them.
//!
//! | Code | Meaning                                           |
//! |------|---------------------------------------------------|
//! | 0    | Success (including an empty match result)         |
//! | 1    | General error                                     |
//! | 2    | Usage error (bad args; clap also exits with 2)    |
//! | 3    | Upload set rejected (not exactly the two reports) |
//! | 4    | Schema error: required column missing             |
//! | 5    | Extraction error: malformed CSV row               |
//! | 6    | Config error (parse or validation)                |
//! | 7    | IO error (cannot read input / write output)       |

use campground_moves::MovesError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Uploaded files are not exactly one due-in and one due-out report.
pub const EXIT_UPLOAD_REJECTED: u8 = 3;

/// A report is missing one of its required columns.
pub const EXIT_SCHEMA: u8 = 4;

/// A report has a row whose width differs from its header.
pub const EXIT_EXTRACTION: u8 = 5;

/// Config file cannot be parsed or fails validation.
pub const EXIT_CONFIG: u8 = 6;

/// Cannot read an input file or write an output file.
pub const EXIT_IO: u8 = 7;

/// Map an engine error to its exit code.
pub fn moves_exit_code(err: &MovesError) -> u8 {
    match err {
        MovesError::MissingColumn { .. } => EXIT_SCHEMA,
        MovesError::MalformedRow { .. } => EXIT_EXTRACTION,
        MovesError::ConfigParse(_) | MovesError::ConfigValidation(_) => EXIT_CONFIG,
        MovesError::Io(_) => EXIT_IO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_map_to_distinct_codes() {
        let schema = MovesError::MissingColumn { role: "due_in".into(), column: "x".into() };
        let row = MovesError::MalformedRow { role: "due_out".into(), line: 2, message: "m".into() };
        assert_eq!(moves_exit_code(&schema), EXIT_SCHEMA);
        assert_eq!(moves_exit_code(&row), EXIT_EXTRACTION);
        assert_eq!(moves_exit_code(&MovesError::ConfigParse("bad".into())), EXIT_CONFIG);
        assert_eq!(moves_exit_code(&MovesError::ConfigValidation("bad".into())), EXIT_CONFIG);
        assert_eq!(moves_exit_code(&MovesError::Io("gone".into())), EXIT_IO);
    }
}
