use crate::config::ReportColumns;
use crate::error::MovesError;
use crate::model::{GuestArrival, GuestDeparture, Role};

/// Extract `(name, site_arriving)` rows from a due-in report.
pub fn extract_due_in(csv_data: &str, columns: &ReportColumns) -> Result<Vec<GuestArrival>, MovesError> {
    let rows = extract_columns(Role::DueIn, csv_data, columns)?;
    Ok(rows
        .into_iter()
        .map(|(name, site_arriving)| GuestArrival { name, site_arriving })
        .collect())
}

/// Extract `(name, site_leaving)` rows from a due-out report.
pub fn extract_due_out(csv_data: &str, columns: &ReportColumns) -> Result<Vec<GuestDeparture>, MovesError> {
    let rows = extract_columns(Role::DueOut, csv_data, columns)?;
    Ok(rows
        .into_iter()
        .map(|(name, site_leaving)| GuestDeparture { name, site_leaving })
        .collect())
}

/// Decode raw report bytes as UTF-8.
///
/// Invalid bytes are an extraction error on the line that holds them.
pub fn decode_report(role: Role, bytes: Vec<u8>) -> Result<String, MovesError> {
    String::from_utf8(bytes).map_err(|err| {
        let valid = err.utf8_error().valid_up_to();
        let bytes = err.as_bytes();
        let line = bytes[..valid].iter().filter(|&&b| b == b'\n').count() as u64 + 1;
        MovesError::MalformedRow {
            role: role.as_str().into(),
            line,
            message: format!("invalid UTF-8 at byte {valid}"),
        }
    })
}

/// Read the name and site columns of every row, in file order.
///
/// Values are taken verbatim. Any row whose width differs from the header
/// fails the whole extraction.
fn extract_columns(
    role: Role,
    csv_data: &str,
    columns: &ReportColumns,
) -> Result<Vec<(String, String)>, MovesError> {
    let csv_data = csv_data.strip_prefix('\u{feff}').unwrap_or(csv_data);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::None)
        .from_reader(csv_data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| malformed(role, &e))?
        .clone();

    let idx = |name: &str| -> Result<usize, MovesError> {
        headers.iter().position(|h| h == name).ok_or_else(|| MovesError::MissingColumn {
            role: role.as_str().into(),
            column: name.into(),
        })
    };

    let name_idx = idx(&columns.name_column)?;
    let site_idx = idx(&columns.site_column)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| malformed(role, &e))?;
        let name = record.get(name_idx).unwrap_or("").to_string();
        let site = record.get(site_idx).unwrap_or("").to_string();
        rows.push((name, site));
    }

    log::debug!("{role} report: extracted {} rows", rows.len());
    Ok(rows)
}

fn malformed(role: Role, err: &csv::Error) -> MovesError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let message = match err.kind() {
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("expected {expected_len} fields, found {len}")
        }
        _ => err.to_string(),
    };
    MovesError::MalformedRow {
        role: role.as_str().into(),
        line,
        message,
    }
}
