//! Output rendering for `campground run`: aligned table, CSV, or JSON.

use campground_moves::{RunResult, StayingGuest};
use serde::Serialize;

use crate::util::{display_width, pad_right, truncate_display};

const HEADERS: [&str; 3] = ["name", "site_leaving", "site_arriving"];

fn cells(guest: &StayingGuest) -> [&str; 3] {
    [
        guest.name.as_str(),
        guest.site_leaving.as_str(),
        guest.site_arriving.as_str(),
    ]
}

/// Aligned plain-text table. Columns wider than `max_col_width` are cut.
pub fn render_table(guests: &[StayingGuest], max_col_width: usize) -> String {
    let mut widths = HEADERS.map(display_width);
    for guest in guests {
        for (w, cell) in widths.iter_mut().zip(cells(guest)) {
            *w = (*w).max(display_width(cell));
        }
    }
    let widths = widths.map(|w| w.min(max_col_width.max(1)));

    // Last column is cut but never padded.
    let line = |row: [&str; 3]| -> String {
        let last = row.len() - 1;
        let padded: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                if i == last {
                    truncate_display(cell, w)
                } else {
                    pad_right(cell, w)
                }
            })
            .collect();
        padded.join("  ")
    };

    let mut out = String::new();
    out.push_str(&line(HEADERS));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for guest in guests {
        out.push_str(&line(cells(guest)));
        out.push('\n');
    }
    out
}

pub fn render_csv(guests: &[StayingGuest], delimiter: u8) -> Result<String, String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(HEADERS).map_err(|e| e.to_string())?;
    for guest in guests {
        writer.write_record(cells(guest)).map_err(|e| e.to_string())?;
    }

    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    status: &'a campground_moves::Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a campground_moves::MovesReport>,
}

pub fn render_json(result: &RunResult) -> Result<String, String> {
    let out = JsonOutput {
        status: &result.status,
        report: result.report.as_ref(),
    };
    serde_json::to_string_pretty(&out).map_err(|e| format!("JSON serialization error: {e}"))
}
