use anyhow::Result;
use regex::Regex;

use crate::query::types::SearchRecord;

pub const UTF8_BOM: &str = "\u{feff}";
pub const EXPORT_FILE_NAME: &str = "data.csv";
pub const CSV_HEADER: [&str; 2] = ["Text", "Work"];

/// Strip highlight-marker markup and convert line-break markers to literal
/// newlines, leaving only the underlying text. Backends have wrapped matches
/// in `<mark>` and, historically, styled `<span>` tags; both are removed.
pub fn scrub_cell(text: &str) -> String {
    let markup = Regex::new(r"</?(?:mark|span)[^>]*>").unwrap();
    let line_breaks = Regex::new(r"<br\s*/?>").unwrap();

    let stripped = markup.replace_all(text, "");
    line_breaks.replace_all(&stripped, "\n").into_owned()
}

/// Serialize records to CSV text: UTF-8 BOM, header row, one line per record
/// with standard quoting, and no terminator after the last row.
pub fn export_csv(records: &[SearchRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([scrub_cell(&record.text), scrub_cell(&record.work)])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("csv writer flush failed: {}", err))?;
    let mut body = String::from_utf8(bytes)?;

    // The writer terminates every row; drop the terminator after the last one
    // so the file carries no trailing empty line.
    let trimmed = body.trim_end_matches(['\r', '\n']).len();
    body.truncate(trimmed);

    Ok(format!("{}{}", UTF8_BOM, body))
}
