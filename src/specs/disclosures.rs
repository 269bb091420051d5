// src/specs/disclosures.rs
//! Scraping *spec* for the yearly transaction report.
//!
//! `GenerateReport/{id}?ReportYear={year}` answers with CSV, or with a fixed
//! sentence when the entity filed nothing that year. The sentence is a valid
//! empty result, not an error.

use crate::config::consts::EMPTY_REPORT_MSG;
use crate::data::DisclosureRow;

/// Column order used by the regulator, and by our own CSV output.
pub const COLUMNS: [&str; 17] = [
    "CORP", "REPORT", "TRAN_ID", "TRAN_TYPE", "TRAN_DATE", "TRAN_AMT", "INKIND", "LOAN",
    "AMENDS", "NAME", "PURPOSE", "ADDRESS1", "ADDRESS2", "CITY", "STATE", "ZIP",
    "INKIND_COMMENTS",
];

pub fn is_empty_report(body: &str) -> bool {
    body.trim() == EMPTY_REPORT_MSG
}

pub fn parse_report(body: &str) -> Result<Vec<DisclosureRow>, csv::Error> {
    if is_empty_report(body) || body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(body.as_bytes());

    reader.deserialize().collect()
}
