//! Skill triage module.
//!
//! Classifies indexed skills against in-source keyword tables and writes a
//! JSON triage report.

pub mod classify;
pub mod keywords;
pub mod report;

pub use classify::{classify, Verdict};
pub use report::TriageReport;

use std::path::Path;

use anyhow::Result;

use crate::catalog;

/// Run the full triage pass: read the index, classify every record, write
/// the report, and print a summary.
pub fn run(index_path: &Path, report_path: &Path) -> Result<TriageReport> {
    let records = catalog::load_index(index_path)?;

    let mut report = TriageReport::new();
    for record in &records {
        report.add(record, &classify(record));
    }

    report.write(report_path)?;
    report.print_summary(report_path);

    Ok(report)
}
