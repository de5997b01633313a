//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde_json::to_string_pretty;

use crate::analysis::AnalysisReport;

/// Save the analysis report as pretty JSON to `<output_dir>/analysis.json`
pub fn save_report(report: &AnalysisReport, output_dir: &str) -> Result<()> {
    log::info!("Saving analysis report to {}", output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    let path = Path::new(output_dir).join("analysis.json");
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(report)?.as_bytes())?;

    log::info!("Report saved successfully");

    Ok(())
}
