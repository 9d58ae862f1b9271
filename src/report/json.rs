use std::path::Path;

use anyhow::Result;
use log::debug;

use super::types::TestReport;

/// Write the report as pretty-printed JSON, replacing any previous file
pub fn write(report: &TestReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    debug!("writing report to {}", path.display());
    std::fs::write(path, json)?;
    Ok(())
}
