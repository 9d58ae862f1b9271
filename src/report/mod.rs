pub mod console;
pub mod json;
pub mod types;

use std::path::Path;

use anyhow::Result;

use self::types::TestReport;

/// Output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "ai_service_test_results.json";

/// Build the report, persist it as JSON, and print the console summary
pub fn generate(output: &Path) -> Result<TestReport> {
    let report = TestReport::capture();
    json::write(&report, output)?;
    console::print(&report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_writes_file_and_returns_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);

        let report = generate(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: TestReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn generate_fails_on_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join(DEFAULT_OUTPUT);

        assert!(generate(&path).is_err());
    }
}
