pub mod report;

// Re-export common items
pub use report::generate;
pub use report::types::{ScenarioRecord, TestReport};
