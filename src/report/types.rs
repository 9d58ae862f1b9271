use serde::{Deserialize, Serialize};

/// Timestamp format used in the report header and JSON output
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One named manual test case with a sample input and expected behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioRecord {
    pub scenario: String,
    pub test_message: String,
    pub expected_behavior: String,
}

impl ScenarioRecord {
    fn new(scenario: &str, test_message: &str, expected_behavior: &str) -> Self {
        Self {
            scenario: scenario.to_string(),
            test_message: test_message.to_string(),
            expected_behavior: expected_behavior.to_string(),
        }
    }
}

/// Static record documenting the manual AI chat test scenarios.
/// Field declaration order is the JSON key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestReport {
    pub timestamp: String,
    pub ai_service_implementation: String,
    pub features_implemented: Vec<String>,
    pub test_scenarios: Vec<ScenarioRecord>,
    pub knowledge_base: Vec<String>,
    pub integration_status: String,
}

impl TestReport {
    /// Build the report stamped with the current local time
    pub fn capture() -> Self {
        Self::with_timestamp(chrono::Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    /// Build the report with a preformatted timestamp
    pub fn with_timestamp(timestamp: String) -> Self {
        Self {
            timestamp,
            ai_service_implementation: "LangChain4j with OpenAI".to_string(),
            features_implemented: vec![
                "OpenAI GPT-4o-mini integration".to_string(),
                "Streaming response handling".to_string(),
                "Airline-specific system prompt".to_string(),
                "Multiple API key fallback".to_string(),
                "Chat memory for context".to_string(),
                "Error handling and fallbacks".to_string(),
            ],
            test_scenarios: vec![
                ScenarioRecord::new(
                    "Booking inquiry",
                    "How can I change my flight booking?",
                    "AI should provide information about booking changes, 2-hour deadline, and fees",
                ),
                ScenarioRecord::new(
                    "Baggage policy",
                    "What's the baggage allowance for economy class?",
                    "AI should mention 1 carry-on (7kg) and 1 checked bag (23kg)",
                ),
                ScenarioRecord::new(
                    "Customer service contact",
                    "I need to speak to a human agent",
                    "AI should provide contact info: 1-800-PIKACHU, support@pikachuairlines.com",
                ),
                ScenarioRecord::new(
                    "Check-in process",
                    "When can I check in online?",
                    "AI should mention 24 hours before departure",
                ),
            ],
            knowledge_base: vec![
                "Airline policies document with 70+ policy items".to_string(),
                "FAQ document with 50+ questions and answers".to_string(),
                "Technical troubleshooting guide with common issues".to_string(),
                "System prompt with key airline information".to_string(),
            ],
            integration_status: "Successfully compiled and ready for testing".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn feature_list_has_six_entries_in_order() {
        let report = TestReport::capture();
        assert_eq!(report.features_implemented.len(), 6);
        assert_eq!(
            report.features_implemented[0],
            "OpenAI GPT-4o-mini integration"
        );
        assert_eq!(report.features_implemented[5], "Error handling and fallbacks");
    }

    #[test]
    fn scenarios_are_complete() {
        let report = TestReport::capture();
        assert_eq!(report.test_scenarios.len(), 4);
        for scenario in &report.test_scenarios {
            assert!(!scenario.scenario.is_empty());
            assert!(!scenario.test_message.is_empty());
            assert!(!scenario.expected_behavior.is_empty());
        }
        assert_eq!(report.test_scenarios[0].scenario, "Booking inquiry");
        assert_eq!(report.test_scenarios[3].scenario, "Check-in process");
    }

    #[test]
    fn knowledge_base_has_four_entries() {
        let report = TestReport::capture();
        assert_eq!(report.knowledge_base.len(), 4);
    }

    #[test]
    fn timestamp_is_a_valid_datetime() {
        let report = TestReport::capture();
        NaiveDateTime::parse_from_str(&report.timestamp, TIMESTAMP_FORMAT)
            .expect("timestamp should match YYYY-MM-DD HH:MM:SS");
    }
}
