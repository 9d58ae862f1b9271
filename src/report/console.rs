use colored::Colorize;

use super::types::TestReport;

const NEXT_STEPS: [&str; 5] = [
    "1. Launch the application with 'mvn javafx:run'",
    "2. Login with customer credentials (customer/123456)",
    "3. Navigate to 'Support & Chat'",
    "4. Test the AI chat with the scenarios above",
    "5. Verify streaming responses and proper error handling",
];

/// Render the report in the fixed console layout
pub fn render(report: &TestReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n",
        "AI Service Integration Test Documentation".bold()
    ));
    out.push_str(&format!("{}\n", "=".repeat(50)));
    out.push_str(&format!("Timestamp: {}\n", report.timestamp.cyan()));
    out.push_str(&format!(
        "Implementation: {}\n",
        report.ai_service_implementation.cyan()
    ));

    out.push_str("\nFeatures Implemented:\n");
    for feature in &report.features_implemented {
        out.push_str(&format!("  {} {}\n", "✓".green(), feature));
    }

    out.push_str("\nTest Scenarios to Verify:\n");
    for (i, scenario) in report.test_scenarios.iter().enumerate() {
        out.push_str(&format!("\n{}. {}\n", i + 1, scenario.scenario));
        out.push_str(&format!("   Test: \"{}\"\n", scenario.test_message));
        out.push_str(&format!("   Expected: {}\n", scenario.expected_behavior));
    }

    out.push_str("\nKnowledge Base:\n");
    for entry in &report.knowledge_base {
        out.push_str(&format!("  • {}\n", entry));
    }

    out.push_str(&format!(
        "\nStatus: {}\n",
        report.integration_status.green()
    ));

    out.push_str("\nTo test the AI service:\n");
    for step in NEXT_STEPS {
        out.push_str(step);
        out.push('\n');
    }

    out
}

/// Print the rendered report to stdout
pub fn print(report: &TestReport) {
    print!("{}", render(report));
}
