use std::path::Path;

use clap::Parser;
use colored::Colorize;

use ai_test_doc::report;

#[derive(Parser)]
#[command(name = "ai-test-doc")]
#[command(version = "0.1.0")]
#[command(about = "AI chat integration test documentation CLI", long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _cli = Cli::parse();

    let output = Path::new(report::DEFAULT_OUTPUT);
    report::generate(output)?;

    println!(
        "\n{} Report saved to: {}",
        "✓".green().bold(),
        output.display().to_string().cyan()
    );
    Ok(())
}
