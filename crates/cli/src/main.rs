mod args;
mod logging;

use cartwright::{ApplicationManager, RunReport, ScenarioStatus, run_suite, scenarios};
use clap::Parser;

use crate::args::Cli;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	match run(cli).await {
		Ok(report) => {
			if !report.is_success() {
				std::process::exit(1);
			}
		}
		Err(err) => {
			eprintln!("error: {err:#}");
			std::process::exit(2);
		}
	}
}

async fn run(cli: Cli) -> anyhow::Result<RunReport> {
	let config = cli.resolve_config()?;

	let suite: Vec<_> = scenarios::builtin_suite()
		.into_iter()
		.filter(|s| cli.matches_filter(s.name()))
		.collect();
	if suite.is_empty() {
		anyhow::bail!("no scenario matches the given filters");
	}

	let report = run_suite(&suite, || ApplicationManager::new(config.clone())).await;

	for outcome in &report.outcomes {
		match &outcome.status {
			ScenarioStatus::Passed => {
				println!("PASS {} ({:.1?})", outcome.name, outcome.duration);
			}
			ScenarioStatus::Failed(reason) => {
				println!("FAIL {} ({:.1?}): {reason}", outcome.name, outcome.duration);
			}
		}
	}
	println!("{} passed, {} failed", report.passed(), report.failed());

	Ok(report)
}
