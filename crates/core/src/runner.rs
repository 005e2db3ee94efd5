//! Run driver: executes scenarios with guaranteed session teardown.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{error, info};

use crate::app::ApplicationManager;
use crate::error::Result;

/// One independent test case: a sequence of helper calls followed by
/// assertions on observable state.
///
/// Scenario bodies receive a Running manager and never manage its
/// lifecycle; the run driver owns start/stop.
#[async_trait]
pub trait Scenario: Send + Sync {
	fn name(&self) -> &str;

	async fn run(&self, app: &ApplicationManager) -> Result<()>;
}

/// Terminal status of one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioStatus {
	Passed,
	Failed(String),
}

/// Recorded result of one scenario execution.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
	pub name: String,
	pub status: ScenarioStatus,
	pub duration: Duration,
}

impl ScenarioOutcome {
	pub fn passed(&self) -> bool {
		self.status == ScenarioStatus::Passed
	}
}

/// Aggregated pass/fail results for a suite run.
#[derive(Debug, Default)]
pub struct RunReport {
	pub outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
	pub fn passed(&self) -> usize {
		self.outcomes.iter().filter(|o| o.passed()).count()
	}

	pub fn failed(&self) -> usize {
		self.outcomes.len() - self.passed()
	}

	pub fn is_success(&self) -> bool {
		self.failed() == 0
	}
}

/// Runs each scenario against a fresh manager from `make_manager`.
///
/// Scenarios are fully isolated: each gets its own manager and
/// therefore its own browser session, one failure never aborts
/// siblings, and `stop` runs on every exit path so the session is
/// released whether the body passed, failed an assertion, or errored
/// mid-flow.
pub async fn run_suite<F>(scenarios: &[Box<dyn Scenario>], make_manager: F) -> RunReport
where
	F: Fn() -> ApplicationManager,
{
	let mut report = RunReport::default();

	for scenario in scenarios {
		let started_at = Instant::now();
		let mut app = make_manager();

		let result = match app.start().await {
			Ok(()) => scenario.run(&app).await,
			Err(err) => Err(err),
		};
		app.stop().await;

		let duration = started_at.elapsed();
		let status = match result {
			Ok(()) => {
				info!(target = "cartwright.runner", scenario = scenario.name(), ?duration, "passed");
				ScenarioStatus::Passed
			}
			Err(err) => {
				error!(target = "cartwright.runner", scenario = scenario.name(), error = %err, "failed");
				ScenarioStatus::Failed(err.to_string())
			}
		};

		report.outcomes.push(ScenarioOutcome {
			name: scenario.name().to_string(),
			status,
			duration,
		});
	}

	report
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;
	use crate::check::ensure;
	use crate::config::AppConfig;
	use crate::testing::{MockConnector, MockDriver};

	struct CountingScenario {
		name: &'static str,
		pass: bool,
		runs: Arc<AtomicUsize>,
	}

	#[async_trait]
	impl Scenario for CountingScenario {
		fn name(&self) -> &str {
			self.name
		}

		async fn run(&self, _app: &ApplicationManager) -> Result<()> {
			self.runs.fetch_add(1, Ordering::SeqCst);
			ensure(self.pass, "scripted failure")
		}
	}

	fn suite(runs: &Arc<AtomicUsize>) -> Vec<Box<dyn Scenario>> {
		vec![
			Box::new(CountingScenario { name: "first (fails)", pass: false, runs: runs.clone() }),
			Box::new(CountingScenario { name: "second", pass: true, runs: runs.clone() }),
		]
	}

	#[tokio::test]
	async fn failing_scenario_does_not_block_siblings() {
		let runs = Arc::new(AtomicUsize::new(0));
		let scenarios = suite(&runs);

		let report = run_suite(&scenarios, || {
			ApplicationManager::with_connector(AppConfig::default(), Box::new(MockConnector::new(MockDriver::new())))
		})
		.await;

		assert_eq!(runs.load(Ordering::SeqCst), 2);
		assert_eq!(report.passed(), 1);
		assert_eq!(report.failed(), 1);
		assert!(!report.is_success());
		assert_eq!(report.outcomes[0].status, ScenarioStatus::Failed("assertion failed: scripted failure".into()));
		assert!(report.outcomes[1].passed());
	}

	#[tokio::test]
	async fn teardown_runs_for_passing_and_failing_scenarios() {
		let runs = Arc::new(AtomicUsize::new(0));
		let scenarios = suite(&runs);
		let driver = MockDriver::new();
		let handle = driver.handle();

		let report = run_suite(&scenarios, || {
			ApplicationManager::with_connector(AppConfig::default(), Box::new(MockConnector::new(driver.clone())))
		})
		.await;

		assert_eq!(report.outcomes.len(), 2);
		assert_eq!(handle.close_count(), 2);
	}

	#[tokio::test]
	async fn session_start_failure_is_a_scenario_failure_not_a_run_abort() {
		let runs = Arc::new(AtomicUsize::new(0));
		let scenarios = suite(&runs);

		let report = run_suite(&scenarios, || {
			ApplicationManager::with_connector(AppConfig::default(), Box::new(MockConnector::failing("port conflict")))
		})
		.await;

		// Bodies never ran, but every scenario got its own verdict.
		assert_eq!(runs.load(Ordering::SeqCst), 0);
		assert_eq!(report.outcomes.len(), 2);
		assert_eq!(report.failed(), 2);
		for outcome in &report.outcomes {
			let ScenarioStatus::Failed(reason) = &outcome.status else {
				panic!("expected failure");
			};
			assert!(reason.contains("session start failed"), "{reason}");
		}
	}

	#[test]
	fn empty_report_is_success() {
		let report = RunReport::default();
		assert!(report.is_success());
		assert_eq!(report.passed(), 0);
	}

	#[tokio::test]
	async fn scenario_receives_a_running_manager() {
		struct UrlScenario;

		#[async_trait]
		impl Scenario for UrlScenario {
			fn name(&self) -> &str {
				"url"
			}

			async fn run(&self, app: &ApplicationManager) -> Result<()> {
				ensure(app.current_url().await?.is_empty(), "mock starts at an empty url")
			}
		}

		let scenarios: Vec<Box<dyn Scenario>> = vec![Box::new(UrlScenario)];
		let report = run_suite(&scenarios, || {
			ApplicationManager::with_connector(AppConfig::default(), Box::new(MockConnector::new(MockDriver::new())))
		})
		.await;

		assert!(report.is_success());
	}
}
