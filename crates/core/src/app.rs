//! Application manager: the single handle scenarios depend on.

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::driver::DriverConnector;
use crate::driver::webdriver::WebDriverConnector;
use crate::error::{HarnessError, Result};
use crate::helpers::{AuthHelper, NavigationHelper, ProductsHelper};
use crate::locator::Locator;
use crate::session::SessionController;

/// Lifecycle state of an [`ApplicationManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
	Unstarted,
	Running,
	Stopped,
}

/// Composes the session controller and all capability helpers into one
/// handle injected into scenarios.
///
/// Exactly one browser session per manager instance; the session is
/// created on [`start`](Self::start), destroyed on
/// [`stop`](Self::stop), and never shared across managers. Helpers are
/// bound on access and only while the manager is Running, so no helper
/// can reach a session that no longer exists.
pub struct ApplicationManager {
	state: AppState,
	session: SessionController,
}

impl ApplicationManager {
	/// Creates an unstarted manager using the production WebDriver
	/// backend.
	pub fn new(config: AppConfig) -> Self {
		Self::with_connector(config, Box::new(WebDriverConnector))
	}

	/// Creates an unstarted manager with an injected driver backend.
	pub fn with_connector(config: AppConfig, connector: Box<dyn DriverConnector>) -> Self {
		Self {
			state: AppState::Unstarted,
			session: SessionController::new(config, connector),
		}
	}

	pub fn state(&self) -> AppState {
		self.state
	}

	pub fn config(&self) -> &AppConfig {
		self.session.config()
	}

	/// Unstarted → Running. Acquires the browser session.
	///
	/// On session-start failure the manager remains Unstarted and the
	/// error propagates. Starting from Running or Stopped is a
	/// programming error.
	pub async fn start(&mut self) -> Result<()> {
		match self.state {
			AppState::Unstarted => {}
			AppState::Running => return Err(HarnessError::illegal_state("manager already running")),
			AppState::Stopped => {
				return Err(HarnessError::illegal_state(
					"stopped manager cannot be restarted; build a fresh one",
				));
			}
		}

		self.session.start().await?;
		self.state = AppState::Running;
		debug!(target = "cartwright.app", "application manager running");
		Ok(())
	}

	/// Any state → Stopped. Releases the session best-effort.
	///
	/// Always succeeds: teardown must not mask the original scenario
	/// failure, so release errors are logged instead of propagated.
	pub async fn stop(&mut self) {
		if let Err(err) = self.session.stop().await {
			warn!(target = "cartwright.app", error = %err, "session release failed during stop");
		}
		self.state = AppState::Stopped;
	}

	/// Navigation helper, available while Running.
	pub fn navigation(&self) -> Result<NavigationHelper<'_>> {
		Ok(NavigationHelper::new(self.running_session()?))
	}

	/// Authentication helper, available while Running.
	pub fn auth(&self) -> Result<AuthHelper<'_>> {
		Ok(AuthHelper::new(self.running_session()?))
	}

	/// Product-action helper, available while Running.
	pub fn products(&self) -> Result<ProductsHelper<'_>> {
		Ok(ProductsHelper::new(self.running_session()?))
	}

	/// Current browser URL, for observable-state assertions.
	pub async fn current_url(&self) -> Result<String> {
		self.running_session()?.current_url().await
	}

	/// Count of elements matching `locator`, for observable-state
	/// assertions.
	pub async fn elements_matching(&self, locator: &Locator) -> Result<usize> {
		self.running_session()?.elements_matching(locator).await
	}

	fn running_session(&self) -> Result<&SessionController> {
		match self.state {
			AppState::Running => Ok(&self.session),
			AppState::Unstarted => Err(HarnessError::illegal_state("manager not started")),
			AppState::Stopped => Err(HarnessError::illegal_state("manager already stopped")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{MockConnector, MockDriver};

	fn manager(driver: MockDriver) -> ApplicationManager {
		ApplicationManager::with_connector(AppConfig::default(), Box::new(MockConnector::new(driver)))
	}

	#[tokio::test]
	async fn helper_access_before_start_is_illegal() {
		let app = manager(MockDriver::new());
		assert!(matches!(app.navigation(), Err(HarnessError::IllegalState(_))));
		assert!(matches!(app.auth(), Err(HarnessError::IllegalState(_))));
		assert!(matches!(app.products(), Err(HarnessError::IllegalState(_))));
	}

	#[tokio::test]
	async fn helper_access_after_stop_is_illegal() {
		let mut app = manager(MockDriver::new());
		app.start().await.unwrap();
		assert!(app.navigation().is_ok());
		app.stop().await;
		assert!(matches!(app.products(), Err(HarnessError::IllegalState(_))));
		assert!(matches!(
			app.current_url().await,
			Err(HarnessError::IllegalState(_))
		));
	}

	#[tokio::test]
	async fn failed_start_leaves_manager_unstarted() {
		let mut app = ApplicationManager::with_connector(
			AppConfig::default(),
			Box::new(MockConnector::failing("driver binary missing")),
		);
		let err = app.start().await.unwrap_err();
		assert!(matches!(err, HarnessError::SessionStart { .. }));
		assert_eq!(app.state(), AppState::Unstarted);
	}

	#[tokio::test]
	async fn stop_is_safe_in_every_state() {
		let mut app = manager(MockDriver::new());
		app.stop().await;
		assert_eq!(app.state(), AppState::Stopped);
		app.stop().await;
		assert_eq!(app.state(), AppState::Stopped);
	}

	#[tokio::test]
	async fn stopped_manager_cannot_restart() {
		let mut app = manager(MockDriver::new());
		app.start().await.unwrap();
		app.stop().await;
		assert!(matches!(app.start().await, Err(HarnessError::IllegalState(_))));
	}

	#[tokio::test]
	async fn stop_releases_the_session_exactly_once() {
		let driver = MockDriver::new();
		let handle = driver.handle();
		let mut app = manager(driver);
		app.start().await.unwrap();
		app.stop().await;
		app.stop().await;
		assert_eq!(handle.close_count(), 1);
	}
}
