//! Session controller: exclusive owner of one browser session.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::config::{AppConfig, Viewport};
use crate::driver::{Driver, DriverConnector};
use crate::error::{HarnessError, Result};
use crate::locator::Locator;

/// Owns at most one live driver session and mediates every browser
/// interaction.
///
/// Each interaction runs under the configured wait budget so a page
/// that never reaches the expected state surfaces as
/// [`HarnessError::Timeout`] instead of stalling the run. Queries and
/// interactions issued with no live session fail with
/// [`HarnessError::NoActiveSession`] so dangling use fails fast rather
/// than silently succeeding against a previous session.
pub struct SessionController {
	config: AppConfig,
	connector: Box<dyn DriverConnector>,
	driver: Option<Box<dyn Driver>>,
}

impl SessionController {
	/// Creates an unstarted controller bound to a driver backend.
	pub fn new(config: AppConfig, connector: Box<dyn DriverConnector>) -> Self {
		Self {
			config,
			connector,
			driver: None,
		}
	}

	pub fn is_started(&self) -> bool {
		self.driver.is_some()
	}

	pub fn config(&self) -> &AppConfig {
		&self.config
	}

	/// Acquires a new browser session.
	///
	/// Calling `start` while a session is live is a programming error.
	pub async fn start(&mut self) -> Result<()> {
		if self.driver.is_some() {
			return Err(HarnessError::illegal_state("session already started"));
		}

		let budget = Duration::from_millis(self.config.wait_budget_ms);
		let driver = match tokio::time::timeout(budget, self.connector.connect(&self.config)).await {
			Ok(connected) => connected?,
			Err(_) => {
				return Err(HarnessError::SessionStart {
					source: anyhow::anyhow!(
						"no session within {}ms from {}",
						self.config.wait_budget_ms,
						self.config.webdriver_url
					),
				});
			}
		};

		debug!(target = "cartwright.session", browser = %self.config.browser, "session started");
		self.driver = Some(driver);
		Ok(())
	}

	/// Releases the session if one exists.
	///
	/// Safe to call multiple times and safe to call when `start` never
	/// succeeded; both are no-ops. The close runs under the same wait
	/// budget as every other interaction; an endpoint that stops
	/// responding mid-teardown surfaces as [`HarnessError::Timeout`]
	/// and the driver handle is dropped regardless.
	pub async fn stop(&mut self) -> Result<()> {
		let Some(driver) = self.driver.take() else {
			return Ok(());
		};

		debug!(target = "cartwright.session", "closing session");
		self.bounded("close session".to_string(), driver.close()).await
	}

	/// Navigates the session to `url`.
	pub async fn navigate(&self, url: &str) -> Result<()> {
		let driver = self.driver()?;
		self.bounded(format!("navigate to {url}"), driver.navigate(url)).await
	}

	/// Clicks the first element matching `locator`.
	pub async fn click(&self, locator: &Locator) -> Result<()> {
		let driver = self.driver()?;
		self.bounded(format!("click {locator}"), async {
			driver.find(locator).await?.click().await
		})
		.await
	}

	/// Types `text` into the first element matching `locator`.
	pub async fn type_text(&self, locator: &Locator, text: &str) -> Result<()> {
		let driver = self.driver()?;
		self.bounded(format!("type into {locator}"), async {
			driver.find(locator).await?.type_text(text).await
		})
		.await
	}

	/// Clears and retypes the value of the first element matching
	/// `locator`.
	pub async fn fill(&self, locator: &Locator, text: &str) -> Result<()> {
		let driver = self.driver()?;
		self.bounded(format!("fill {locator}"), async {
			let element = driver.find(locator).await?;
			element.click().await?;
			element.clear().await?;
			element.type_text(text).await
		})
		.await
	}

	/// Applies viewport dimensions to the browser window.
	pub async fn set_viewport(&self, viewport: Viewport) -> Result<()> {
		let driver = self.driver()?;
		self.bounded(
			format!("set viewport {}x{}", viewport.width, viewport.height),
			driver.set_window_size(viewport.width, viewport.height),
		)
		.await
	}

	/// Returns the session's current URL.
	pub async fn current_url(&self) -> Result<String> {
		let driver = self.driver()?;
		self.bounded("read current url".to_string(), driver.current_url()).await
	}

	/// Returns how many elements currently match `locator`.
	pub async fn elements_matching(&self, locator: &Locator) -> Result<usize> {
		let driver = self.driver()?;
		self.bounded(format!("count {locator}"), driver.count_matching(locator)).await
	}

	fn driver(&self) -> Result<&dyn Driver> {
		self.driver.as_deref().ok_or(HarnessError::NoActiveSession)
	}

	async fn bounded<T>(&self, operation: String, fut: impl Future<Output = Result<T>>) -> Result<T> {
		let ms = self.config.wait_budget_ms;
		match tokio::time::timeout(Duration::from_millis(ms), fut).await {
			Ok(result) => result,
			Err(_) => Err(HarnessError::Timeout { ms, operation }),
		}
	}
}
