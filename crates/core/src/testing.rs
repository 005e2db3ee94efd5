//! Test doubles for the driver boundary.
//!
//! Provides a scripted in-memory driver so session, helper, and
//! scenario logic can be exercised without spawning a browser.
//!
//! [`MockDriver`] holds per-locator element counts and a current URL.
//! Clicks can be scripted with [`MockEffect`]s to model page-state
//! transitions (the storefront swapping an add control for a remove
//! control, a submit click navigating to the inventory page). Every
//! interaction is recorded as a [`MockAction`] for sequence assertions.
//!
//! # Example
//!
//! ```ignore
//! use cartwright::Locator;
//! use cartwright::testing::{MockConnector, MockDriver, MockEffect};
//!
//! let driver = MockDriver::new();
//! driver.set_count(&Locator::data_test("login-button"), 1);
//! driver.on_click(
//! 	&Locator::data_test("login-button"),
//! 	vec![MockEffect::SetUrl("https://shop.test/inventory.html".into())],
//! );
//! let connector = MockConnector::new(driver);
//! // hand the connector to an ApplicationManager...
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::driver::{Driver, DriverConnector, Element};
use crate::error::{HarnessError, Result};
use crate::locator::Locator;

/// Interaction recorded by [`MockDriver`] for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum MockAction {
	Navigate { url: String },
	Click { locator: Locator },
	Clear { locator: Locator },
	Type { locator: Locator, text: String },
	SetWindowSize { width: u32, height: u32 },
	Close,
}

/// Scripted page-state transition applied when an element is clicked.
#[derive(Debug, Clone)]
pub enum MockEffect {
	/// The click navigates; subsequent `current_url` reads see this value.
	SetUrl(String),
	/// The click changes how many elements another locator matches.
	AdjustCount { locator: Locator, delta: i64 },
	/// The clicked control disappears from the page.
	RemoveTarget,
	/// The click never completes (for wait-budget tests).
	Hang,
}

#[derive(Default)]
struct MockState {
	url: String,
	counts: HashMap<Locator, usize>,
	click_effects: HashMap<Locator, Vec<MockEffect>>,
	actions: Vec<MockAction>,
	close_count: usize,
	hang_on_close: bool,
}

/// Scripted in-memory driver.
///
/// Cheap to clone; clones share state, so tests keep a [`handle`]
/// clone for assertions after the driver has been handed to a
/// connector.
///
/// [`handle`]: MockDriver::handle
#[derive(Clone, Default)]
pub struct MockDriver {
	state: Arc<Mutex<MockState>>,
}

impl MockDriver {
	/// Creates a driver with no elements, at an empty URL.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a handle sharing this driver's state.
	pub fn handle(&self) -> Self {
		self.clone()
	}

	/// Sets the current URL.
	pub fn set_url(&self, url: &str) {
		self.state.lock().unwrap().url = url.to_string();
	}

	/// Sets how many elements match `locator`.
	pub fn set_count(&self, locator: &Locator, count: usize) {
		self.state.lock().unwrap().counts.insert(locator.clone(), count);
	}

	/// Scripts the page-state transition applied when `locator` is
	/// clicked.
	pub fn on_click(&self, locator: &Locator, effects: Vec<MockEffect>) {
		self.state
			.lock()
			.unwrap()
			.click_effects
			.insert(locator.clone(), effects);
	}

	/// Scripts `close` to never complete, for teardown wait-budget
	/// tests.
	pub fn hang_on_close(&self) {
		self.state.lock().unwrap().hang_on_close = true;
	}

	/// Returns all recorded interactions.
	pub fn actions(&self) -> Vec<MockAction> {
		self.state.lock().unwrap().actions.clone()
	}

	/// Returns how many times the session was closed.
	pub fn close_count(&self) -> usize {
		self.state.lock().unwrap().close_count
	}

	/// Returns the current scripted count for `locator`.
	pub fn count(&self, locator: &Locator) -> usize {
		self.state.lock().unwrap().counts.get(locator).copied().unwrap_or(0)
	}

	fn record(&self, action: MockAction) {
		self.state.lock().unwrap().actions.push(action);
	}

	fn is_present(&self, locator: &Locator) -> bool {
		self.count(locator) > 0
	}

	fn apply_click(&self, locator: &Locator) -> Option<MockEffect> {
		let mut state = self.state.lock().unwrap();
		let effects = state.click_effects.get(locator).cloned().unwrap_or_default();
		for effect in effects {
			match effect {
				MockEffect::SetUrl(url) => state.url = url,
				MockEffect::AdjustCount { locator, delta } => {
					let count = state.counts.entry(locator).or_insert(0);
					*count = count.saturating_add_signed(delta as isize);
				}
				MockEffect::RemoveTarget => {
					state.counts.insert(locator.clone(), 0);
				}
				MockEffect::Hang => return Some(MockEffect::Hang),
			}
		}
		None
	}
}

#[async_trait]
impl Driver for MockDriver {
	async fn navigate(&self, url: &str) -> Result<()> {
		self.set_url(url);
		self.record(MockAction::Navigate { url: url.to_string() });
		Ok(())
	}

	async fn find(&self, locator: &Locator) -> Result<Box<dyn Element + '_>> {
		if !self.is_present(locator) {
			return Err(HarnessError::ElementNotFound {
				locator: locator.clone(),
			});
		}
		Ok(Box::new(MockElement {
			driver: self.clone(),
			locator: locator.clone(),
		}))
	}

	async fn count_matching(&self, locator: &Locator) -> Result<usize> {
		Ok(self.count(locator))
	}

	async fn current_url(&self) -> Result<String> {
		Ok(self.state.lock().unwrap().url.clone())
	}

	async fn set_window_size(&self, width: u32, height: u32) -> Result<()> {
		self.record(MockAction::SetWindowSize { width, height });
		Ok(())
	}

	async fn close(self: Box<Self>) -> Result<()> {
		let hang = self.state.lock().unwrap().hang_on_close;
		if hang {
			std::future::pending::<()>().await;
		}
		self.record(MockAction::Close);
		self.state.lock().unwrap().close_count += 1;
		Ok(())
	}
}

struct MockElement {
	driver: MockDriver,
	locator: Locator,
}

#[async_trait]
impl Element for MockElement {
	async fn click(&self) -> Result<()> {
		// The element reference goes stale if a prior effect removed it.
		if !self.driver.is_present(&self.locator) {
			return Err(HarnessError::ElementNotFound {
				locator: self.locator.clone(),
			});
		}
		self.driver.record(MockAction::Click {
			locator: self.locator.clone(),
		});
		if let Some(MockEffect::Hang) = self.driver.apply_click(&self.locator) {
			std::future::pending::<()>().await;
		}
		Ok(())
	}

	async fn clear(&self) -> Result<()> {
		self.driver.record(MockAction::Clear {
			locator: self.locator.clone(),
		});
		Ok(())
	}

	async fn type_text(&self, text: &str) -> Result<()> {
		self.driver.record(MockAction::Type {
			locator: self.locator.clone(),
			text: text.to_string(),
		});
		Ok(())
	}
}

/// Connector yielding a pre-scripted [`MockDriver`], or failing to
/// connect at all.
pub struct MockConnector {
	driver: MockDriver,
	failure: Option<String>,
}

impl MockConnector {
	pub fn new(driver: MockDriver) -> Self {
		Self { driver, failure: None }
	}

	/// Connector whose every `connect` fails, for session-start error
	/// paths.
	pub fn failing(message: impl Into<String>) -> Self {
		Self {
			driver: MockDriver::new(),
			failure: Some(message.into()),
		}
	}
}

#[async_trait]
impl DriverConnector for MockConnector {
	async fn connect(&self, _config: &AppConfig) -> Result<Box<dyn Driver>> {
		match &self.failure {
			Some(message) => Err(HarnessError::SessionStart {
				source: anyhow::anyhow!("{message}"),
			}),
			None => Ok(Box::new(self.driver.clone())),
		}
	}
}
