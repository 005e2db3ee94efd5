use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::driver::BrowserKind;
use crate::error::Result;

/// Browser viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
	pub width: u32,
	pub height: u32,
}

impl Default for Viewport {
	fn default() -> Self {
		// The window geometry the original storefront scripts were
		// recorded with.
		Self { width: 1209, height: 830 }
	}
}

/// When the configured viewport is applied relative to the first
/// navigation.
///
/// The source scripts disagree on the ordering; both are assumed
/// behaviorally equivalent, so the choice is configuration rather than
/// a code variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportPolicy {
	#[default]
	BeforeNavigation,
	AfterNavigation,
}

/// Fully owned harness configuration.
///
/// This is the stable handoff between the run driver and the
/// application manager; all fields have storefront defaults so a bare
/// `AppConfig::default()` targets the public demo storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Storefront root the navigation helper opens.
	pub base_url: String,
	/// WebDriver endpoint sessions are created against.
	pub webdriver_url: String,
	/// Browser engine requested from the driver.
	pub browser: BrowserKind,
	/// Whether the browser runs headless.
	pub headless: bool,
	/// Viewport applied when opening the storefront.
	pub viewport: Viewport,
	/// Whether the viewport is applied before or after navigation.
	pub viewport_policy: ViewportPolicy,
	/// Upper bound for any single browser interaction, in milliseconds.
	/// A hang surfaces as a timeout instead of stalling the run.
	pub wait_budget_ms: u64,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			base_url: "https://www.saucedemo.com/".to_string(),
			webdriver_url: "http://localhost:4444".to_string(),
			browser: BrowserKind::default(),
			headless: true,
			viewport: Viewport::default(),
			viewport_policy: ViewportPolicy::default(),
			wait_budget_ms: 30_000,
		}
	}
}

impl AppConfig {
	/// Loads configuration from a JSON file; absent fields fall back
	/// to defaults.
	pub fn from_file(path: &Path) -> Result<Self> {
		let raw = std::fs::read_to_string(path)?;
		Ok(serde_json::from_str(&raw)?)
	}
}
