//! Driver boundary.
//!
//! The underlying browser-automation driver is consumed through these
//! object-safe traits so the dependency stays singular and swappable:
//! production code talks WebDriver through [`webdriver::WebDriverConnector`],
//! tests inject the scripted driver from [`crate::testing`]. Nothing
//! above the session controller touches a driver directly.

pub mod webdriver;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::Result;
use crate::locator::Locator;

/// Browser engine requested from the driver endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
	/// Mozilla Firefox (the engine the original flows were recorded with).
	#[default]
	Firefox,
	/// Chromium-based browser (Chrome, Edge).
	Chromium,
}

impl fmt::Display for BrowserKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BrowserKind::Firefox => write!(f, "firefox"),
			BrowserKind::Chromium => write!(f, "chromium"),
		}
	}
}

impl FromStr for BrowserKind {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"firefox" => Ok(BrowserKind::Firefox),
			"chromium" | "chrome" => Ok(BrowserKind::Chromium),
			other => Err(format!("unsupported browser: {other}")),
		}
	}
}

/// A single element resolved from the current page.
#[async_trait]
pub trait Element: Send + Sync {
	/// Clicks the element.
	async fn click(&self) -> Result<()>;

	/// Clears any existing input value.
	async fn clear(&self) -> Result<()>;

	/// Types `text` into the element.
	async fn type_text(&self, text: &str) -> Result<()>;
}

/// A live browser session.
///
/// All methods are potentially suspending network-bound calls; the
/// session controller wraps each one in the configured wait budget.
#[async_trait]
pub trait Driver: Send + Sync {
	/// Navigates the session to `url`.
	async fn navigate(&self, url: &str) -> Result<()>;

	/// Resolves the first element matching `locator`, or
	/// [`HarnessError::ElementNotFound`](crate::HarnessError::ElementNotFound).
	async fn find(&self, locator: &Locator) -> Result<Box<dyn Element + '_>>;

	/// Returns how many elements currently match `locator`.
	async fn count_matching(&self, locator: &Locator) -> Result<usize>;

	/// Returns the session's current URL.
	async fn current_url(&self) -> Result<String>;

	/// Resizes the browser window.
	async fn set_window_size(&self, width: u32, height: u32) -> Result<()>;

	/// Releases the session.
	async fn close(self: Box<Self>) -> Result<()>;
}

/// Creates driver sessions from harness configuration.
///
/// The seam between session lifecycle and the concrete automation
/// backend; the application manager is handed one connector and never
/// learns which backend it speaks to.
#[async_trait]
pub trait DriverConnector: Send + Sync {
	async fn connect(&self, config: &AppConfig) -> Result<Box<dyn Driver>>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn browser_kind_parses_aliases() {
		assert_eq!("firefox".parse::<BrowserKind>().unwrap(), BrowserKind::Firefox);
		assert_eq!("Chrome".parse::<BrowserKind>().unwrap(), BrowserKind::Chromium);
		assert_eq!("chromium".parse::<BrowserKind>().unwrap(), BrowserKind::Chromium);
		assert!("safari".parse::<BrowserKind>().is_err());
	}

	#[test]
	fn browser_kind_display_round_trips() {
		for kind in [BrowserKind::Firefox, BrowserKind::Chromium] {
			assert_eq!(kind.to_string().parse::<BrowserKind>().unwrap(), kind);
		}
	}
}
