//! WebDriver-backed driver implementation.

use async_trait::async_trait;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tracing::debug;

use super::{BrowserKind, Driver, DriverConnector, Element};
use crate::config::AppConfig;
use crate::error::{HarnessError, Result};
use crate::locator::{Locator, Strategy};

/// Production connector speaking the W3C WebDriver protocol through
/// `fantoccini`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebDriverConnector;

#[async_trait]
impl DriverConnector for WebDriverConnector {
	async fn connect(&self, config: &AppConfig) -> Result<Box<dyn Driver>> {
		debug!(
			target = "cartwright.driver",
			endpoint = %config.webdriver_url,
			browser = %config.browser,
			headless = config.headless,
			"creating webdriver session"
		);

		let client = ClientBuilder::native()
			.capabilities(capabilities(config.browser, config.headless))
			.connect(&config.webdriver_url)
			.await
			.map_err(HarnessError::session_start)?;

		Ok(Box::new(WebDriverSession { client }))
	}
}

/// Builds W3C capabilities for the requested engine.
fn capabilities(browser: BrowserKind, headless: bool) -> serde_json::Map<String, serde_json::Value> {
	let mut caps = serde_json::Map::new();
	match browser {
		BrowserKind::Firefox => {
			caps.insert("browserName".to_string(), json!("firefox"));
			let args: Vec<&str> = if headless { vec!["-headless"] } else { Vec::new() };
			caps.insert("moz:firefoxOptions".to_string(), json!({ "args": args }));
		}
		BrowserKind::Chromium => {
			caps.insert("browserName".to_string(), json!("chrome"));
			let mut args = vec!["--disable-gpu", "--disable-dev-shm-usage"];
			if headless {
				args.push("--headless=new");
			}
			caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
		}
	}
	caps
}

struct WebDriverSession {
	client: Client,
}

fn wire_locator(locator: &Locator) -> fantoccini::Locator<'_> {
	match locator.strategy {
		Strategy::Css => fantoccini::Locator::Css(&locator.value),
	}
}

/// Maps a driver-level failure into the harness taxonomy.
///
/// `NoSuchElement` carries the locator so scenario failures name the
/// selector that missed; everything else passes through as an opaque
/// driver error.
fn map_cmd_error(err: CmdError, locator: Option<&Locator>) -> HarnessError {
	match (err, locator) {
		(CmdError::NoSuchElement(_), Some(locator)) => HarnessError::ElementNotFound {
			locator: locator.clone(),
		},
		(err, _) => HarnessError::Driver(anyhow::Error::new(err)),
	}
}

#[async_trait]
impl Driver for WebDriverSession {
	async fn navigate(&self, url: &str) -> Result<()> {
		self.client.goto(url).await.map_err(|e| map_cmd_error(e, None))
	}

	async fn find(&self, locator: &Locator) -> Result<Box<dyn Element + '_>> {
		let element = self
			.client
			.find(wire_locator(locator))
			.await
			.map_err(|e| map_cmd_error(e, Some(locator)))?;
		Ok(Box::new(WebDriverElement { element, locator: locator.clone() }))
	}

	async fn count_matching(&self, locator: &Locator) -> Result<usize> {
		let elements = self
			.client
			.find_all(wire_locator(locator))
			.await
			.map_err(|e| map_cmd_error(e, Some(locator)))?;
		Ok(elements.len())
	}

	async fn current_url(&self) -> Result<String> {
		let url = self.client.current_url().await.map_err(|e| map_cmd_error(e, None))?;
		Ok(url.to_string())
	}

	async fn set_window_size(&self, width: u32, height: u32) -> Result<()> {
		self.client
			.set_window_size(width, height)
			.await
			.map_err(|e| map_cmd_error(e, None))
	}

	async fn close(self: Box<Self>) -> Result<()> {
		self.client.close().await.map_err(|e| map_cmd_error(e, None))
	}
}

struct WebDriverElement {
	element: fantoccini::elements::Element,
	locator: Locator,
}

#[async_trait]
impl Element for WebDriverElement {
	async fn click(&self) -> Result<()> {
		self.element
			.click()
			.await
			.map_err(|e| map_cmd_error(e, Some(&self.locator)))
	}

	async fn clear(&self) -> Result<()> {
		self.element
			.clear()
			.await
			.map_err(|e| map_cmd_error(e, Some(&self.locator)))
	}

	async fn type_text(&self, text: &str) -> Result<()> {
		self.element
			.send_keys(text)
			.await
			.map_err(|e| map_cmd_error(e, Some(&self.locator)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn firefox_capabilities_include_headless_arg() {
		let caps = capabilities(BrowserKind::Firefox, true);
		assert_eq!(caps["browserName"], json!("firefox"));
		assert_eq!(caps["moz:firefoxOptions"]["args"], json!(["-headless"]));
	}

	#[test]
	fn headful_firefox_passes_no_args() {
		let caps = capabilities(BrowserKind::Firefox, false);
		assert_eq!(caps["moz:firefoxOptions"]["args"], json!([]));
	}

	#[test]
	fn chromium_capabilities_use_chrome_options() {
		let caps = capabilities(BrowserKind::Chromium, true);
		assert_eq!(caps["browserName"], json!("chrome"));
		let args = caps["goog:chromeOptions"]["args"].as_array().unwrap();
		assert!(args.contains(&json!("--headless=new")));
	}
}
