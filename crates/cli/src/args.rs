//! Command-line surface of the run driver.

use std::path::PathBuf;

use cartwright::{AppConfig, BrowserKind, Viewport, ViewportPolicy};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "cartwright", about = "Storefront end-to-end harness runner", version)]
pub struct Cli {
	/// WebDriver endpoint to create sessions against.
	#[arg(long)]
	pub webdriver_url: Option<String>,

	/// Browser engine (firefox, chromium).
	#[arg(long, value_parser = parse_browser)]
	pub browser: Option<BrowserKind>,

	/// Storefront root URL.
	#[arg(long)]
	pub base_url: Option<String>,

	/// Run the browser with a visible window.
	#[arg(long)]
	pub headful: bool,

	/// Viewport dimensions, e.g. 1209x830.
	#[arg(long, value_parser = parse_viewport)]
	pub viewport: Option<Viewport>,

	/// Apply the viewport after the first navigation instead of before.
	#[arg(long)]
	pub viewport_after_nav: bool,

	/// Wait budget per browser interaction, in milliseconds.
	#[arg(long)]
	pub wait_budget: Option<u64>,

	/// Harness configuration file (JSON); flags override its values.
	#[arg(long)]
	pub config: Option<PathBuf>,

	/// Verbosity (-v, -vv).
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Run only scenarios whose name contains one of these substrings.
	pub filters: Vec<String>,
}

impl Cli {
	/// Resolves the effective harness configuration: file (or
	/// defaults), then explicit flag overrides.
	pub fn resolve_config(&self) -> anyhow::Result<AppConfig> {
		let mut config = match &self.config {
			Some(path) => AppConfig::from_file(path)?,
			None => AppConfig::default(),
		};

		if let Some(url) = &self.webdriver_url {
			config.webdriver_url = url.clone();
		}
		if let Some(browser) = self.browser {
			config.browser = browser;
		}
		if let Some(base_url) = &self.base_url {
			config.base_url = base_url.clone();
		}
		if self.headful {
			config.headless = false;
		}
		if let Some(viewport) = self.viewport {
			config.viewport = viewport;
		}
		if self.viewport_after_nav {
			config.viewport_policy = ViewportPolicy::AfterNavigation;
		}
		if let Some(ms) = self.wait_budget {
			config.wait_budget_ms = ms;
		}

		Ok(config)
	}

	/// True when `name` survives the scenario filters.
	pub fn matches_filter(&self, name: &str) -> bool {
		if self.filters.is_empty() {
			return true;
		}
		let name = name.to_lowercase();
		self.filters.iter().any(|f| name.contains(&f.to_lowercase()))
	}
}

fn parse_browser(s: &str) -> Result<BrowserKind, String> {
	s.parse()
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
	let (width, height) = s
		.split_once(['x', 'X'])
		.ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
	let width = width.trim().parse().map_err(|_| format!("bad width in {s:?}"))?;
	let height = height.trim().parse().map_err(|_| format!("bad height in {s:?}"))?;
	Ok(Viewport { width, height })
}
