//! cartwright: browser-driven end-to-end test harness for web storefronts.
//!
//! The harness automates login, cart-add, and cart-remove flows and
//! asserts on resulting page state. Scenarios depend on a single
//! [`ApplicationManager`] handle that owns one browser session and
//! exposes capability-scoped helpers; the run driver owns lifecycle so
//! the session is released on every exit path.
//!
//! # Example
//!
//! ```ignore
//! use cartwright::{AppConfig, ApplicationManager, run_suite, scenarios};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let suite = scenarios::builtin_suite();
//!     let report = run_suite(&suite, || ApplicationManager::new(config.clone())).await;
//!     assert!(report.is_success());
//! }
//! ```
//!
//! Scenario bodies never touch the driver; they compose helper calls
//! and assert observable outcomes:
//!
//! ```ignore
//! use cartwright::check::ensure_contains;
//!
//! app.navigation()?.open_home().await?;
//! app.auth()?.login(&credential).await?;
//! ensure_contains(&app.current_url().await?, "/inventory.html", "landing url")?;
//! ```

mod app;
mod session;

pub mod check;
pub mod config;
pub mod driver;
pub mod error;
pub mod fixtures;
pub mod helpers;
pub mod locator;
pub mod runner;
pub mod scenarios;
pub mod testing;

pub use app::{AppState, ApplicationManager};
pub use config::{AppConfig, Viewport, ViewportPolicy};
pub use driver::BrowserKind;
pub use error::{HarnessError, Result};
pub use fixtures::{Credential, ProductRef};
pub use locator::{Locator, Strategy};
pub use runner::{RunReport, Scenario, ScenarioOutcome, ScenarioStatus, run_suite};
pub use session::SessionController;
