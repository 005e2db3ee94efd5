use thiserror::Error;

use crate::locator::Locator;

pub type Result<T> = std::result::Result<T, HarnessError>;

/// Error taxonomy for the harness.
///
/// Helpers and the session controller never catch-and-continue: every
/// variant propagates to the scenario body, which terminates that
/// scenario. Teardown-time errors are logged by the caller and never
/// shadow the original failure.
#[derive(Debug, Error)]
pub enum HarnessError {
	/// The browser session could not be created (driver unreachable,
	/// port conflict, bad capabilities). Fatal to the affected
	/// scenario, not to the whole run.
	#[error("session start failed: {source}")]
	SessionStart {
		#[source]
		source: anyhow::Error,
	},

	/// A component was used outside its valid lifecycle state.
	/// Programming error; fails loudly instead of silently no-oping.
	#[error("illegal state: {0}")]
	IllegalState(String),

	/// A session query or interaction was issued with no live session.
	#[error("no active browser session")]
	NoActiveSession,

	/// The locator matched nothing within the wait budget.
	#[error("element not found: {locator}")]
	ElementNotFound { locator: Locator },

	/// An interaction exceeded its wait budget. Kept distinct from
	/// [`HarnessError::ElementNotFound`] for diagnostics.
	#[error("timeout after {ms}ms during: {operation}")]
	Timeout { ms: u64, operation: String },

	/// An expected outcome was not observed. The terminal signal
	/// consumers read from a scenario.
	#[error("assertion failed: {0}")]
	Assertion(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// Driver failure that maps to no more specific variant.
	#[error(transparent)]
	Driver(#[from] anyhow::Error),
}

impl HarnessError {
	/// Wraps an arbitrary driver/connector error as a session-start failure.
	pub fn session_start<E>(source: E) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		HarnessError::SessionStart {
			source: anyhow::Error::new(source),
		}
	}

	pub fn illegal_state(message: impl Into<String>) -> Self {
		HarnessError::IllegalState(message.into())
	}

	/// True when this failure is an assertion outcome rather than an
	/// infrastructure or scripting error.
	pub fn is_assertion(&self) -> bool {
		matches!(self, HarnessError::Assertion(_))
	}
}
