//! Assertion primitives.
//!
//! Each primitive raises [`HarnessError::Assertion`] without
//! terminating the process; scenarios fail fast by propagating it with
//! `?`, and the run driver records the failure without aborting
//! sibling scenarios.

use std::fmt::Debug;

use crate::error::{HarnessError, Result};

/// Fails with an assertion error unless `condition` holds.
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<()> {
	if condition {
		Ok(())
	} else {
		Err(HarnessError::Assertion(message.into()))
	}
}

/// Fails unless `actual == expected`, reporting both values.
pub fn ensure_eq<T>(actual: T, expected: T, message: impl Into<String>) -> Result<()>
where
	T: PartialEq + Debug,
{
	if actual == expected {
		Ok(())
	} else {
		Err(HarnessError::Assertion(format!(
			"{}: expected {expected:?}, got {actual:?}",
			message.into()
		)))
	}
}

/// Fails unless `haystack` contains `needle`.
pub fn ensure_contains(haystack: &str, needle: &str, message: impl Into<String>) -> Result<()> {
	if haystack.contains(needle) {
		Ok(())
	} else {
		Err(HarnessError::Assertion(format!(
			"{}: {needle:?} not found in {haystack:?}",
			message.into()
		)))
	}
}
