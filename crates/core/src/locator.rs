use std::fmt;

/// Strategy used to resolve elements within the current page.
///
/// Only CSS is exercised by the built-in storefront suite; the enum is
/// non-exhaustive so additional strategies can be added without
/// breaking consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Strategy {
	Css,
}

/// Opaque description of where to find one or more elements.
///
/// Passed by value, never mutated. The harness treats the value as a
/// driver-side query and does not parse it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
	pub strategy: Strategy,
	pub value: String,
}

impl Locator {
	/// Creates a CSS locator.
	pub fn css(value: impl Into<String>) -> Self {
		Self {
			strategy: Strategy::Css,
			value: value.into(),
		}
	}

	/// Creates a CSS locator matching a `data-test` attribute value,
	/// the convention the storefront uses to tag interactive controls.
	pub fn data_test(value: &str) -> Self {
		Self::css(format!("*[data-test=\"{value}\"]"))
	}
}

impl fmt::Display for Locator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.strategy {
			Strategy::Css => write!(f, "css={}", self.value),
		}
	}
}

/// Well-known storefront locators.
///
/// Per-product add/remove controls are derived from the product name
/// (see [`crate::fixtures::ProductRef`]), never hard-coded in helpers.
pub mod storefront {
	use super::Locator;

	pub fn username_field() -> Locator {
		Locator::data_test("username")
	}

	pub fn password_field() -> Locator {
		Locator::data_test("password")
	}

	pub fn login_button() -> Locator {
		Locator::data_test("login-button")
	}

	pub fn login_error() -> Locator {
		Locator::data_test("error")
	}

	pub fn cart_link() -> Locator {
		Locator::data_test("shopping-cart-link")
	}

	pub fn cart_item() -> Locator {
		Locator::css(".cart_item")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn data_test_locator_formats_attribute_selector() {
		let locator = Locator::data_test("login-button");
		assert_eq!(locator.value, "*[data-test=\"login-button\"]");
		assert_eq!(locator.strategy, Strategy::Css);
	}

	#[test]
	fn display_includes_strategy_prefix() {
		assert_eq!(Locator::css(".cart_item").to_string(), "css=.cart_item");
	}
}
