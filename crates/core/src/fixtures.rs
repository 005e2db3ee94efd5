//! Immutable value objects describing test fixtures.

use std::fmt;

use crate::locator::Locator;

/// Login credential, created per scenario and never persisted.
///
/// The secret is redacted from `Debug` output so credentials cannot
/// leak through error dumps or structured logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
	pub username: String,
	secret: String,
}

impl Credential {
	pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			secret: secret.into(),
		}
	}

	pub fn secret(&self) -> &str {
		&self.secret
	}
}

impl fmt::Debug for Credential {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credential")
			.field("username", &self.username)
			.field("secret", &"<redacted>")
			.finish()
	}
}

/// Identity of a catalog item for cart operations.
///
/// Only `name` is used operationally; the price hint exists for
/// scenario bookkeeping and future price assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRef {
	pub name: String,
	pub price_hint: Option<f64>,
}

impl ProductRef {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			price_hint: None,
		}
	}

	pub fn with_price_hint(mut self, price: f64) -> Self {
		self.price_hint = Some(price);
		self
	}

	/// Locator of this product's add-to-cart control.
	pub fn add_to_cart_locator(&self) -> Locator {
		Locator::data_test(&format!("add-to-cart-{}", self.slug()))
	}

	/// Locator of this product's remove-from-cart control.
	pub fn remove_locator(&self) -> Locator {
		Locator::data_test(&format!("remove-{}", self.slug()))
	}

	/// Storefront control ids are the lowercased product name with
	/// spaces collapsed to hyphens.
	fn slug(&self) -> String {
		self.name
			.trim()
			.to_lowercase()
			.split_whitespace()
			.collect::<Vec<_>>()
			.join("-")
	}
}
