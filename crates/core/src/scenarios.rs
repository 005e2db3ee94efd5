//! Built-in storefront scenario suite.
//!
//! Scenario bodies call only through the application manager and
//! assert observable outcomes: the browser URL and cart element
//! counts. Failures propagate immediately; the run driver records them
//! and moves on to the next scenario.

use async_trait::async_trait;

use crate::app::ApplicationManager;
use crate::check::{ensure, ensure_contains, ensure_eq};
use crate::error::Result;
use crate::fixtures::{Credential, ProductRef};
use crate::locator::storefront;
use crate::runner::Scenario;

/// Path the storefront lands on after a successful login.
pub const INVENTORY_PATH: &str = "/inventory.html";

/// The storefront's well-known demo account.
pub fn standard_credential() -> Credential {
	Credential::new("standard_user", "secret_sauce")
}

/// Default product pair used by the cart scenarios.
pub fn default_products() -> Vec<ProductRef> {
	vec![
		ProductRef::new("Sauce Labs Backpack").with_price_hint(29.99),
		ProductRef::new("Sauce Labs Bike Light").with_price_hint(9.99),
	]
}

/// Valid login lands on the inventory page.
pub struct LoginScenario {
	credential: Credential,
}

impl LoginScenario {
	pub fn new(credential: Credential) -> Self {
		Self { credential }
	}
}

impl Default for LoginScenario {
	fn default() -> Self {
		Self::new(standard_credential())
	}
}

#[async_trait]
impl Scenario for LoginScenario {
	fn name(&self) -> &str {
		"login lands on inventory"
	}

	async fn run(&self, app: &ApplicationManager) -> Result<()> {
		app.navigation()?.open_home().await?;
		app.auth()?.login(&self.credential).await?;

		let url = app.current_url().await?;
		ensure_contains(&url, INVENTORY_PATH, "post-login url")?;
		// Guard against a redirect loop appending the landing path twice.
		ensure_eq(url.matches(INVENTORY_PATH).count(), 1, "landing path occurrences")
	}
}

/// Rejected login stays on the login page and shows the error banner.
///
/// Asserting the rejection explicitly makes a false PASS impossible:
/// if the storefront accepted the bad credential, the URL check fails.
pub struct InvalidLoginScenario {
	credential: Credential,
}

impl Default for InvalidLoginScenario {
	fn default() -> Self {
		Self {
			credential: Credential::new("standard_user", "wrong_sauce"),
		}
	}
}

#[async_trait]
impl Scenario for InvalidLoginScenario {
	fn name(&self) -> &str {
		"invalid login is rejected"
	}

	async fn run(&self, app: &ApplicationManager) -> Result<()> {
		app.navigation()?.open_home().await?;
		app.auth()?.login(&self.credential).await?;

		let url = app.current_url().await?;
		ensure(!url.contains(INVENTORY_PATH), "rejected login must not reach inventory")?;
		let banners = app.elements_matching(&storefront::login_error()).await?;
		ensure_eq(banners, 1, "login error banner")
	}
}

/// Adding N distinct products yields a cart with N rows.
pub struct AddToCartScenario {
	credential: Credential,
	products: Vec<ProductRef>,
}

impl AddToCartScenario {
	pub fn new(credential: Credential, products: Vec<ProductRef>) -> Self {
		Self { credential, products }
	}
}

impl Default for AddToCartScenario {
	fn default() -> Self {
		Self::new(standard_credential(), default_products())
	}
}

#[async_trait]
impl Scenario for AddToCartScenario {
	fn name(&self) -> &str {
		"added products appear in cart"
	}

	async fn run(&self, app: &ApplicationManager) -> Result<()> {
		app.navigation()?.open_home().await?;
		app.auth()?.login(&self.credential).await?;

		for product in &self.products {
			app.products()?.add_to_cart(&product.add_to_cart_locator()).await?;
		}
		app.navigation()?.open_cart().await?;

		let rows = app.elements_matching(&storefront::cart_item()).await?;
		ensure_eq(rows, self.products.len(), "cart row count")
	}
}

/// Removing every added product empties the cart.
pub struct RemoveFromCartScenario {
	credential: Credential,
	products: Vec<ProductRef>,
}

impl Default for RemoveFromCartScenario {
	fn default() -> Self {
		Self {
			credential: standard_credential(),
			products: default_products(),
		}
	}
}

#[async_trait]
impl Scenario for RemoveFromCartScenario {
	fn name(&self) -> &str {
		"removed products leave cart empty"
	}

	async fn run(&self, app: &ApplicationManager) -> Result<()> {
		app.navigation()?.open_home().await?;
		app.auth()?.login(&self.credential).await?;

		for product in &self.products {
			app.products()?.add_to_cart(&product.add_to_cart_locator()).await?;
		}
		app.navigation()?.open_cart().await?;

		let before = app.elements_matching(&storefront::cart_item()).await?;
		ensure_eq(before, self.products.len(), "cart row count before removal")?;

		for product in &self.products {
			app.products()?.remove_from_cart(&product.remove_locator()).await?;
		}

		let after = app.elements_matching(&storefront::cart_item()).await?;
		ensure_eq(after, 0, "cart row count after removal")
	}
}

/// The full built-in suite in execution order.
pub fn builtin_suite() -> Vec<Box<dyn Scenario>> {
	vec![
		Box::new(LoginScenario::default()),
		Box::new(InvalidLoginScenario::default()),
		Box::new(AddToCartScenario::default()),
		Box::new(RemoveFromCartScenario::default()),
	]
}
