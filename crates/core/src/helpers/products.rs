use crate::error::Result;
use crate::locator::Locator;
use crate::session::SessionController;

/// Cart-affecting product interactions.
///
/// Product controls are always injected as locators (see
/// [`crate::fixtures::ProductRef`] for deriving them from a product
/// name); the helper never hard-codes a product.
pub struct ProductsHelper<'a> {
	session: &'a SessionController,
}

impl<'a> ProductsHelper<'a> {
	pub(crate) fn new(session: &'a SessionController) -> Self {
		Self { session }
	}

	/// Clicks a per-product add-to-cart control.
	///
	/// Adding a product that is already in the cart fails with
	/// `ElementNotFound`: the storefront swaps the add control for a
	/// remove control, so a stale add locator no longer resolves.
	pub async fn add_to_cart(&self, control: &Locator) -> Result<()> {
		self.session.click(control).await
	}

	/// Clicks a per-product remove control. Removing a product that is
	/// not in the cart fails with `ElementNotFound`.
	pub async fn remove_from_cart(&self, control: &Locator) -> Result<()> {
		self.session.click(control).await
	}
}
