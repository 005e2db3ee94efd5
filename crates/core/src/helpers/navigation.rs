use crate::config::ViewportPolicy;
use crate::error::Result;
use crate::locator::storefront;
use crate::session::SessionController;

/// Navigation between storefront page areas.
pub struct NavigationHelper<'a> {
	session: &'a SessionController,
}

impl<'a> NavigationHelper<'a> {
	pub(crate) fn new(session: &'a SessionController) -> Self {
		Self { session }
	}

	/// Opens the storefront root and applies the configured viewport.
	///
	/// Viewport ordering relative to navigation is configuration
	/// ([`ViewportPolicy`]); both orders produce the same final page
	/// state.
	pub async fn open_home(&self) -> Result<()> {
		let config = self.session.config();
		match config.viewport_policy {
			ViewportPolicy::BeforeNavigation => {
				self.session.set_viewport(config.viewport).await?;
				self.session.navigate(&config.base_url).await
			}
			ViewportPolicy::AfterNavigation => {
				self.session.navigate(&config.base_url).await?;
				self.session.set_viewport(config.viewport).await
			}
		}
	}

	/// Opens the cart page via the cart link.
	pub async fn open_cart(&self) -> Result<()> {
		self.session.click(&storefront::cart_link()).await
	}
}
