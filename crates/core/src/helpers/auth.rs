use tracing::debug;

use crate::error::Result;
use crate::fixtures::Credential;
use crate::locator::storefront;
use crate::session::SessionController;

/// Login-form interactions.
pub struct AuthHelper<'a> {
	session: &'a SessionController,
}

impl<'a> AuthHelper<'a> {
	pub(crate) fn new(session: &'a SessionController) -> Self {
		Self { session }
	}

	/// Drives the username field, password field, and submit control
	/// in that fixed order.
	///
	/// Each field is clicked before typing to mirror real user
	/// behavior and avoid stale-focus issues. Outcome assertion is a
	/// scenario responsibility; a rejected login is not an error here.
	pub async fn login(&self, credential: &Credential) -> Result<()> {
		debug!(target = "cartwright.auth", username = %credential.username, "submitting login form");

		let username = storefront::username_field();
		self.session.click(&username).await?;
		self.session.type_text(&username, &credential.username).await?;

		let password = storefront::password_field();
		self.session.click(&password).await?;
		self.session.type_text(&password, credential.secret()).await?;

		self.session.click(&storefront::login_button()).await
	}
}
