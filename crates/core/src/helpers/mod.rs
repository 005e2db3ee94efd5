//! Capability helpers.
//!
//! Each helper scopes one cohesive set of browser interactions to a
//! page-area concern and talks only to the session controller, never
//! to the raw driver. Helpers borrow the controller, so the borrow
//! checker guarantees no helper outlives the session it reaches.

mod auth;
mod navigation;
mod products;

pub use auth::AuthHelper;
pub use navigation::NavigationHelper;
pub use products::ProductsHelper;
