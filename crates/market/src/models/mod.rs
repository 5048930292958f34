//! Domain types for the marketplace.

pub mod menu;
pub mod store;
pub mod user;

pub use menu::Menu;
pub use store::{NewStore, Store, StoreSearchFilter};
pub use user::{AuthUser, User};
