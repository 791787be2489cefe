//! # Users
//!
//! Customers of the library and their budgets.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`User`](crate::model::User)
//! - [`error`] - [`UserError`] type for type-safe error handling
//!
//! Budgets change only through [`UserAction`], so a failed spend leaves the
//! stored user exactly as it was.

pub mod entity;
pub mod error;

pub use entity::UserAction;
pub use error::*;
