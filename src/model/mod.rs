//! Pure data structures (DTOs) implementing the [`Entity`](crate::framework::Entity) trait.

pub mod product;
pub mod purchase;
pub mod user;

pub use product::*;
pub use purchase::*;
pub use user::*;
