//! Product catalogue logic: price validation and the product error type.

pub mod entity;
pub mod error;

pub use error::*;
