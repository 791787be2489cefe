//! Generic framework for ID-keyed resource collections.
//!
//! This module provides the building blocks the [`Library`](crate::library::Library)
//! uses to own its users, products and purchases.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that record types implement to be managed by a store
//! - [`ResourceStore`] - Generic arena keyed by entity ID

pub mod core;

// Re-export core types for convenience
pub use self::core::*;
