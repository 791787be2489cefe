//! # Library Store
//!
//! A small in-process data store for a library shop: users with budgets,
//! a product catalogue, and purchases, persisted to a single JSON file.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceStore<T>`](framework::ResourceStore), an ID-keyed arena
//! that works for any type implementing [`Entity`](framework::Entity).
//!
//! ### 2. The Data ([`model`])
//! Plain records ([`User`](model::User), [`Product`](model::Product),
//! [`Purchase`](model::Purchase)) and their typed IDs. A purchase refers to its
//! user and product by ID only.
//!
//! ### 3. The Rules ([`users`], [`products`], [`purchases`])
//! `Entity` implementations: budget actions, price validation, and one error
//! enum per entity type.
//!
//! ### 4. The Aggregate ([`library`])
//! [`Library`](library::Library) owns the three stores, mediates every
//! cross-entity operation and runs the load/save cycle.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info LIBRARY_PATH=/tmp/library.json cargo run
//! ```

pub mod framework;
pub mod library;
pub mod model;
pub mod products;
pub mod purchases;
pub mod runtime;
pub mod users;

pub use library::{Library, LibraryConfig, LibraryError, StorageError};
