//! Represents a registered library customer.
//!
//! # Resource Framework
//! This struct implements the [`Entity`](crate::framework::Entity) trait,
//! allowing it to be managed by a [`ResourceStore`](crate::framework::ResourceStore).
//!
//! See [`impl Entity for User`](#impl-Entity-for-User) for details on:
//! - Creation parameters ([`UserCreate`])
//! - Budget actions ([`UserAction`](crate::users::UserAction))

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generates a random, opaque identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: UserId,
    #[serde(rename = "Name")]
    pub name: String,
    /// Never negative.
    #[serde(rename = "Budget")]
    pub budget: f64,
}

impl User {
    /// Creates a new User with an empty budget.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the store)
    /// * `name` - User's display name
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            budget: 0.0,
        }
    }
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
}
