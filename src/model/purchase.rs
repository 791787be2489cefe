//! Records that a user bought a product.
//!
//! A purchase only names the user and product by ID. It never owns them, and
//! the IDs are checked against the library only when the purchase is made.

use crate::model::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Purchases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseId(String);

impl PurchaseId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PurchaseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PurchaseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for PurchaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(rename = "ID")]
    pub id: PurchaseId,
    #[serde(rename = "User")]
    pub user_id: UserId,
    #[serde(rename = "Product")]
    pub product_id: ProductId,
}

/// Payload for recording a purchase.
#[derive(Debug, Clone)]
pub struct PurchaseCreate {
    pub user_id: UserId,
    pub product_id: ProductId,
}

impl Purchase {
    /// Creates a new Purchase instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the store)
    /// * `user_id` - ID of the buying user
    /// * `product_id` - ID of the product bought
    pub fn new(id: PurchaseId, user_id: UserId, product_id: ProductId) -> Self {
        Self {
            id,
            user_id,
            product_id,
        }
    }
}
