//! Represents an item offered by the library shop.
//!
//! # Resource Framework
//! This struct implements the [`Entity`](crate::framework::Entity) trait,
//! allowing it to be managed by a [`ResourceStore`](crate::framework::ResourceStore).
//!
//! Products are immutable once created. Price and category are validated by
//! [`impl Entity for Product`](#impl-Entity-for-Product).

use crate::products::ProductError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed set of product categories.
///
/// Persisted as the canonical label (`"Books"`, `"Movies"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Books,
    Movies,
    Music,
    Games,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Books,
        Category::Movies,
        Category::Music,
        Category::Games,
    ];

    /// Canonical label, identical to the persisted form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Books => "Books",
            Self::Movies => "Movies",
            Self::Music => "Music",
            Self::Games => "Games",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive parse of a category label, for drivers taking user input.
impl FromStr for Category {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ProductError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: ProductId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Category")]
    pub category: Category,
}

impl Product {
    /// Creates a new Product instance without validating it.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the store)
    /// * `title` - Product title
    /// * `price` - Unit price
    /// * `category` - Product category
    pub fn new(id: ProductId, title: impl Into<String>, price: f64, category: Category) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category,
        }
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub title: String,
    pub price: f64,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("books".parse::<Category>(), Ok(Category::Books));
        assert_eq!(" MUSIC ".parse::<Category>(), Ok(Category::Music));
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert_eq!(
            "Furniture".parse::<Category>(),
            Err(ProductError::UnknownCategory("Furniture".to_string()))
        );
    }

    #[test]
    fn test_category_persists_as_label() {
        let json = serde_json::to_string(&Category::Games).unwrap();
        assert_eq!(json, "\"Games\"");
        assert!(serde_json::from_str::<Category>("\"Toys\"").is_err());
    }
}
