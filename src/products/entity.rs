//! Entity trait implementation for the Product domain type.
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::error::ProductError;
use crate::framework::Entity;
use crate::model::{Product, ProductCreate, ProductId};

impl Entity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Action = ();
    type ActionResult = ();
    type Error = ProductError;

    fn next_id() -> ProductId {
        ProductId::generate()
    }

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Prices must be finite and not negative.
    fn validate(&self) -> Result<(), ProductError> {
        if self.price.is_finite() && self.price >= 0.0 {
            Ok(())
        } else {
            Err(ProductError::InvalidPrice(self.price))
        }
    }

    /// Creates a new Product, rejecting negative or non-finite prices.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        let product = Self::new(id, params.title, params.price, params.category);
        product.validate()?;
        Ok(product)
    }

    fn not_found(id: &ProductId) -> ProductError {
        ProductError::NotFound(id.clone())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), ProductError> {
        Ok(())
    }
}
