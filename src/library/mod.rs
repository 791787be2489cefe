//! # Library Aggregate
//!
//! The [`Library`] owns every user, product and purchase, each collection in its
//! own [`ResourceStore`] keyed by ID. It is the only place that coordinates
//! between collections: a purchase is recorded only after the library has
//! resolved the product, debited the user and found both IDs present.
//!
//! ## Lifecycle
//!
//! ```rust,ignore
//! let mut library = Library::new(LibraryConfig::from_env())?; // load or start empty
//! let user_id = library.add_user("Alice").id.clone();
//! library.deposit(&user_id, 20.0)?;
//! library.save()?; // nothing is persisted without this
//! ```
//!
//! A `Library` is a plain mutable value with no internal locking. Callers
//! serialize access to it themselves.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::*;
pub use error::*;

use crate::framework::ResourceStore;
use crate::model::{
    Category, Product, ProductCreate, ProductId, Purchase, PurchaseCreate, PurchaseId, User, UserId,
};
use crate::users::UserAction;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    config: LibraryConfig,
    users: ResourceStore<User>,
    products: ResourceStore<Product>,
    purchases: ResourceStore<Purchase>,
}

impl Library {
    /// A library with no records. Nothing is read from storage.
    pub fn empty(config: LibraryConfig) -> Self {
        Self {
            config,
            users: ResourceStore::new(),
            products: ResourceStore::new(),
            purchases: ResourceStore::new(),
        }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn users(&self) -> &ResourceStore<User> {
        &self.users
    }

    pub fn products(&self) -> &ResourceStore<Product> {
        &self.products
    }

    pub fn purchases(&self) -> &ResourceStore<Purchase> {
        &self.purchases
    }

    // --- Entity creation ---

    /// Registers a user with an empty budget. Never fails.
    #[instrument(skip(self))]
    pub fn add_user(&mut self, name: &str) -> &User {
        self.users.create_with(|id| User::new(id, name))
    }

    /// Adds a product to the catalogue.
    ///
    /// # Errors
    /// [`ProductError::InvalidPrice`](crate::products::ProductError::InvalidPrice)
    /// if the price is negative or not finite. The catalogue is unchanged.
    #[instrument(skip(self))]
    pub fn add_product(
        &mut self,
        title: &str,
        price: f64,
        category: Category,
    ) -> Result<&Product, LibraryError> {
        let params = ProductCreate {
            title: title.to_string(),
            price,
            category,
        };
        Ok(self.products.create(params)?)
    }

    // --- Lookup and listing ---

    pub fn get_user(&self, id: &UserId) -> Result<&User, LibraryError> {
        Ok(self.users.get(id)?)
    }

    pub fn get_product(&self, id: &ProductId) -> Result<&Product, LibraryError> {
        Ok(self.products.get(id)?)
    }

    pub fn get_purchase(&self, id: &PurchaseId) -> Result<&Purchase, LibraryError> {
        Ok(self.purchases.get(id)?)
    }

    /// All users, in no particular order.
    pub fn list_users(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    /// All products, in no particular order.
    pub fn list_products(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    /// Purchases made by `user_id`, in no particular order.
    ///
    /// Empty when the user bought nothing or is unknown.
    pub fn list_purchases(&self, user_id: &UserId) -> Vec<&Purchase> {
        let purchases: Vec<&Purchase> = self
            .purchases
            .values()
            .filter(|purchase| &purchase.user_id == user_id)
            .collect();
        debug!(%user_id, count = purchases.len(), "Listed purchases");
        purchases
    }

    // --- Transactions ---

    /// Adds `amount` to the user's budget and returns the new budget.
    ///
    /// # Errors
    /// - [`UserError::NotFound`](crate::users::UserError::NotFound) for an unknown user
    /// - [`UserError::InvalidAmount`](crate::users::UserError::InvalidAmount) for a
    ///   negative or non-finite amount, or one that would overflow the budget;
    ///   the budget is unchanged
    #[instrument(skip(self))]
    pub fn deposit(&mut self, user_id: &UserId, amount: f64) -> Result<f64, LibraryError> {
        Ok(self
            .users
            .perform_action(user_id, UserAction::Deposit(amount))?)
    }

    /// Debits the product's price from the user and records the purchase.
    ///
    /// Either both happen or neither does: a missing product or user, or a
    /// budget below the price, fails before anything is changed.
    ///
    /// # Errors
    /// - [`ProductError::NotFound`](crate::products::ProductError::NotFound)
    /// - [`UserError::NotFound`](crate::users::UserError::NotFound)
    /// - [`UserError::InsufficientFunds`](crate::users::UserError::InsufficientFunds)
    #[instrument(skip(self))]
    pub fn buy(
        &mut self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<&Purchase, LibraryError> {
        let price = self.products.get(product_id)?.price;
        let remaining = self
            .users
            .perform_action(user_id, UserAction::Spend(price))?;

        let purchase = self.purchases.create(PurchaseCreate {
            user_id: user_id.clone(),
            product_id: product_id.clone(),
        })?;
        info!(purchase_id = %purchase.id, price, remaining, "Purchase recorded");
        Ok(purchase)
    }
}
