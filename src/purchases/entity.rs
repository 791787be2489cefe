//! Entity trait implementation for the Purchase domain type.
//!
//! Purchases are never validated here: the [`Library`](crate::library::Library)
//! resolves both referenced IDs and debits the user before asking the store
//! to record one.

use super::error::PurchaseError;
use crate::framework::Entity;
use crate::model::{Purchase, PurchaseCreate, PurchaseId};

impl Entity for Purchase {
    type Id = PurchaseId;
    type Create = PurchaseCreate;
    type Action = ();
    type ActionResult = ();
    type Error = PurchaseError;

    fn next_id() -> PurchaseId {
        PurchaseId::generate()
    }

    fn id(&self) -> &PurchaseId {
        &self.id
    }

    fn validate(&self) -> Result<(), PurchaseError> {
        Ok(())
    }

    fn from_create_params(id: PurchaseId, params: PurchaseCreate) -> Result<Self, PurchaseError> {
        Ok(Self::new(id, params.user_id, params.product_id))
    }

    fn not_found(id: &PurchaseId) -> PurchaseError {
        PurchaseError::NotFound(id.clone())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), PurchaseError> {
        Ok(())
    }
}
