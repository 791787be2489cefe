//! Error types for purchases.

use crate::model::PurchaseId;
use thiserror::Error;

/// Errors that can occur during purchase operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PurchaseError {
    /// The requested purchase was not found.
    #[error("Purchase not found: {0}")]
    NotFound(PurchaseId),
}
