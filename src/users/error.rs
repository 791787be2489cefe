//! Error types for users.

use crate::model::UserId;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// The user's budget does not cover the amount to spend.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },

    /// A deposit or spend amount was negative or not a finite number, or the
    /// deposit would take the budget past the largest finite value.
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// A stored budget is negative or not a finite number.
    #[error("Invalid budget: {0}")]
    InvalidBudget(f64),
}
