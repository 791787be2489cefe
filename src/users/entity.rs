//! Entity trait implementation for the User domain type.
//!
//! This module contains the [`Entity`] trait implementation
//! that enables [`User`] to be managed by the generic [`crate::framework::ResourceStore`],
//! and the budget rules behind [`UserAction`].

use super::error::UserError;
use crate::framework::Entity;
use crate::model::{User, UserCreate, UserId};

/// Budget mutations on a stored user.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Adds the amount to the budget.
    Deposit(f64),
    /// Removes the amount from the budget, failing if it is not covered.
    Spend(f64),
}

fn check_amount(amount: f64) -> Result<f64, UserError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(UserError::InvalidAmount(amount))
    }
}

impl User {
    /// Increases the budget. Negative and non-finite amounts are rejected, as is
    /// any deposit whose result would overflow to infinity.
    pub fn deposit(&mut self, amount: f64) -> Result<f64, UserError> {
        let budget = self.budget + check_amount(amount)?;
        if !budget.is_finite() {
            return Err(UserError::InvalidAmount(amount));
        }
        self.budget = budget;
        Ok(self.budget)
    }

    /// Decreases the budget. The budget is left untouched on failure.
    pub fn spend(&mut self, amount: f64) -> Result<f64, UserError> {
        let amount = check_amount(amount)?;
        if self.budget < amount {
            return Err(UserError::InsufficientFunds {
                requested: amount,
                available: self.budget,
            });
        }
        self.budget -= amount;
        Ok(self.budget)
    }
}

impl Entity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Action = UserAction;
    /// The budget after the action.
    type ActionResult = f64;
    type Error = UserError;

    fn next_id() -> UserId {
        UserId::generate()
    }

    fn id(&self) -> &UserId {
        &self.id
    }

    fn validate(&self) -> Result<(), UserError> {
        if self.budget.is_finite() && self.budget >= 0.0 {
            Ok(())
        } else {
            Err(UserError::InvalidBudget(self.budget))
        }
    }

    /// Creates a new User with a zero budget.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        Ok(Self::new(id, params.name))
    }

    fn not_found(id: &UserId) -> UserError {
        UserError::NotFound(id.clone())
    }

    /// Handles budget actions.
    ///
    /// # Actions
    /// - `Deposit`: Adds to the budget
    /// - `Spend`: Debits the budget if it covers the amount
    fn handle_action(&mut self, action: UserAction) -> Result<f64, UserError> {
        match action {
            UserAction::Deposit(amount) => self.deposit(amount),
            UserAction::Spend(amount) => self.spend(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new(UserId::from("user_1"), "Alice")
    }

    #[test]
    fn test_new_user_has_empty_budget() {
        let params = UserCreate {
            name: "Alice".into(),
        };
        let user = User::from_create_params(UserId::from("user_1"), params).unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.budget, 0.0);
    }

    #[test]
    fn test_spend_within_budget() {
        let mut user = alice();
        user.deposit(20.0).unwrap();
        assert_eq!(user.spend(15.0), Ok(5.0));
        assert_eq!(user.spend(5.0), Ok(0.0));
    }

    #[test]
    fn test_spend_over_budget_keeps_balance() {
        let mut user = alice();
        user.deposit(10.0).unwrap();

        let result = user.handle_action(UserAction::Spend(19.99));
        assert_eq!(
            result,
            Err(UserError::InsufficientFunds {
                requested: 19.99,
                available: 10.0
            })
        );
        assert_eq!(user.budget, 10.0);
    }

    #[test]
    fn test_invalid_amounts_are_rejected() {
        let mut user = alice();
        user.deposit(5.0).unwrap();

        assert_eq!(user.deposit(-1.0), Err(UserError::InvalidAmount(-1.0)));
        assert_eq!(user.spend(-1.0), Err(UserError::InvalidAmount(-1.0)));
        assert!(user.deposit(f64::INFINITY).is_err());
        assert!(user.deposit(f64::NAN).is_err());
        assert_eq!(user.budget, 5.0);
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let mut user = alice();
        assert_eq!(user.deposit(f64::MAX), Ok(f64::MAX));

        assert_eq!(user.deposit(f64::MAX), Err(UserError::InvalidAmount(f64::MAX)));
        assert_eq!(user.budget, f64::MAX);
        assert_eq!(user.validate(), Ok(()));
    }

    #[test]
    fn test_validate_budget() {
        let mut user = alice();
        assert_eq!(user.validate(), Ok(()));

        user.budget = -5.0;
        assert_eq!(user.validate(), Err(UserError::InvalidBudget(-5.0)));
        user.budget = f64::INFINITY;
        assert!(user.validate().is_err());
    }
}
