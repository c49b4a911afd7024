use std::sync::Arc;

use crate::domain::account::entities::{Account, NewAccount};
use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::{AccountStore, PasswordHasher};

/// Command for creating a new account
#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
  /// Account holder's name
  pub name: String,
  /// Account email address
  pub email: String,
  /// Plain text password, hashed before persistence
  pub password: String,
}

/// Use case for creating a new account
///
/// Orchestrates the hasher and the store: the password is hashed first and
/// the store only ever receives the hashed form. Both awaits are strictly
/// sequential since persistence needs the hash. The use case performs no
/// content validation of `name` or `email`; that belongs to the entry point
/// calling it, which keeps the use case reusable from any delivery
/// mechanism.
pub struct CreateAccountUseCase {
  hasher: Arc<dyn PasswordHasher>,
  store: Arc<dyn AccountStore>,
}

impl CreateAccountUseCase {
  /// Creates a new instance of CreateAccountUseCase
  pub fn new(hasher: Arc<dyn PasswordHasher>, store: Arc<dyn AccountStore>) -> Self {
    Self { hasher, store }
  }

  /// Executes account creation
  ///
  /// # Errors
  /// Failures from the hasher or the store propagate unchanged; no retries
  /// and no partial account on the hashing path.
  pub async fn execute(&self, command: CreateAccountCommand) -> Result<Account, AccountError> {
    let hashed = self.hasher.encrypt(&command.password).await?;

    let account = NewAccount {
      name: command.name,
      email: command.email,
      password: hashed,
    };

    self.store.create(account).await
  }
}
