use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::account::entities::{Account, NewAccount};
use crate::domain::account::errors::{AccountError, StoreError};
use crate::domain::account::ports::AccountStore;

/// In-memory implementation of the AccountStore trait
///
/// Backs tests and local runs that have no Postgres at hand. Accounts live
/// in a mutex-guarded vector; identifiers are random v4 UUIDs.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
  accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccountStore {
  /// Creates a new, empty store
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a snapshot of all stored accounts
  pub fn accounts(&self) -> Vec<Account> {
    self
      .accounts
      .lock()
      .map(|accounts| accounts.clone())
      .unwrap_or_default()
  }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
  async fn create(&self, account: NewAccount) -> Result<Account, AccountError> {
    let stored = Account {
      id: Uuid::new_v4(),
      name: account.name,
      email: account.email,
      password: account.password,
    };

    let mut accounts = self
      .accounts
      .lock()
      .map_err(|_| StoreError::QueryFailed("Store mutex poisoned".to_string()))?;
    accounts.push(stored.clone());

    Ok(stored)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn hashed_account() -> NewAccount {
    NewAccount {
      name: "valid_name".to_string(),
      email: "valid_email@mail.com".to_string(),
      password: "hashed_password".to_string(),
    }
  }

  #[tokio::test]
  async fn create_assigns_fresh_unique_ids() {
    let store = InMemoryAccountStore::new();

    let first = store.create(hashed_account()).await.unwrap();
    let second = store.create(hashed_account()).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.accounts().len(), 2);
  }

  #[tokio::test]
  async fn create_stores_fields_as_given() {
    let store = InMemoryAccountStore::new();

    let stored = store.create(hashed_account()).await.unwrap();

    assert_eq!(stored.name, "valid_name");
    assert_eq!(stored.email, "valid_email@mail.com");
    assert_eq!(stored.password, "hashed_password");
    assert_eq!(store.accounts(), vec![stored]);
  }
}
