use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input to account creation.
///
/// `password` carries the plaintext credential when the value enters the
/// creation pipeline and the hashed form once the use case has applied the
/// hasher. The use case builds a fresh value for the hand-off to the store
/// rather than mutating the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
  pub name: String,
  pub email: String,
  pub password: String,
}

/// A durable account record as returned by an account store.
///
/// `password` holds the hashed credential, never the plaintext. The `id` is
/// assigned by the store at creation time and is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub password: String,
}
