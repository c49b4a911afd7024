use async_trait::async_trait;

use super::entities::{Account, NewAccount};
use super::errors::AccountError;

/// Capability trait for credential hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plaintext credential into an opaque, non-reversible string.
  ///
  /// Callers are responsible for having validated the input; in particular
  /// the plaintext must be non-empty. Any internal failure of the hashing
  /// mechanism propagates unchanged.
  async fn encrypt(&self, plaintext: &str) -> Result<String, AccountError>;
}

/// Capability trait for account persistence
#[async_trait]
pub trait AccountStore: Send + Sync {
  /// Persists a creation request and returns the stored account.
  ///
  /// The input must already carry a hashed password. Implementations assign
  /// a fresh, unique identifier and must not expose partial writes: either
  /// the returned account was persisted or an error is returned.
  async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;
}

/// Capability trait for email format checking
///
/// `Err` means the check itself could not run, not that the email is
/// malformed; the caller treats it as an upstream failure.
pub trait EmailValidator: Send + Sync {
  /// Checks the structural validity of an email-like string.
  fn is_valid(&self, email: &str) -> Result<bool, AccountError>;
}
