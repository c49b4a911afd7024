use thiserror::Error;

/// Umbrella error for the account-creation pipeline.
///
/// The HTTP handler never inspects the variants: any error that reaches it
/// is reported as an opaque server failure. The variants exist so adapters
/// can surface precise causes to the logs.
#[derive(Debug, Error)]
pub enum AccountError {
  #[error("Hashing error: {0}")]
  Hash(#[from] HashError),

  #[error("Store error: {0}")]
  Store(#[from] StoreError),

  #[error("Validator error: {0}")]
  Validator(#[from] ValidatorError),
}

/// Credential hashing errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash credential: {0}")]
  HashingFailed(String),

  #[error("Invalid hashing parameters: {0}")]
  InvalidParams(String),
}

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

/// Email validator errors
#[derive(Debug, Error)]
pub enum ValidatorError {
  #[error("Email check failed: {0}")]
  CheckFailed(String),
}

// Automatic conversions from external error types

impl From<sqlx::Error> for StoreError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          StoreError::DuplicateKey(db_err.message().to_string())
        } else {
          StoreError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => StoreError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => StoreError::ConnectionFailed("Pool closed".to_string()),
      _ => StoreError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AccountError {
  fn from(error: sqlx::Error) -> Self {
    AccountError::Store(StoreError::from(error))
  }
}
