pub mod entities;
pub mod errors;
pub mod ports;

// Re-export commonly used types
pub use entities::{Account, NewAccount};
pub use errors::{AccountError, HashError, StoreError, ValidatorError};
pub use ports::{AccountStore, EmailValidator, PasswordHasher};
