use validator::ValidateEmail;

use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::EmailValidator;

/// Syntactic email checker backed by the `validator` crate.
///
/// Checks format only; whether the address actually exists is out of scope.
/// The check itself cannot fail, so `is_valid` never returns `Err`.
#[derive(Debug, Default)]
pub struct EmailFormatValidator;

impl EmailFormatValidator {
  /// Creates a new instance of EmailFormatValidator
  pub fn new() -> Self {
    Self
  }
}

impl EmailValidator for EmailFormatValidator {
  fn is_valid(&self, email: &str) -> Result<bool, AccountError> {
    Ok(email.validate_email())
  }
}
