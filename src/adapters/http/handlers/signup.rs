use std::sync::Arc;

use crate::adapters::http::dtos::{ErrorBody, HttpReply, SignupPayload};
use crate::application::account::{CreateAccountCommand, CreateAccountUseCase};
use crate::domain::account::ports::EmailValidator;

/// Registration endpoint handler.
///
/// Owns all request-shape validation: required-field presence, password
/// confirmation match and email format. Only structurally valid requests
/// reach the use case, and `passwordConfirmation` is dropped before the
/// hand-off. Stateless per call; concurrent invocations share nothing but
/// the injected collaborators.
///
/// Validation short-circuits: the first failing rule decides the reply.
/// Inputs are forwarded exactly as received, with no trimming or case
/// normalization.
pub struct SignupHandler {
  email_validator: Arc<dyn EmailValidator>,
  create_account: Arc<CreateAccountUseCase>,
}

/// Treats an empty string the same as an absent field
fn present(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}

impl SignupHandler {
  /// Creates a new instance of SignupHandler
  pub fn new(
    email_validator: Arc<dyn EmailValidator>,
    create_account: Arc<CreateAccountUseCase>,
  ) -> Self {
    Self {
      email_validator,
      create_account,
    }
  }

  /// Handles a raw signup payload and produces a transport-neutral reply.
  ///
  /// Outcomes:
  /// - 400 with a `MissingParamError` body naming the first absent or empty
  ///   field, checked in the order name, email, password,
  ///   passwordConfirmation
  /// - 400 with an `InvalidParamError` body for a confirmation mismatch or
  ///   a malformed email
  /// - 500 with a generic `ServerError` body when the validator or the use
  ///   case fails; the cause is logged, never exposed
  /// - 200 with the stored account on success, hashed password included
  pub async fn handle(&self, payload: SignupPayload) -> HttpReply {
    let Some(name) = present(payload.name) else {
      return HttpReply::bad_request(ErrorBody::missing_param("name"));
    };
    let Some(email) = present(payload.email) else {
      return HttpReply::bad_request(ErrorBody::missing_param("email"));
    };
    let Some(password) = present(payload.password) else {
      return HttpReply::bad_request(ErrorBody::missing_param("password"));
    };
    let Some(confirmation) = present(payload.password_confirmation) else {
      return HttpReply::bad_request(ErrorBody::missing_param("passwordConfirmation"));
    };

    if password != confirmation {
      return HttpReply::bad_request(ErrorBody::invalid_param("passwordConfirmation"));
    }

    match self.email_validator.is_valid(&email) {
      Ok(true) => {}
      Ok(false) => return HttpReply::bad_request(ErrorBody::invalid_param("email")),
      Err(error) => {
        tracing::error!("Email validation failed: {}", error);
        return HttpReply::server_error();
      }
    }

    let command = CreateAccountCommand {
      name,
      email,
      password,
    };

    match self.create_account.execute(command).await {
      Ok(account) => HttpReply::ok(account),
      Err(error) => {
        tracing::error!("Account creation failed: {}", error);
        HttpReply::server_error()
      }
    }
  }
}
