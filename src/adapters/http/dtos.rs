use serde::{Deserialize, Serialize};

use crate::domain::account::entities::Account;

/// Raw signup payload as it arrives from the transport.
///
/// Every field is optional: presence checks are part of the handler's
/// validation, not of deserialization. Wire names are camelCase.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupPayload {
  pub name: Option<String>,
  pub email: Option<String>,
  pub password: Option<String>,
  pub password_confirmation: Option<String>,
}

/// Error body carried by failure replies: an error-kind name plus a
/// human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
  pub name: String,
  pub message: String,
}

impl ErrorBody {
  /// A required field was absent or empty
  pub fn missing_param(field: &str) -> Self {
    Self {
      name: "MissingParamError".to_string(),
      message: format!("Missing param: {}", field),
    }
  }

  /// A field failed a semantic check
  pub fn invalid_param(field: &str) -> Self {
    Self {
      name: "InvalidParamError".to_string(),
      message: format!("Invalid param: {}", field),
    }
  }

  /// Generic body for upstream failures; carries no cause details
  pub fn server_error() -> Self {
    Self {
      name: "ServerError".to_string(),
      message: "Internal server error".to_string(),
    }
  }
}

/// Body of a signup reply: the stored account on success, an error body
/// otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReplyBody {
  Account(Account),
  Error(ErrorBody),
}

/// Transport-neutral response produced by the signup handler.
///
/// The HTTP route binding converts this into a framework response; nothing
/// in the handler depends on actix-web.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
  pub status_code: u16,
  pub body: ReplyBody,
}

impl HttpReply {
  pub fn ok(account: Account) -> Self {
    Self {
      status_code: 200,
      body: ReplyBody::Account(account),
    }
  }

  pub fn bad_request(error: ErrorBody) -> Self {
    Self {
      status_code: 400,
      body: ReplyBody::Error(error),
    }
  }

  pub fn server_error() -> Self {
    Self {
      status_code: 500,
      body: ReplyBody::Error(ErrorBody::server_error()),
    }
  }
}
