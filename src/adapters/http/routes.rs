use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use std::sync::Arc;

use super::dtos::{HttpReply, ReplyBody, SignupPayload};
use super::handlers::signup::SignupHandler;

/// Configure signup routes
///
/// Mounts the registration endpoint under the provided scope. The route is
/// prefixed with the scope path (e.g. /api/v1).
///
/// # Routes
///
/// - POST /signup - Register a new account
pub fn configure_signup_routes(cfg: &mut web::ServiceConfig, handler: Arc<SignupHandler>) {
  cfg
    .app_data(web::Data::new(handler))
    .route("/signup", web::post().to(signup_route));
}

async fn signup_route(
  payload: web::Json<SignupPayload>,
  handler: web::Data<Arc<SignupHandler>>,
) -> HttpResponse {
  let reply = handler.handle(payload.into_inner()).await;
  into_response(reply)
}

/// Converts a transport-neutral reply into an actix-web response
fn into_response(reply: HttpReply) -> HttpResponse {
  let status =
    StatusCode::from_u16(reply.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

  match reply.body {
    ReplyBody::Account(account) => HttpResponse::build(status).json(account),
    ReplyBody::Error(error) => HttpResponse::build(status).json(error),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::account::CreateAccountUseCase;
  use crate::infrastructure::config::HashingConfig;
  use crate::infrastructure::persistence::memory::InMemoryAccountStore;
  use crate::infrastructure::security::Argon2PasswordHasher;
  use crate::infrastructure::validation::EmailFormatValidator;
  use actix_web::{App, test};
  use serde_json::{Value, json};

  fn test_handler() -> Arc<SignupHandler> {
    // Minimal Argon2 cost keeps the end-to-end test fast.
    let hashing = HashingConfig {
      memory_kib: 8,
      iterations: 1,
      parallelism: 1,
    };
    let hasher = Arc::new(Argon2PasswordHasher::new(&hashing).unwrap());
    let store = Arc::new(InMemoryAccountStore::new());
    let create_account = Arc::new(CreateAccountUseCase::new(hasher, store));
    Arc::new(SignupHandler::new(
      Arc::new(EmailFormatValidator::new()),
      create_account,
    ))
  }

  #[actix_web::test]
  async fn signup_route_creates_account() {
    let handler = test_handler();
    let app =
      test::init_service(App::new().configure(move |cfg| configure_signup_routes(cfg, handler)))
        .await;

    let req = test::TestRequest::post()
      .uri("/signup")
      .set_json(json!({
        "name": "valid_name",
        "email": "valid_email@mail.com",
        "password": "valid_password",
        "passwordConfirmation": "valid_password"
      }))
      .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "valid_name");
    assert_eq!(body["email"], "valid_email@mail.com");
    assert!(body["id"].as_str().is_some());
    assert!(body["password"].as_str().unwrap().starts_with("$argon2id$"));
  }

  #[actix_web::test]
  async fn signup_route_maps_missing_field_to_400() {
    let handler = test_handler();
    let app =
      test::init_service(App::new().configure(move |cfg| configure_signup_routes(cfg, handler)))
        .await;

    let req = test::TestRequest::post()
      .uri("/signup")
      .set_json(json!({
        "email": "valid_email@mail.com",
        "password": "valid_password",
        "passwordConfirmation": "valid_password"
      }))
      .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "MissingParamError");
    assert_eq!(body["message"], "Missing param: name");
  }

  #[actix_web::test]
  async fn signup_route_maps_invalid_email_to_400() {
    let handler = test_handler();
    let app =
      test::init_service(App::new().configure(move |cfg| configure_signup_routes(cfg, handler)))
        .await;

    let req = test::TestRequest::post()
      .uri("/signup")
      .set_json(json!({
        "name": "valid_name",
        "email": "not-an-email",
        "password": "valid_password",
        "passwordConfirmation": "valid_password"
      }))
      .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "InvalidParamError");
    assert_eq!(body["message"], "Invalid param: email");
  }
}
