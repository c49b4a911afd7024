pub mod dtos;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use dtos::{ErrorBody, HttpReply, ReplyBody, SignupPayload};
pub use handlers::signup::SignupHandler;
pub use routes::configure_signup_routes;
