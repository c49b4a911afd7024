use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enroll::{
  adapters::http::{SignupHandler, configure_signup_routes},
  application::account::CreateAccountUseCase,
  infrastructure::{
    config::Config, persistence::postgres::PostgresAccountStore, security::Argon2PasswordHasher,
    validation::EmailFormatValidator,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "enroll=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting enroll");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    std::io::Error::new(
      std::io::ErrorKind::Other,
      format!("Failed to connect to database: {}", e),
    )
  })?;

  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Failed to run migrations: {}", e),
      )
    })?;

  tracing::info!("Database ready");

  // Wire adapters into the core
  let hasher = Arc::new(Argon2PasswordHasher::new(&config.hashing).map_err(|e| {
    std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      format!("Invalid hashing configuration: {}", e),
    )
  })?);
  let store = Arc::new(PostgresAccountStore::new(db_pool));
  let email_validator = Arc::new(EmailFormatValidator::new());

  let create_account = Arc::new(CreateAccountUseCase::new(hasher, store));
  let signup_handler = Arc::new(SignupHandler::new(email_validator, create_account));

  let bind_addr = (config.server.host.clone(), config.server.port);
  tracing::info!("Listening on {}:{}", bind_addr.0, bind_addr.1);

  HttpServer::new(move || {
    let handler = signup_handler.clone();
    App::new()
      .wrap(Logger::default())
      .service(web::scope("/api/v1").configure(move |cfg| configure_signup_routes(cfg, handler)))
  })
  .bind(bind_addr)?
  .run()
  .await
}
