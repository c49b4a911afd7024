use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::entities::{Account, NewAccount};
use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::AccountStore;

/// PostgreSQL implementation of the AccountStore trait
pub struct PostgresAccountStore {
  pool: PgPool,
}

impl PostgresAccountStore {
  /// Creates a new instance of PostgresAccountStore
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the accounts table
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
  id: Uuid,
  name: String,
  email: String,
  password_hash: String,
}

impl From<AccountRow> for Account {
  fn from(row: AccountRow) -> Self {
    Account {
      id: row.id,
      name: row.name,
      email: row.email,
      password: row.password_hash,
    }
  }
}

#[async_trait]
impl AccountStore for PostgresAccountStore {
  async fn create(&self, account: NewAccount) -> Result<Account, AccountError> {
    // The input password is already hashed by the time it reaches a store.
    let row = sqlx::query_as::<_, AccountRow>(
      r#"
            INSERT INTO accounts (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash
            "#,
    )
    .bind(Uuid::new_v4())
    .bind(&account.name)
    .bind(&account.email)
    .bind(&account.password)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }
}
