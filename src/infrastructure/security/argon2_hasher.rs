use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version, password_hash::PasswordHasher as Argon2PasswordHasherTrait,
};
use async_trait::async_trait;

use crate::domain::account::errors::{AccountError, HashError};
use crate::domain::account::ports::PasswordHasher;
use crate::infrastructure::config::HashingConfig;

/// Argon2id credential hasher.
///
/// Produces PHC-formatted hash strings with a per-hash random salt from the
/// OS RNG. Cost parameters come from [`HashingConfig`]; the crate default is
/// Argon2id with 19 MiB memory, 2 iterations and 1 lane. Hashing runs on the
/// blocking pool since Argon2 is CPU-bound.
pub struct Argon2PasswordHasher {
  params: Params,
}

impl Argon2PasswordHasher {
  /// Creates a new Argon2PasswordHasher with the configured cost parameters
  pub fn new(config: &HashingConfig) -> Result<Self, AccountError> {
    let params = Params::new(
      config.memory_kib,
      config.iterations,
      config.parallelism,
      Some(Params::DEFAULT_OUTPUT_LEN),
    )
    .map_err(|e| AccountError::Hash(HashError::InvalidParams(e.to_string())))?;

    Ok(Self { params })
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn encrypt(&self, plaintext: &str) -> Result<String, AccountError> {
    let params = self.params.clone();
    let plaintext = plaintext.to_owned();

    let hash = tokio::task::spawn_blocking(move || {
      let salt = SaltString::generate(&mut rand::rngs::OsRng);
      let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

      argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HashError::HashingFailed(e.to_string()))
    })
    .await
    .map_err(|e| HashError::HashingFailed(e.to_string()))??;

    Ok(hash)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use argon2::password_hash::PasswordHash as PhcHash;
  use argon2::PasswordVerifier;

  fn light_config() -> HashingConfig {
    HashingConfig {
      memory_kib: 8,
      iterations: 1,
      parallelism: 1,
    }
  }

  #[tokio::test]
  async fn encrypt_produces_argon2id_phc_string() {
    let hasher = Argon2PasswordHasher::new(&light_config()).unwrap();

    let hash = hasher.encrypt("valid_password").await.unwrap();

    assert!(hash.starts_with("$argon2id$"));
    assert_ne!(hash, "valid_password");
  }

  #[tokio::test]
  async fn encrypt_salts_each_hash_independently() {
    let hasher = Argon2PasswordHasher::new(&light_config()).unwrap();

    let hash1 = hasher.encrypt("valid_password").await.unwrap();
    let hash2 = hasher.encrypt("valid_password").await.unwrap();

    assert_ne!(hash1, hash2);
  }

  #[tokio::test]
  async fn encrypted_hash_verifies_against_plaintext() {
    let hasher = Argon2PasswordHasher::new(&light_config()).unwrap();

    let hash = hasher.encrypt("valid_password").await.unwrap();
    let parsed = PhcHash::new(&hash).unwrap();

    // verify_password reads the cost parameters back out of the PHC string.
    assert!(
      Argon2::default()
        .verify_password(b"valid_password", &parsed)
        .is_ok()
    );
    assert!(
      Argon2::default()
        .verify_password(b"wrong_password", &parsed)
        .is_err()
    );
  }

  #[test]
  fn rejects_invalid_cost_parameters() {
    let config = HashingConfig {
      memory_kib: 8,
      iterations: 0,
      parallelism: 1,
    };

    let result = Argon2PasswordHasher::new(&config);

    assert!(matches!(
      result,
      Err(AccountError::Hash(HashError::InvalidParams(_)))
    ));
  }
}
