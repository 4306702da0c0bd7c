//! Admin API credentials.
//!
//! The dashboard authenticates with one shared secret. Only its argon2 PHC
//! string is held in memory, parsed once when the config is built.

use argon2::Argon2;
use argon2::password_hash::{
    self, PasswordHashString, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

/// Errors from building or checking the admin credentials.
#[derive(Debug, thiserror::Error)]
pub enum AdminSecretError {
    #[error("admin secret must not be empty")]
    Empty,
    #[error("admin secret hash is not an argon2 PHC string: {0}")]
    InvalidHash(password_hash::Error),
    #[error("admin secret hash uses {0}, expected an argon2 variant")]
    UnsupportedAlgorithm(String),
    #[error("failed to hash admin secret: {0}")]
    Hashing(password_hash::Error),
    #[error("admin secret does not match")]
    Mismatch,
}

/// Credentials guarding the admin API.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    secret_hash: PasswordHashString,
}

impl AdminConfig {
    /// Adopt an already hashed secret, as stored in the config file.
    pub fn from_hash(hash: &str) -> Result<Self, AdminSecretError> {
        let secret_hash = PasswordHashString::new(hash).map_err(AdminSecretError::InvalidHash)?;
        let algorithm = secret_hash.algorithm();
        if !algorithm.as_str().starts_with("argon2") {
            return Err(AdminSecretError::UnsupportedAlgorithm(
                algorithm.as_str().to_string(),
            ));
        }
        Ok(Self { secret_hash })
    }

    /// Hash a plaintext secret with a fresh salt.
    pub fn from_plaintext(secret: &str) -> Result<Self, AdminSecretError> {
        if secret.is_empty() {
            return Err(AdminSecretError::Empty);
        }
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(AdminSecretError::Hashing)?;
        Ok(Self {
            secret_hash: hash.serialize(),
        })
    }

    /// The PHC string, for writing back to the config file.
    pub fn secret_hash(&self) -> &str {
        self.secret_hash.as_str()
    }

    /// Check the secret presented in an admin request.
    ///
    /// An empty secret is refused without running argon2.
    pub fn verify(&self, presented: &str) -> Result<(), AdminSecretError> {
        if presented.is_empty() {
            return Err(AdminSecretError::Empty);
        }
        Argon2::default()
            .verify_password(presented.as_bytes(), &self.secret_hash.password_hash())
            .map_err(|_| AdminSecretError::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_secret_verifies() {
        let admin = AdminConfig::from_plaintext("hormuud-dashboard").unwrap();
        assert!(admin.secret_hash().starts_with("$argon2id$"));
        assert!(admin.verify("hormuud-dashboard").is_ok());
        assert!(matches!(
            admin.verify("somtel-dashboard"),
            Err(AdminSecretError::Mismatch)
        ));
        assert!(matches!(admin.verify(""), Err(AdminSecretError::Empty)));
    }

    #[test]
    fn test_stored_hash_round_trips() {
        let hashed = AdminConfig::from_plaintext("golis").unwrap();
        let reloaded = AdminConfig::from_hash(hashed.secret_hash()).unwrap();
        assert_eq!(reloaded.secret_hash(), hashed.secret_hash());
        assert!(reloaded.verify("golis").is_ok());
    }

    #[test]
    fn test_rejects_unusable_hashes() {
        assert!(matches!(
            AdminConfig::from_hash("golis"),
            Err(AdminSecretError::InvalidHash(_))
        ));
        assert!(matches!(
            AdminConfig::from_hash("$pbkdf2-sha256$i=1000$c2FsdHNhbHQ$aGFzaGhhc2hoYXNo"),
            Err(AdminSecretError::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            AdminConfig::from_plaintext(""),
            Err(AdminSecretError::Empty)
        ));
    }
}
