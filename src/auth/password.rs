use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AccountError;

/// One-way password hashing capability, injected into the account factory
/// rather than reached for ambiently.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, AccountError>;
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AccountError>;
}

/// Argon2id with a per-password random salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, AccountError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hashed| hashed.to_string())
            .map_err(|e| AccountError::PasswordHash(e.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AccountError> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| AccountError::PasswordHash(e.to_string()))?;

        match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AccountError::PasswordHash(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_not_the_plaintext() {
        let hashed = Argon2Hasher.hash("secret123").unwrap();
        assert_ne!(hashed, "secret123");
        assert!(hashed.starts_with("$argon2"));
    }

    #[test]
    fn verify_accepts_original_and_rejects_other() {
        let hashed = Argon2Hasher.hash("secret123").unwrap();
        assert!(Argon2Hasher.verify("secret123", &hashed).unwrap());
        assert!(!Argon2Hasher.verify("wrong", &hashed).unwrap());
    }

    #[test]
    fn verify_errors_on_garbage_hash() {
        assert!(matches!(
            Argon2Hasher.verify("secret123", "not-a-phc-string"),
            Err(AccountError::PasswordHash(_))
        ));
    }
}
