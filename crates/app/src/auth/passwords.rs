//! Password hashing.

use std::{fmt, sync::Arc};

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
        rand_core::OsRng,
    },
};
use thiserror::Error;
use tokio::task::{self, JoinError};
use zeroize::Zeroizing;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash(#[source] password_hash::Error),

    #[error("stored password digest is malformed")]
    MalformedDigest(#[source] password_hash::Error),

    #[error("password hashing task failed")]
    Task(#[source] JoinError),
}

/// Argon2id hashing of `password + pepper`.
///
/// Hashing runs on the blocking thread pool.
#[derive(Clone)]
pub struct Passwords {
    pepper: Arc<Zeroizing<String>>,
}

impl Passwords {
    #[must_use]
    pub fn new(pepper: impl Into<String>) -> Self {
        Self {
            pepper: Arc::new(Zeroizing::new(pepper.into())),
        }
    }

    /// Hash a plaintext password into a PHC digest string.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails or the blocking task panics.
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let peppered = self.peppered(password);

        task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);

            Argon2::default()
                .hash_password(peppered.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(PasswordError::Hash)
        })
        .await
        .map_err(PasswordError::Task)?
    }

    /// Check a plaintext password against a stored digest.
    ///
    /// # Errors
    ///
    /// Returns an error if the digest cannot be parsed or the blocking task
    /// panics. A wrong password is `Ok(false)`.
    pub async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let peppered = self.peppered(password);
        let digest = digest.to_owned();

        task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&digest).map_err(PasswordError::MalformedDigest)?;

            match Argon2::default().verify_password(peppered.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(error) => Err(PasswordError::Hash(error)),
            }
        })
        .await
        .map_err(PasswordError::Task)?
    }

    fn peppered(&self, password: &str) -> Zeroizing<String> {
        let mut peppered =
            Zeroizing::new(String::with_capacity(password.len() + self.pepper.len()));

        peppered.push_str(password);
        peppered.push_str(&self.pepper);

        peppered
    }
}

impl fmt::Debug for Passwords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passwords(**redacted**)")
    }
}
