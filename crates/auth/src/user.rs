//! User records and credential handling.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use assettrack_core::UserId;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// A registered user.
///
/// `password_hash` is an argon2id PHC string. The full record is what the
/// store persists; anything that leaves the process goes through
/// [`UserProfile`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user (no credential material).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Register a new user with a plaintext password (hashed here, never stored).
    pub fn register(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Self, AuthError> {
        let name = name.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(AuthError::Validation("name cannot be empty".to_string()));
        }
        if !email.contains('@') {
            return Err(AuthError::Validation(format!("'{email}' is not an email address")));
        }
        if password.len() < 8 {
            return Err(AuthError::Validation(
                "password must be at least 8 characters".to_string(),
            ));
        }

        let password_hash = Self::hash_password(password)?;

        Ok(Self {
            id,
            name,
            email,
            password_hash,
            created_at,
        })
    }

    /// Hash a password using argon2id.
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Verify a plaintext password against the stored hash.
    pub fn verify_password(&self, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(password: &str) -> Result<User, AuthError> {
        User::register(UserId::new(), "Asha", "asha@example.com", password, Utc::now())
    }

    #[test]
    fn register_hashes_and_verifies_password() {
        let user = register("correct horse battery").unwrap();

        assert_ne!(user.password_hash, "correct horse battery");
        assert!(user.verify_password("correct horse battery"));
        assert!(!user.verify_password("wrong password"));
    }

    #[test]
    fn register_rejects_short_password() {
        let err = register("short").unwrap_err();
        match err {
            AuthError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn register_rejects_malformed_email() {
        let err = User::register(UserId::new(), "Asha", "not-an-email", "long enough", Utc::now())
            .unwrap_err();
        match err {
            AuthError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn profile_carries_no_credential_material() {
        let user = register("correct horse battery").unwrap();
        let json = serde_json::to_value(user.profile()).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
