use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::{Claims, TokenValidationError, validate_claims};

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("token is malformed or has a bad signature: {0}")]
    Malformed(String),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Verifies a bearer token and returns its claims.
///
/// Object-safe so the HTTP layer can hold an `Arc<dyn JwtValidator>`.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError>;
}

/// HS256 signer/validator over a shared secret.
pub struct Hs256JwtValidator {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Hs256JwtValidator {
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            encoding: EncodingKey::from_secret(&secret),
            decoding: DecodingKey::from_secret(&secret),
        }
    }

    /// Sign a token for the given claims (used by the login endpoint).
    pub fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| JwtError::Malformed(e.to_string()))
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        // Expiry is a custom claim here (`expires_at`), validated below via
        // `validate_claims` with an explicit `now`; disable the library's
        // registered-claim checks.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| JwtError::Malformed(e.to_string()))?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assettrack_core::UserId;
    use chrono::Duration;

    fn validator() -> Hs256JwtValidator {
        Hs256JwtValidator::new(b"test-secret".to_vec())
    }

    fn claims(now: DateTime<Utc>) -> Claims {
        Claims {
            sub: UserId::new(),
            issued_at: now,
            expires_at: now + Duration::minutes(10),
        }
    }

    #[test]
    fn sign_then_validate_round_trips_claims() {
        let jwt = validator();
        let now = Utc::now();
        let claims = claims(now);

        let token = jwt.sign(&claims).unwrap();
        let decoded = jwt.validate(&token, now + Duration::minutes(1)).unwrap();

        assert_eq!(decoded, claims);
    }

    #[test]
    fn validate_rejects_expired_token() {
        let jwt = validator();
        let now = Utc::now();
        let token = jwt.sign(&claims(now)).unwrap();

        let err = jwt.validate(&token, now + Duration::hours(1)).unwrap_err();
        match err {
            JwtError::Claims(TokenValidationError::Expired) => {}
            other => panic!("expected expired-claims error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_token_signed_with_other_secret() {
        let now = Utc::now();
        let token = Hs256JwtValidator::new(b"other-secret".to_vec())
            .sign(&claims(now))
            .unwrap();

        let err = validator().validate(&token, now).unwrap_err();
        match err {
            JwtError::Malformed(_) => {}
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_garbage() {
        let err = validator().validate("not.a.jwt", Utc::now()).unwrap_err();
        match err {
            JwtError::Malformed(_) => {}
            other => panic!("expected Malformed, got {other:?}"),
        }
    }
}
