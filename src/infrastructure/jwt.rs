use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token encode failed")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token decode/validation failed")]
    Decode(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies bearer credentials for a subject (the username).
/// Handlers and middleware only see this seam, so the signing mechanism can
/// be swapped without touching them.
pub trait TokenService: Send + Sync {
    fn issue(&self, subject: &str) -> Result<String, TokenError>;
    fn verify(&self, token: &str) -> Result<String, TokenError>;
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct Claims {
    sub: String,
    exp: i64,
}

pub struct JwtService {
    secret: String,
    ttl_seconds: i64,
}

impl JwtService {
    const DEFAULT_TTL_SECONDS: i64 = 24 * 60 * 60;

    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        let ttl_seconds = if ttl_seconds > 0 {
            ttl_seconds
        } else {
            Self::DEFAULT_TTL_SECONDS
        };

        JwtService {
            secret: secret.into(),
            ttl_seconds,
        }
    }
}

impl TokenService for JwtService {
    fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let exp = (Utc::now() + Duration::seconds(self.ttl_seconds)).timestamp();

        let claims = Claims {
            sub: subject.into(),
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Encode)
    }

    fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 10;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(TokenError::Decode)?;

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::{JwtService, TokenService};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn issued_token_verifies_to_the_same_subject() {
        let jwt = JwtService::new(SECRET, 3600);
        let token = jwt.issue("alice").expect("issue must succeed");

        let subject = jwt.verify(&token).expect("verify must succeed");
        assert_eq!(subject, "alice");
    }

    #[test]
    fn garbage_token_is_rejected() {
        let jwt = JwtService::new(SECRET, 3600);
        assert!(jwt.verify("not-a-token").is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtService::new(SECRET, 3600);
        let verifier = JwtService::new("ffffffffffffffffffffffffffffffff", 3600);

        let token = issuer.issue("alice").expect("issue must succeed");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn non_positive_ttl_falls_back_to_default() {
        let jwt = JwtService::new(SECRET, 0);
        let token = jwt.issue("alice").expect("issue must succeed");
        assert!(jwt.verify(&token).is_ok());
    }
}
