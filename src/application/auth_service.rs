use std::sync::Arc;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::AuthRequest;
use crate::infrastructure::jwt::TokenService;

pub struct AuthService<R: UserRepository> {
    repo: R,
    tokens: Arc<dyn TokenService>,
}

impl<R: UserRepository> AuthService<R> {
    const DUMMY_PASSWORD_HASH: &'static str = "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$gwN6hT1sNdk9kI95f7n2Gl3fL0qRmBf2Ffkj2r90/0M";

    pub fn new(repo: R, tokens: Arc<dyn TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn register(&self, req: AuthRequest) -> Result<(), DomainError> {
        let creds = req.validate()?;

        let password_hash = self.hash_password(&creds.password)?;
        self.repo
            .create_user(NewUser {
                username: creds.username,
                password_hash,
            })
            .await
    }

    pub async fn login(&self, req: AuthRequest) -> Result<String, DomainError> {
        let creds = req.validate()?;

        let password_hash = match self.repo.find_password_hash(&creds.username).await? {
            Some(password_hash) => password_hash,
            None => {
                // verify against a dummy hash so the unknown-user path takes
                // about as long as a wrong-password one
                match self.verify_password(&creds.password, Self::DUMMY_PASSWORD_HASH) {
                    Ok(()) | Err(DomainError::InvalidCredentials) => {}
                    Err(err) => return Err(err),
                }
                return Err(DomainError::InvalidCredentials);
            }
        };

        self.verify_password(&creds.password, &password_hash)?;

        self.tokens
            .issue(&creds.username)
            .map_err(|err| DomainError::Unexpected(err.to_string()))
    }

    pub fn hash_password(&self, raw_password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Self::argon2()?
            .hash_password(raw_password.as_bytes(), &salt)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Ok(password_hash.to_string())
    }

    pub fn verify_password(
        &self,
        raw_password: &str,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Self::argon2()?
            .verify_password(raw_password.as_bytes(), &parsed_hash)
            .map_err(|err| match err {
                PasswordHashError::Password => DomainError::InvalidCredentials,
                _ => DomainError::Unexpected(err.to_string()),
            })?;

        Ok(())
    }

    fn argon2() -> Result<Argon2<'static>, DomainError> {
        let params = Params::new(19 * 1024, 2, 1, None)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}
