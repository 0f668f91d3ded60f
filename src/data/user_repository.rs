use async_trait::async_trait;

use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user; fails with `AlreadyExists` on a duplicate username.
    async fn create_user(&self, input: NewUser) -> Result<(), DomainError>;
    async fn find_password_hash(&self, username: &str) -> Result<Option<String>, DomainError>;
}
