use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::error::DomainError;

/// In-memory user store: username to password hash. The uniqueness check and
/// the insert happen under one write lock.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, String>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, input: NewUser) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        if users.contains_key(&input.username) {
            return Err(DomainError::AlreadyExists);
        }
        users.insert(input.username, input.password_hash);
        Ok(())
    }

    async fn find_password_hash(&self, username: &str) -> Result<Option<String>, DomainError> {
        Ok(self.users.read().await.get(username).cloned())
    }
}
