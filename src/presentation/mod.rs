use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::blog_service::BlogService;
use crate::data::repositories::memory::{InMemoryPostRepository, InMemoryUserRepository};
use crate::infrastructure::jwt::TokenService;

pub mod app_error;
pub mod handlers;
pub mod middleware;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<InMemoryUserRepository>>,
    pub blog_service: Arc<BlogService<InMemoryPostRepository>>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Wires the services over fresh in-memory stores. Each call builds a
    /// fully isolated state, which is what the tests rely on.
    pub fn in_memory(tokens: Arc<dyn TokenService>) -> Self {
        Self::with_post_repository(tokens, InMemoryPostRepository::new())
    }

    pub fn with_post_repository(
        tokens: Arc<dyn TokenService>,
        posts: InMemoryPostRepository,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                InMemoryUserRepository::new(),
                tokens.clone(),
            )),
            blog_service: Arc::new(BlogService::new(posts)),
            tokens,
        }
    }
}
