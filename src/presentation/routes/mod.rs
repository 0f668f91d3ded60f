use axum::Router;

use super::AppState;

pub mod auth;
pub mod posts;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/api/posts", posts::router(state))
}
