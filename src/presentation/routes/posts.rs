use axum::Router;
use axum::middleware;
use axum::routing::{get, put};

use crate::presentation::AppState;
use crate::presentation::handlers::posts::{
    create_post, delete_post, list_posts, search_posts, update_post,
};
use crate::presentation::middleware::auth::bearer_auth_middleware;

/// Every post route sits behind the bearer-token gate.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/search", get(search_posts))
        .route("/{id}", put(update_post).delete(delete_post))
        .layer(middleware::from_fn_with_state(
            state,
            bearer_auth_middleware,
        ))
}
