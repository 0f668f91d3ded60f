use std::sync::Arc;

use anyhow::Result;

use masterblog::infrastructure::jwt::{JwtService, TokenService};
use masterblog::infrastructure::logging::init_logging;
use masterblog::infrastructure::settings::Settings;
use masterblog::presentation::AppState;
use masterblog::server::run_http;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let tokens: Arc<dyn TokenService> = Arc::new(JwtService::new(
        &settings.jwt_secret,
        settings.jwt_ttl_seconds,
    ));
    let state = AppState::in_memory(tokens);

    run_http(&settings, state).await
}
