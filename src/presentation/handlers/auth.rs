use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::user::AuthRequest;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

/// Fields are optional so an absent one turns into the "Missing username or
/// password" 400 instead of a body-decoding rejection.
#[derive(Debug, Deserialize)]
pub struct AuthDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AccessTokenDto {
    pub access_token: String,
}

impl From<AuthDto> for AuthRequest {
    fn from(dto: AuthDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
        }
    }
}

pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<AuthDto>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.auth_service.register(dto.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "User registered successfully".to_string(),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<AuthDto>,
) -> AppResult<(StatusCode, Json<AccessTokenDto>)> {
    let access_token = state.auth_service.login(dto.into()).await?;

    Ok((StatusCode::OK, Json(AccessTokenDto { access_token })))
}
