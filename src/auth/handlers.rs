//! Auth HTTP handlers: login, register.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::http::{AppJson, AppState};
use crate::models::PublicUser;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 4, max = 64, message = "username must be 4 to 64 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 128, message = "password must be 8 to 128 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: PublicUser,
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .auth_service()
        .authenticate(&body.username, &body.password)
        .await?;
    let token = state.jwt().issue(&user)?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer",
        expires_in: state.jwt().ttl_secs(),
    }))
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    AppJson(mut body): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    body.username = body.username.trim().to_string();
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = state
        .auth_service()
        .register(&body.username, &body.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            user: PublicUser::from(&user),
        }),
    ))
}
