//! Shared HTTP plumbing: application state, JSON extractor, health.

use std::sync::Arc;

use axum::{extract::FromRequest, http::StatusCode, Json};
use serde_json::json;

use crate::auth::{AuthAppService, JwtKeys};
use crate::error::AppError;
use crate::repositories::{TransactionRepository, UserRepository};
use crate::services::TransactionService;

/// Shared application state, built once at startup and cloned into handlers.
#[derive(Clone)]
pub struct AppState {
    pub jwt: JwtKeys,
    pub auth_service: AuthAppService,
    pub transaction_service: TransactionService,
}

impl AppState {
    pub fn new(
        jwt: JwtKeys,
        users: Arc<dyn UserRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            jwt,
            auth_service: AuthAppService::new(users),
            transaction_service: TransactionService::new(transactions),
        }
    }

    pub fn jwt(&self) -> &JwtKeys {
        &self.jwt
    }
    pub fn auth_service(&self) -> &AuthAppService {
        &self.auth_service
    }
    pub fn transaction_service(&self) -> &TransactionService {
        &self.transaction_service
    }
}

/// `Json` extractor whose rejections become `AppError::Validation`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "ledger-api" })),
    )
}
