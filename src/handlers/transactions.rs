//! Transaction HTTP handlers. All routes sit behind `require_bearer`.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::handlers::http::{AppJson, AppState};
use crate::middleware::AuthUser;
use crate::models::{CreateTransactionRequest, Transaction};

#[derive(Debug, Serialize)]
pub struct CreateTransactionResponse {
    pub success: bool,
    pub transaction: Transaction,
}

/// GET /transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> AppResult<Json<Vec<Transaction>>> {
    let transactions = state.transaction_service().list().await?;
    tracing::debug!(user_id = claims.id, count = transactions.len(), "listed via api");
    Ok(Json(transactions))
}

/// POST /transactions
pub async fn create_transaction(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    AppJson(body): AppJson<CreateTransactionRequest>,
) -> AppResult<Json<CreateTransactionResponse>> {
    let transaction = state.transaction_service().create(body).await?;
    tracing::debug!(user_id = claims.id, id = transaction.id, "created via api");
    Ok(Json(CreateTransactionResponse {
        success: true,
        transaction,
    }))
}

/// DELETE /transactions/:id
pub async fn delete_transaction(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let id: u64 = id
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid transaction id: {}", id)))?;
    let removed = state.transaction_service().delete(id).await?;
    tracing::debug!(user_id = claims.id, id = removed.id, "deleted via api");
    Ok(Json(json!({ "success": true, "id": removed.id })))
}
