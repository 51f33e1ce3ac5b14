//! Bearer-token guard for the transaction routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use tracing::debug;

use crate::auth::Claims;
use crate::error::{AppError, AppResult};
use crate::handlers::http::AppState;

/// Verified token claims, attached to request extensions by [`require_bearer`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

/// Middleware: reject requests without a valid `Authorization: Bearer` token.
/// No header is `MissingToken`; anything unparsable, forged or expired is `InvalidToken`.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let header = request
        .headers()
        .typed_try_get::<Authorization<Bearer>>()
        .map_err(|_| {
            debug!("rejected request: malformed Authorization header");
            AppError::InvalidToken
        })?
        .ok_or_else(|| {
            debug!("rejected request: missing Authorization header");
            AppError::MissingToken
        })?;

    let claims = state.jwt().validate(header.token())?;
    debug!(user_id = claims.id, "bearer accepted");
    request.extensions_mut().insert(AuthUser(claims));

    Ok(next.run(request).await)
}
