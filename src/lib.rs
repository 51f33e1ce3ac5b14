//! Personal finance tracker API.
//!
//! Password login issues short-lived JWTs; the bearer token guards an
//! in-memory ledger of transactions that can be listed, created and deleted.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;
pub use services::TransactionService;

use axum::routing::{delete, get, post};
use handlers::http;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router (auth, transactions, health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let transaction_routes = axum::Router::new()
        .route(
            "/transactions",
            get(handlers::list_transactions).post(handlers::create_transaction),
        )
        .route("/transactions/:id", delete(handlers::delete_transaction))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_bearer,
        ));

    axum::Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/health", get(http::health))
        .merge(transaction_routes)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|req: &axum::http::Request<_>| {
                            let method = req.method().clone();
                            let uri = req.uri().clone();
                            tracing::info_span!("http_request", %method, %uri)
                        })
                        .on_response(
                            |res: &axum::http::Response<_>,
                             latency: std::time::Duration,
                             _span: &tracing::Span| {
                                let status = res.status();
                                if status.is_server_error() {
                                    tracing::error!(%status, ?latency, "response");
                                } else {
                                    tracing::info!(%status, ?latency, "response");
                                }
                            },
                        ),
                )
                .layer(CorsLayer::permissive()),
        )
}
