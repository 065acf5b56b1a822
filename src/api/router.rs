use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{budgets::*, health, transactions::*};
use crate::utils::app_config::AppConfig;

pub fn build_router(app_config: AppConfig) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Transactions
        .route("/api/transactions", get(get_transactions).post(create_transaction))
        .route(
            "/api/transactions/:id",
            put(update_transaction).delete(delete_transaction),
        )
        // Budgets
        .route("/api/budgets", get(get_budgets).post(create_budget))
        .route("/api/budgets/:id", put(update_budget).delete(delete_budget))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}
