/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /persons
 * - Bearer 検証 middleware は app 側で apply する (tests は素の routes を組める)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::v1::handlers::{health::health, persons::create_person};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/persons", post(create_person))
}
