//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/stepper", get(transport::stepper::stepper))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
