//! Axum router wiring.
//!
//! Publishes per-binding policy metadata, runs compliance checks, and exposes
//! operational endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .route("/v1/bindings/:name/policy", get(ops::binding_policy))
        .route("/v1/bindings/:name/check/:direction", post(ops::binding_check))
        .route("/v1/references", get(ops::references))
        .with_state(state)
}
