//! HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format
//! - `/v1/bindings/:name/policy` : published policy assertion (XML)
//! - `/v1/bindings/:name/check/:direction` : header compliance for one message
//! - `/v1/references` : resolved service references

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use wsaddr_core::{HeaderSet, Verdict};

use crate::app_state::AppState;
use crate::binding::Direction;
use crate::pipeline::ProtocolFault;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown binding: {0}")]
    UnknownBinding(String),
    #[error("invalid header set: {0}")]
    BadHeaders(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::UnknownBinding(_) => StatusCode::NOT_FOUND,
            // Kept apart from the 422 used for compliance rejects.
            ApiError::BadHeaders(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn binding_policy(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let binding = state
        .binding(&name)
        .ok_or_else(|| ApiError::UnknownBinding(name.clone()))?;
    state.metrics().policy_requests.inc(&[("binding", binding.name())]);

    // Disabled addressing publishes an empty fragment.
    let body = binding.policy_fragment().to_xml();
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        body,
    )
        .into_response())
}

pub async fn binding_check(
    State(state): State<AppState>,
    Path((name, direction)): Path<(String, Direction)>,
    body: Result<Json<HeaderSet>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(headers) = body.map_err(|e| ApiError::BadHeaders(e.body_text()))?;
    let pipeline = state
        .pipeline(&name)
        .ok_or_else(|| ApiError::UnknownBinding(name.clone()))?;

    let resp = match pipeline.check(direction, &headers) {
        Verdict::Accept => (StatusCode::OK, Json(json!({ "verdict": "accept" }))).into_response(),
        Verdict::Reject(violation) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "verdict": "reject",
                "violation": violation.as_str(),
                "fault": ProtocolFault::from(violation),
            })),
        )
            .into_response(),
    };
    Ok(resp)
}

pub async fn references(State(state): State<AppState>) -> impl IntoResponse {
    let refs: Vec<_> = state
        .references()
        .iter()
        .map(|r| {
            json!({
                "name": r.name,
                "service": r.service,
                "service_type": r.service_type,
                "address": r.address,
                "role": r.binding.role(),
                "addressing": r.binding.addressing().is_enabled(),
            })
        })
        .collect();
    Json(refs)
}
