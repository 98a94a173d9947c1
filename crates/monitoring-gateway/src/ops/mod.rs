//! Operational HTTP endpoints served on the metrics listener.
//!
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::api::ApiError;
use crate::app_state::AppState;
use crate::obs::metrics::{encode_text, TEXT_CONTENT_TYPE};

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body = encode_text(state.registry())?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
        body,
    )
        .into_response())
}
