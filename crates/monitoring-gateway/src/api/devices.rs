//! `/devices` and `/devices/:id` handlers.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use monitoring_core::error::{MonitoringError, Result};
use monitoring_core::Device;

use crate::api::ApiError;
use crate::app_state::AppState;

pub const DEVICES_ALLOW: &str = "GET, POST";
pub const DEVICE_ALLOW: &str = "PUT";

/// `GET /devices`
pub async fn list_devices(State(app): State<AppState>) -> std::result::Result<Response, ApiError> {
    let devices = app.fleet().list().await;
    let body = Device::list_to_json(&devices)?;
    tracing::debug!(count = devices.len(), "listed devices");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// `POST /devices`
pub async fn create_device(
    State(app): State<AppState>,
    body: Bytes,
) -> std::result::Result<Response, ApiError> {
    let device = Device::from_json(&body).inspect_err(|e| {
        tracing::warn!(error = %e, "create rejected: bad body");
    })?;
    let id = device.id;

    let len = app.fleet().create(device).await.inspect_err(|e| {
        tracing::warn!(id, error = %e, "create rejected");
    })?;
    tracing::info!(id, connected = len, "device created");

    Ok((StatusCode::CREATED, "Device created").into_response())
}

/// `PUT /devices/:id`
pub async fn upgrade_device(
    State(app): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> std::result::Result<Response, ApiError> {
    let id = parse_device_id(&raw_id).inspect_err(|_| {
        tracing::warn!(raw_id = %raw_id, "upgrade rejected: invalid id");
    })?;

    let update = Device::from_json(&body).inspect_err(|e| {
        tracing::warn!(id, error = %e, "upgrade rejected: bad body");
    })?;

    let matched = app.fleet().upgrade(id, &update.firmware).await;
    if matched == 0 {
        tracing::warn!(id, firmware = %update.firmware, "upgrade matched no device");
    } else {
        tracing::info!(id, firmware = %update.firmware, matched, "device upgrading");
    }

    Ok((StatusCode::ACCEPTED, "Device upgrading...").into_response())
}

/// Any other method on `/devices`.
pub async fn devices_method_not_allowed() -> ApiError {
    ApiError(MonitoringError::MethodNotAllowed { allow: DEVICES_ALLOW })
}

/// Any other method on `/devices/:id`.
pub async fn device_method_not_allowed() -> ApiError {
    ApiError(MonitoringError::MethodNotAllowed { allow: DEVICE_ALLOW })
}

/// Path ids are positive integers; anything else is an unknown device route.
pub fn parse_device_id(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(MonitoringError::NotFound(format!("device id {raw}"))),
    }
}
