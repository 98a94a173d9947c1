//! Management API: device routes and their error mapping.

pub mod devices;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use monitoring_core::error::{ClientCode, MonitoringError};

/// HTTP-facing wrapper so core errors can be returned straight from handlers.
#[derive(Debug)]
pub struct ApiError(pub MonitoringError);

impl From<MonitoringError> for ApiError {
    fn from(e: MonitoringError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::Conflict => StatusCode::CONFLICT,
            ClientCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0 {
            MonitoringError::MethodNotAllowed { allow } => {
                (status, [(header::ALLOW, allow)], "Method not allowed\n").into_response()
            }
            MonitoringError::NotFound(_) => (status, "404 page not found\n").into_response(),
            // decode errors go back verbatim
            MonitoringError::BadRequest(msg) => (status, format!("{msg}\n")).into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                (status, format!("{other}\n")).into_response()
            }
        }
    }
}

/// Router-level fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError(MonitoringError::NotFound("route".into()))
}
