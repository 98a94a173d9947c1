//! Axum router wiring.
//!
//! The management API and the scrape endpoint are separate routers so they
//! can be served on separate listeners.

use axum::{
    routing::{get, put},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/devices",
            get(api::devices::list_devices)
                .post(api::devices::create_device)
                .head(api::devices::devices_method_not_allowed)
                .fallback(api::devices::devices_method_not_allowed),
        )
        .route(
            "/devices/:id",
            put(api::devices::upgrade_device).fallback(api::devices::device_method_not_allowed),
        )
        .fallback(api::not_found)
        .with_state(state)
}

pub fn build_metrics_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
