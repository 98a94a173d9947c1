#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use axum::http::{header, StatusCode};
use serde_json::{json, Value};

use common::{default_state, send};
use monitoring_gateway::app_state::UPGRADE_KIND;
use monitoring_gateway::router::build_api_router;

async fn list(app: &axum::Router) -> Vec<Value> {
    let r = send(app, "GET", "/devices", "").await;
    assert_eq!(r.status, StatusCode::OK);
    serde_json::from_str::<Value>(&r.body).unwrap().as_array().unwrap().clone()
}

#[tokio::test]
async fn lists_seed_devices_in_order() {
    let app = build_api_router(default_state());

    let r = send(&app, "GET", "/devices", "").await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.headers[header::CONTENT_TYPE], "application/json");

    let body: Value = serde_json::from_str(&r.body).unwrap();
    assert_eq!(
        body,
        json!([
            {"id": 1, "mac": "65:D0:E8:1A:26:EA", "firmware": "2.1.6"},
            {"id": 2, "mac": "65:D0:E9:2A:44:EB", "firmware": "1.1.2"}
        ])
    );
}

#[tokio::test]
async fn create_appends_and_updates_gauge() {
    let state = default_state();
    let app = build_api_router(state.clone());

    let r = send(
        &app,
        "POST",
        "/devices",
        r#"{"id":3,"mac":"AA:BB:CC:DD:EE:FF","firmware":"1.0.0"}"#,
    )
    .await;
    assert_eq!(r.status, StatusCode::CREATED);
    assert_eq!(r.body, "Device created");

    let devices = list(&app).await;
    assert_eq!(devices.len(), 3);
    assert_eq!(
        devices[2],
        json!({"id": 3, "mac": "AA:BB:CC:DD:EE:FF", "firmware": "1.0.0"})
    );
    assert_eq!(state.fleet().metrics().connected_devices(), 3);
}

#[tokio::test]
async fn malformed_create_is_rejected() {
    let state = default_state();
    let app = build_api_router(state.clone());

    let r = send(&app, "POST", "/devices", r#"{"id":"#).await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert!(r.body.contains("EOF"), "parser message expected, got {:?}", r.body);

    assert_eq!(list(&app).await.len(), 2);
    assert_eq!(state.fleet().metrics().connected_devices(), 2);
}

#[tokio::test]
async fn duplicate_create_conflicts() {
    let state = default_state();
    let app = build_api_router(state.clone());

    let r = send(&app, "POST", "/devices", r#"{"id":1,"mac":"X","firmware":"0"}"#).await;
    assert_eq!(r.status, StatusCode::CONFLICT);

    let devices = list(&app).await;
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0]["mac"], "65:D0:E8:1A:26:EA");
}

#[tokio::test]
async fn upgrade_sets_firmware_and_counts() {
    let state = default_state();
    let app = build_api_router(state.clone());
    let before = state.fleet().metrics().upgrades(UPGRADE_KIND);

    let r = send(&app, "PUT", "/devices/1", r#"{"firmware":"3.0.0"}"#).await;
    assert_eq!(r.status, StatusCode::ACCEPTED);
    assert_eq!(r.body, "Device upgrading...");

    let devices = list(&app).await;
    assert_eq!(devices[0]["firmware"], "3.0.0");
    assert_eq!(devices[0]["mac"], "65:D0:E8:1A:26:EA");
    assert_eq!(devices[1]["firmware"], "1.1.2");
    assert_eq!(state.fleet().metrics().upgrades(UPGRADE_KIND), before + 1);
}

#[tokio::test]
async fn upgrade_of_unknown_device_is_still_accepted() {
    let state = default_state();
    let app = build_api_router(state.clone());

    let r = send(&app, "PUT", "/devices/99", r#"{"firmware":"3.0.0"}"#).await;
    assert_eq!(r.status, StatusCode::ACCEPTED);
    assert_eq!(state.fleet().metrics().upgrades(UPGRADE_KIND), 1);

    let devices = list(&app).await;
    assert_eq!(devices[0]["firmware"], "2.1.6");
    assert_eq!(devices[1]["firmware"], "1.1.2");
}

#[tokio::test]
async fn invalid_ids_stop_before_any_update() {
    let state = default_state();
    let app = build_api_router(state.clone());

    for path in ["/devices/abc", "/devices/0", "/devices/-4", "/devices/1.5"] {
        let r = send(&app, "PUT", path, r#"{"firmware":"6.6.6"}"#).await;
        assert_eq!(r.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(r.body, "404 page not found\n");
    }

    let devices = list(&app).await;
    assert_eq!(devices[0]["firmware"], "2.1.6");
    assert_eq!(devices[1]["firmware"], "1.1.2");
    assert_eq!(state.fleet().metrics().upgrades(UPGRADE_KIND), 0);
}

#[tokio::test]
async fn malformed_upgrade_is_rejected() {
    let state = default_state();
    let app = build_api_router(state.clone());

    let r = send(&app, "PUT", "/devices/1", "not json").await;
    assert_eq!(r.status, StatusCode::BAD_REQUEST);
    assert_eq!(state.fleet().metrics().upgrades(UPGRADE_KIND), 0);
    assert_eq!(list(&app).await[0]["firmware"], "2.1.6");
}

#[tokio::test]
async fn unsupported_methods_report_allow() {
    let app = build_api_router(default_state());

    let r = send(&app, "DELETE", "/devices", "").await;
    assert_eq!(r.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(r.headers[header::ALLOW], "GET, POST");

    let r = send(&app, "HEAD", "/devices", "").await;
    assert_eq!(r.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(r.headers[header::ALLOW], "GET, POST");

    let r = send(&app, "GET", "/devices/1", "").await;
    assert_eq!(r.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(r.headers[header::ALLOW], "PUT");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = build_api_router(default_state());
    let r = send(&app, "GET", "/routers", "").await;
    assert_eq!(r.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upgrade_accepts_field_names_in_any_case() {
    let app = build_api_router(default_state());

    let r = send(&app, "PUT", "/devices/1", r#"{"Firmware":"3.0.0"}"#).await;
    assert_eq!(r.status, StatusCode::ACCEPTED);
    assert_eq!(list(&app).await[0]["firmware"], "3.0.0");
}

#[tokio::test]
async fn create_reads_only_the_first_json_value() {
    let app = build_api_router(default_state());

    let r = send(&app, "POST", "/devices", r#"{"id":9,"mac":"AA","firmware":"1"} {}"#).await;
    assert_eq!(r.status, StatusCode::CREATED);

    let devices = list(&app).await;
    assert_eq!(devices.len(), 3);
    assert_eq!(devices[2]["id"], 9);
}
