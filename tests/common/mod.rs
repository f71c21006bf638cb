use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use clap::Parser;
use pharmacy_finder::{PharmacyServer, ServerConfig};
use std::sync::Once;
use tower::util::ServiceExt;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_KEY_ENV: &str = "PHARMACY_FINDER_TEST_API_KEY";
pub const UNSET_API_KEY_ENV: &str = "PHARMACY_FINDER_TEST_API_KEY_NEVER_SET";

static INIT_ENV: Once = Once::new();

/// 只在任何請求發出前設定一次環境變數
pub fn init_test_env() {
    INIT_ENV.call_once(|| {
        std::env::set_var(TEST_API_KEY_ENV, TEST_API_KEY);
    });
}

/// 以指定的上游位址建立 router；`with_key` 為 false 時使用未設定的環境變數
pub fn build_router(places_base_url: &str, with_key: bool) -> Router {
    init_test_env();
    let key_env = if with_key { TEST_API_KEY_ENV } else { UNSET_API_KEY_ENV };

    let config = ServerConfig::parse_from([
        "pharmacy-finder",
        "--places-base-url",
        places_base_url,
        "--api-key-env",
        key_env,
        "--timeout-seconds",
        "2",
    ]);

    PharmacyServer::build(config)
        .expect("Failed to build server")
        .router()
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn details_body(name: &str, address: &str) -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "result": {
            "name": name,
            "formatted_address": address,
            "formatted_phone_number": "(617) 555-0100",
            "opening_hours": {
                "open_now": true,
                "weekday_text": ["Monday: 8:00 AM – 10:00 PM", "Tuesday: 8:00 AM – 10:00 PM"]
            }
        }
    })
}
