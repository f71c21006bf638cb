use std::sync::Once;

pub const PLACES_TEST_KEY_ENV: &str = "PLACES_CLIENT_TEST_KEY";
pub const PLACES_TEST_KEY: &str = "secret-key";
pub const TOML_TEST_BASE_URL_ENV: &str = "TOML_CONFIG_TEST_BASE_URL";

static INIT_ENV: Once = Once::new();

/// 單元測試共用的環境變數，在任何請求發出前只設定一次
pub fn init_test_env() {
    INIT_ENV.call_once(|| {
        std::env::set_var(PLACES_TEST_KEY_ENV, PLACES_TEST_KEY);
        std::env::set_var(TOML_TEST_BASE_URL_ENV, "http://127.0.0.1:9000");
    });
}
