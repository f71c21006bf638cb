use crate::utils::error::LookupResult;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn places_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn api_key_env(&self) -> &str;
}

/// 外部地點搜尋服務：文字搜尋與地點詳情兩個端點，回傳原始 JSON
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn text_search(&self, query: &str) -> LookupResult<serde_json::Value>;
    async fn place_details(&self, place_id: &str) -> LookupResult<serde_json::Value>;
}
