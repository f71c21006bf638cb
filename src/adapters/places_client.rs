use crate::domain::ports::{ConfigProvider, PlacesProvider};
use crate::utils::error::{LookupError, LookupResult, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_PLACES_API_KEY";

const TEXT_SEARCH_ENDPOINT: &str = "textsearch/json";
const DETAILS_ENDPOINT: &str = "details/json";

/// Google Places 的 text search / details HTTP 客戶端
pub struct GooglePlacesClient {
    base_url: String,
    api_key_env: String,
    client: Client,
}

impl GooglePlacesClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            base_url: config.places_base_url().trim_end_matches('/').to_string(),
            api_key_env: config.api_key_env().to_string(),
            client,
        })
    }

    /// 每次呼叫時才讀取 API key，不在啟動時檢查
    fn api_key(&self) -> LookupResult<String> {
        std::env::var(&self.api_key_env).map_err(|_| LookupError::MissingCredential {
            env_var: self.api_key_env.clone(),
        })
    }

    async fn get_json(&self, endpoint: &str, params: &[(&str, &str)]) -> LookupResult<Value> {
        let api_key = self.api_key()?;
        let url = format!("{}/{}", self.base_url, endpoint);

        // URL 不含 query，避免把 key 寫進日誌
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            tracing::error!("Places API {} returned {}", endpoint, status);
            return Err(LookupError::StatusError {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("API response: {}", body);

        serde_json::from_str(&body).map_err(|e| LookupError::MalformedResponse {
            message: format!("{} returned invalid JSON: {}", endpoint, e),
        })
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesClient {
    async fn text_search(&self, query: &str) -> LookupResult<Value> {
        self.get_json(TEXT_SEARCH_ENDPOINT, &[("query", query)]).await
    }

    async fn place_details(&self, place_id: &str) -> LookupResult<Value> {
        self.get_json(DETAILS_ENDPOINT, &[("place_id", place_id)]).await
    }
}
