use crate::core::extract::pharmacy_from_details;
use crate::domain::model::PharmacyCollection;
use crate::domain::ports::PlacesProvider;
use crate::utils::error::{LookupError, LookupResult};
use serde_json::Value;
use std::sync::Arc;

/// 組合文字搜尋的查詢字串
pub fn search_query(zipcode: &str) -> String {
    format!("pharmacy in {}", zipcode)
}

/// 從文字搜尋回應取出 place_id 清單；沒有 `results` 視為零筆
pub fn place_ids(search_response: &Value) -> LookupResult<Vec<String>> {
    let results = match search_response.get("results") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(results)) => results,
        Some(other) => {
            return Err(LookupError::MalformedResponse {
                message: format!("'results' is not a list: {}", other),
            })
        }
    };

    results
        .iter()
        .enumerate()
        .map(|(index, place)| {
            place
                .get("place_id")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| LookupError::MalformedResponse {
                    message: format!("search result {} has no place_id", index),
                })
        })
        .collect()
}

/// 郵遞區號 → 藥局集合：一次文字搜尋，再逐一查詢地點詳情。
///
/// 任一呼叫失敗即中止整個查詢，不回傳部分結果。
#[derive(Clone)]
pub struct PharmacyLookup {
    provider: Arc<dyn PlacesProvider>,
}

impl PharmacyLookup {
    pub fn new(provider: Arc<dyn PlacesProvider>) -> Self {
        Self { provider }
    }

    pub async fn find_pharmacies(&self, zipcode: &str) -> LookupResult<PharmacyCollection> {
        let query = search_query(zipcode);
        tracing::debug!("🔍 Text search for: {}", query);

        let search_response = self.provider.text_search(&query).await?;
        let ids = place_ids(&search_response)?;
        tracing::debug!("📍 Text search returned {} place ids", ids.len());

        let mut pharmacies = PharmacyCollection::new();
        for (index, place_id) in ids.iter().enumerate() {
            tracing::debug!("📡 Details call {}/{}: {}", index + 1, ids.len(), place_id);

            let details = self.provider.place_details(place_id).await?;
            let (name, record) = pharmacy_from_details(&details);

            if pharmacies.insert(name.clone(), record).is_some() {
                tracing::warn!("Duplicate pharmacy name '{}', keeping the later result", name);
            }
        }

        Ok(pharmacies)
    }
}
