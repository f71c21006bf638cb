use crate::domain::model::PharmacyCollection;
use crate::server::AppState;
use crate::utils::error::ApiError;
use axum::extract::{RawQuery, State};
use axum::Json;
use url::form_urlencoded;

pub const WELCOME_MESSAGE: &str = "Welcome to the Pharmacy API!";

/// 取 query string 中第一個同名參數；重複出現時其餘的值會被忽略
pub fn first_query_value(raw_query: Option<&str>, key: &str) -> Option<String> {
    let mut values = form_urlencoded::parse(raw_query?.as_bytes())
        .filter(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned());

    let first = values.next();
    let ignored = values.count();
    if ignored > 0 {
        tracing::warn!(
            "Query parameter '{}' repeated, ignoring {} extra value(s)",
            key,
            ignored
        );
    }
    first
}

pub async fn home() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn get_pharmacies(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<PharmacyCollection>, ApiError> {
    let zipcode = first_query_value(raw_query.as_deref(), "zipcode");
    tracing::debug!("Received request for zipcode: {:?}", zipcode);

    let zipcode = match zipcode {
        Some(zipcode) if !zipcode.is_empty() => zipcode,
        _ => return Err(ApiError::MissingZipcode),
    };

    let pharmacies = state
        .lookup
        .find_pharmacies(&zipcode)
        .await
        .map_err(|e| {
            tracing::error!("API request failed: {}", e);
            ApiError::Upstream(e)
        })?;

    if pharmacies.is_empty() {
        tracing::warn!("No pharmacies found for zipcode: {}", zipcode);
        return Err(ApiError::NoPharmaciesFound);
    }

    tracing::debug!("Pharmacies found: {:?}", pharmacies);
    Ok(Json(pharmacies))
}
