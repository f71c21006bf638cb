use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 啟動與配置階段的錯誤
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, FinderError>;

/// 上游 Places API 呼叫失敗，不區分原因
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned status {status} for {endpoint}")]
    StatusError { status: u16, endpoint: String },

    #[error("API credential is not set in environment variable {env_var}")]
    MissingCredential { env_var: String },

    #[error("Malformed API response: {message}")]
    MalformedResponse { message: String },
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// HTTP 介面層看得到的錯誤
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Zipcode is required")]
    MissingZipcode,

    #[error("No pharmacies found for the provided zipcode.")]
    NoPharmaciesFound,

    #[error("Failed to fetch data from the API.")]
    Upstream(#[from] LookupError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingZipcode => StatusCode::BAD_REQUEST,
            ApiError::NoPharmaciesFound => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        // Upstream 的細節只寫進日誌，不回傳給呼叫端
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
