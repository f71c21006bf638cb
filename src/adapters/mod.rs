// Adapters layer: 外部系統的具體實作

pub mod places_client;

pub use places_client::GooglePlacesClient;
