pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::GooglePlacesClient;
pub use config::ServerConfig;
pub use core::lookup::PharmacyLookup;
pub use domain::model::{FieldValue, PharmacyCollection, PharmacyRecord, NOT_AVAILABLE};
pub use server::PharmacyServer;
pub use utils::error::{ApiError, FinderError, LookupError, Result};
