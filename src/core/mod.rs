pub mod extract;
pub mod lookup;

pub use crate::domain::model::{FieldValue, PharmacyCollection, PharmacyRecord, NOT_AVAILABLE};
pub use crate::domain::ports::{ConfigProvider, PlacesProvider};
pub use crate::utils::error::{LookupError, LookupResult};
