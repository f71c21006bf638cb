//! Typed access to untyped provider JSON.
//!
//! Every "missing field" decision goes through [`extract_field`]: a value that is
//! absent, `null`, or of the wrong shape becomes [`FieldValue::NotAvailable`].

use crate::domain::model::{FieldValue, PharmacyRecord};
use serde_json::Value;

/// 可從 JSON 值轉換的欄位型別
pub trait FromJsonField: Sized {
    fn from_json(value: &Value) -> Option<Self>;
}

impl FromJsonField for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromJsonField for Vec<String> {
    fn from_json(value: &Value) -> Option<Self> {
        value
            .as_array()?
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    }
}

/// 依路徑取出欄位，例如 `["opening_hours", "weekday_text"]`
pub fn extract_field<T: FromJsonField>(value: &Value, path: &[&str]) -> FieldValue<T> {
    path.iter()
        .try_fold(value, |current, key| current.get(*key))
        .and_then(T::from_json)
        .map_or(FieldValue::NotAvailable, FieldValue::Present)
}

/// 將地點詳情回應轉為 (名稱, 藥局資料)
pub fn pharmacy_from_details(details: &Value) -> (String, PharmacyRecord) {
    let result = details.get("result").unwrap_or(&Value::Null);

    let name = extract_field::<String>(result, &["name"]).into_string();
    let record = PharmacyRecord {
        address: extract_field(result, &["formatted_address"]),
        phone_number: extract_field(result, &["formatted_phone_number"]),
        opening_hours: extract_field(result, &["opening_hours", "weekday_text"]),
    };

    (name, record)
}
