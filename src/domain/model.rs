use serde::ser::{Serialize, Serializer};

/// 上游缺少欄位時使用的替代值
pub const NOT_AVAILABLE: &str = "N/A";

/// 從上游取得的欄位：有值，或以 "N/A" 取代
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<T> {
    Present(T),
    NotAvailable,
}

impl FieldValue<String> {
    pub fn into_string(self) -> String {
        match self {
            FieldValue::Present(value) => value,
            FieldValue::NotAvailable => NOT_AVAILABLE.to_string(),
        }
    }
}

impl<T: Serialize> Serialize for FieldValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Present(value) => value.serialize(serializer),
            FieldValue::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// 單一藥局的扁平化資料
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PharmacyRecord {
    pub address: FieldValue<String>,
    pub phone_number: FieldValue<String>,
    pub opening_hours: FieldValue<Vec<String>>,
}

/// 以藥局名稱為鍵、保留搜尋結果順序的集合。
///
/// 同名藥局會覆蓋先前的資料，但鍵保留第一次出現的位置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PharmacyCollection {
    entries: Vec<(String, PharmacyRecord)>,
}

impl PharmacyCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入資料；若名稱已存在則回傳被覆蓋的舊資料
    pub fn insert(&mut self, name: String, record: PharmacyRecord) -> Option<PharmacyRecord> {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            return Some(std::mem::replace(existing, record));
        }
        self.entries.push((name, record));
        None
    }

    pub fn get(&self, name: &str) -> Option<&PharmacyRecord> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, record)| record)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PharmacyCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, record)| (name, record)))
    }
}
