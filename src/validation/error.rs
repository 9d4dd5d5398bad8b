use std::collections::BTreeMap;

use serde::Serialize;

use super::combinator::Semigroup;
use crate::models::api::ErrorDetail;

pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";

/// 字段级验证错误：字段名 -> 错误信息
///
/// 序列化为普通 JSON 对象，例如 `{"email": "a valid email is required"}`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationError {
    fields: BTreeMap<String, String>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(key: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(key.into(), message.into());
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Key union; entries from `other` replace existing entries with the same key.
    pub fn concat(mut self, other: ValidationError) -> Self {
        self.fields.extend(other.fields);
        self
    }

    /// Messages in key order.
    pub fn to_vec(&self) -> Vec<String> {
        self.fields.values().cloned().collect()
    }

    pub fn to_object(&self) -> BTreeMap<String, String> {
        self.fields.clone()
    }

    pub fn to_error_details(&self) -> Vec<ErrorDetail> {
        self.iter()
            .map(|(field, message)| ErrorDetail {
                field: Some(field.to_string()),
                code: VALIDATION_FAILED.to_string(),
                message: message.to_string(),
            })
            .collect()
    }
}

impl Semigroup for ValidationError {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", parts.join(", "))
    }
}
