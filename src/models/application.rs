//! Application models

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::registry::AppCategory;

/// Application record as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Application ID
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Application name
    pub name: String,

    /// Raw category string as stored; see [`Application::category`]
    pub category: String,

    /// Application type (e.g. `mysql`, `chrome`, `k8s`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub app_type: Option<String>,

    /// Owning organization ID
    #[serde(default, deserialize_with = "deserialize_id")]
    pub org_id: String,

    /// Owning organization name
    #[serde(default)]
    pub org_name: String,

    /// Type specific attributes
    #[serde(default)]
    pub attrs: Map<String, Value>,

    /// Free-form comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Application {
    /// Parse the stored category.
    ///
    /// Fails with `UnsupportedCategory` for anything outside the registry.
    pub fn category(&self) -> Result<AppCategory> {
        self.category.parse()
    }
}

/// Accept IDs written either as strings or as bare numbers.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Uint(n) => n.to_string(),
    })
}
