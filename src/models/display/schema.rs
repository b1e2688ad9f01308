//! Registry display models

use serde::Serialize;
use tabled::Tabled;

use crate::registry::{AppType, AttrField, attrs};

/// One attrs schema field for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AttrFieldDisplay {
    #[tabled(rename = "FIELD")]
    pub name: String,

    #[tabled(rename = "KIND")]
    pub kind: String,

    #[tabled(rename = "REQUIRED")]
    pub required: String,

    #[tabled(rename = "SECRET")]
    pub secret: String,

    #[tabled(rename = "DEFAULT")]
    pub default: String,
}

fn check(flag: bool) -> String {
    if flag {
        "\u{2713}".to_string()
    } else {
        "".to_string()
    }
}

impl From<&AttrField> for AttrFieldDisplay {
    fn from(field: &AttrField) -> Self {
        Self {
            name: field.name.clone(),
            kind: format!("{:?}", field.kind).to_lowercase(),
            required: check(field.required),
            secret: check(field.secret),
            default: field
                .default
                .as_ref()
                .map(|v| match v.as_str() {
                    Some(s) => s.to_string(),
                    None => v.to_string(),
                })
                .unwrap_or_default(),
        }
    }
}

impl From<AttrField> for AttrFieldDisplay {
    fn from(field: AttrField) -> Self {
        Self::from(&field)
    }
}

/// Registry entry for one application type.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TypeDisplay {
    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub app_type: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "SCHEMA")]
    pub schema: String,
}

impl From<AppType> for TypeDisplay {
    fn from(app_type: AppType) -> Self {
        Self {
            app_type: app_type.to_string(),
            category: app_type.category().to_string(),
            schema: attrs::type_schema(app_type).name,
        }
    }
}
