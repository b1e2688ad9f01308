//! Application serializer composed from a base field set and an attrs schema

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::models::Application;
use crate::registry::{AttrsSchema, FieldKind};

/// Top-level fields emitted for every application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseSerializer {
    pub name: String,
    pub fields: Vec<String>,
}

impl BaseSerializer {
    pub fn new(name: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            name: name.into(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Standard application field set.
    pub fn application() -> Self {
        Self::new(
            "ApplicationSerializer",
            &["id", "name", "category", "type", "org_id", "org_name", "comment"],
        )
    }
}

impl Default for BaseSerializer {
    fn default() -> Self {
        Self::application()
    }
}

/// Serializer for one request: base fields plus the resolved attrs schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationSerializer {
    pub base: BaseSerializer,
    pub attrs: AttrsSchema,
}

impl ApplicationSerializer {
    pub fn new(base: BaseSerializer, attrs: AttrsSchema) -> Self {
        Self { base, attrs }
    }

    pub fn name(&self) -> String {
        format!("{}<{}>", self.base.name, self.attrs.name)
    }

    /// Serialize an application to its outward representation.
    ///
    /// Only base fields and schema attrs are emitted. Secret attrs are never
    /// included, and missing attrs fall back to the schema default.
    pub fn serialize(&self, app: &Application) -> Result<Value> {
        let full = serde_json::to_value(app)?;
        let mut out = Map::new();

        for field in &self.base.fields {
            if let Some(value) = full.get(field) {
                out.insert(field.clone(), value.clone());
            }
        }

        let mut attrs = Map::new();
        for field in self.attrs.fields.iter().filter(|f| !f.secret) {
            let value = app
                .attrs
                .get(&field.name)
                .cloned()
                .or_else(|| field.default.clone());
            if let Some(value) = value {
                attrs.insert(field.name.clone(), value);
            }
        }
        out.insert("attrs".to_string(), Value::Object(attrs));

        Ok(Value::Object(out))
    }

    /// Validate a write payload's attrs against the schema.
    ///
    /// Returns the cleaned map: unknown keys dropped, defaults applied.
    pub fn validate_attrs(&self, attrs: &Map<String, Value>) -> Result<Map<String, Value>> {
        let mut cleaned = Map::new();
        let mut problems = Vec::new();

        for field in &self.attrs.fields {
            match attrs.get(&field.name) {
                Some(value) if !value.is_null() => {
                    if kind_matches(field.kind, value) {
                        cleaned.insert(field.name.clone(), value.clone());
                    } else {
                        problems.push(format!("`{}` must be {:?}", field.name, field.kind));
                    }
                }
                _ => {
                    if let Some(default) = &field.default {
                        cleaned.insert(field.name.clone(), default.clone());
                    } else if field.required {
                        problems.push(format!("`{}` is required", field.name));
                    }
                }
            }
        }

        for key in attrs.keys().filter(|k| self.attrs.field(k).is_none()) {
            debug!("Dropping unknown attr {} for {}", key, self.attrs.name);
        }

        if problems.is_empty() {
            Ok(cleaned)
        } else {
            Err(Error::InvalidAttrs(problems.join(", ")))
        }
    }
}

fn kind_matches(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::Integer => value.is_i64() || value.is_u64(),
        FieldKind::String | FieldKind::Uuid => value.is_string(),
    }
}
