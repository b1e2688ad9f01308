//! Application type registry
//!
//! Maps type and category names to the attribute schemas used when
//! serializing application records. The [`SerializerRegistry`] trait is the
//! seam the serializer selector depends on; [`Category`] is the built-in
//! registry covering every known application type.

pub mod attrs;
pub mod category;

use log::debug;

pub use attrs::{AttrField, AttrsSchema, FieldKind};
pub use category::{AppCategory, AppType};

/// Lookup of attribute schemas by type or category name.
pub trait SerializerRegistry {
    /// Every known type name paired with its schema
    fn get_all_type_serializer_mapper(&self) -> Vec<(String, AttrsSchema)>;

    /// Every known category name paired with its schema
    fn get_category_serializer_mapper(&self) -> Vec<(String, AttrsSchema)>;

    /// Schema for a type name, if known
    fn get_type_serializer_cls(&self, name: &str) -> Option<AttrsSchema>;

    /// Schema for a category name, if known
    fn get_category_serializer_cls(&self, name: &str) -> Option<AttrsSchema>;

    /// Read-only schema that omits every secret field
    fn get_no_password_serializer_cls(&self) -> AttrsSchema;

    fn type_keys(&self) -> Vec<String> {
        self.get_all_type_serializer_mapper()
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    fn category_keys(&self) -> Vec<String> {
        self.get_category_serializer_mapper()
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }
}

/// Built-in registry of application categories and types.
#[derive(Debug, Clone, Copy, Default)]
pub struct Category;

impl Category {
    /// Category owning the given type name.
    pub fn get_type_category(&self, name: &str) -> Option<AppCategory> {
        name.parse::<AppType>().ok().map(|t| t.category())
    }
}

impl SerializerRegistry for Category {
    fn get_all_type_serializer_mapper(&self) -> Vec<(String, AttrsSchema)> {
        AppType::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), attrs::type_schema(*t)))
            .collect()
    }

    fn get_category_serializer_mapper(&self) -> Vec<(String, AttrsSchema)> {
        AppCategory::ALL
            .iter()
            .map(|c| (c.as_str().to_string(), attrs::category_schema(*c)))
            .collect()
    }

    fn get_type_serializer_cls(&self, name: &str) -> Option<AttrsSchema> {
        let schema = name.parse::<AppType>().ok().map(attrs::type_schema);
        debug!("Type schema for {}: {:?}", name, schema.as_ref().map(|s| &s.name));
        schema
    }

    fn get_category_serializer_cls(&self, name: &str) -> Option<AttrsSchema> {
        let schema = name.parse::<AppCategory>().ok().map(attrs::category_schema);
        debug!(
            "Category schema for {}: {:?}",
            name,
            schema.as_ref().map(|s| &s.name)
        );
        schema
    }

    fn get_no_password_serializer_cls(&self) -> AttrsSchema {
        attrs::no_password_schema()
    }
}
