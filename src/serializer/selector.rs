//! Per-request selection of the application attrs schema
//!
//! Validates the `type` and `category` query parameters against the
//! registry and composes the base serializer with the matching schema.

use std::fmt;
use std::str::FromStr;

use log::debug;
use url::form_urlencoded;

use super::application::{ApplicationSerializer, BaseSerializer};
use crate::error::{Error, Result};
use crate::registry::SerializerRegistry;

/// View action the serializer is selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// List-only endpoints have no explicit action, so this is the default
    #[default]
    List,
    Retrieve,
    Create,
    Update,
    PartialUpdate,
    BulkUpdate,
    PartialBulkUpdate,
    Metadata,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::List,
        Action::Retrieve,
        Action::Create,
        Action::Update,
        Action::PartialUpdate,
        Action::BulkUpdate,
        Action::PartialBulkUpdate,
        Action::Metadata,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Retrieve => "retrieve",
            Action::Create => "create",
            Action::Update => "update",
            Action::PartialUpdate => "partial_update",
            Action::BulkUpdate => "bulk_update",
            Action::PartialBulkUpdate => "partial_bulk_update",
            Action::Metadata => "metadata",
        }
    }

    /// Actions that write application records and so need a concrete type.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Action::Create
                | Action::Update
                | Action::PartialUpdate
                | Action::BulkUpdate
                | Action::PartialBulkUpdate
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

/// The `type` and `category` query parameters of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub app_type: Option<String>,
    pub category: Option<String>,
}

impl QueryParams {
    /// Empty values count as absent.
    pub fn new(app_type: Option<&str>, category: Option<&str>) -> Self {
        let present = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            app_type: present(app_type),
            category: present(category),
        }
    }

    /// Parse `type` and `category` out of a URL-encoded query string such
    /// as `type=mysql&category=db`. Other keys are ignored; the first
    /// occurrence of a key wins.
    pub fn parse(query: &str) -> Self {
        let mut app_type = None;
        let mut category = None;

        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "type" if app_type.is_none() => app_type = Some(value.into_owned()),
                "category" if category.is_none() => category = Some(value.into_owned()),
                _ => {}
            }
        }

        Self::new(app_type.as_deref(), category.as_deref())
    }
}

/// Chooses the application serializer for each request.
pub struct SerializerSelector<'a, R: SerializerRegistry> {
    registry: &'a R,
}

impl<'a, R: SerializerRegistry> SerializerSelector<'a, R> {
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Validate `params` for `action` and build a fresh serializer from `base`.
    ///
    /// Checks run in order: unknown `type`, unknown `category`, then a write
    /// action without `type`. Resolution prefers `type`, then `category`,
    /// then the no-password schema.
    pub fn get_serializer(
        &self,
        base: BaseSerializer,
        params: &QueryParams,
        action: Action,
    ) -> Result<ApplicationSerializer> {
        let app_type = params.app_type.as_deref();
        let category = params.category.as_deref();

        if let Some(t) = app_type {
            let options = self.registry.type_keys();
            if !options.iter().any(|o| o == t) {
                return Err(Error::InvalidParameter {
                    name: "type".to_string(),
                    options,
                });
            }
        }

        if let Some(c) = category {
            let options = self.registry.category_keys();
            if !options.iter().any(|o| o == c) {
                return Err(Error::InvalidParameter {
                    name: "category".to_string(),
                    options,
                });
            }
        }

        if action.is_write() && app_type.is_none() {
            return Err(Error::MissingRequiredParameter {
                action: action.to_string(),
            });
        }

        let attrs = match (app_type, category) {
            (Some(t), _) => self.registry.get_type_serializer_cls(t),
            (None, Some(c)) => self.registry.get_category_serializer_cls(c),
            (None, None) => Some(self.registry.get_no_password_serializer_cls()),
        }
        .ok_or_else(|| {
            // keys were validated above, so the registry disagrees with itself
            Error::Other(format!(
                "Registry has no schema for type={:?} category={:?}",
                app_type, category
            ))
        })?;

        debug!(
            "Selected {} for action {} (type={:?}, category={:?})",
            attrs.name, action, app_type, category
        );

        Ok(ApplicationSerializer::new(base, attrs))
    }
}
