//! Organization models and lookup

use serde::{Deserialize, Serialize};

use super::application::deserialize_id;
use crate::error::Result;

/// Organization resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Organization name
    pub name: String,
}

impl Organization {
    pub const ROOT_ID: &'static str = "00000000-0000-0000-0000-000000000000";
    pub const ROOT_NAME: &'static str = "GLOBAL";
    pub const DEFAULT_ID: &'static str = "00000000-0000-0000-0000-000000000002";
    pub const DEFAULT_NAME: &'static str = "Default";
    pub const SYSTEM_ID: &'static str = "00000000-0000-0000-0000-000000000004";
    pub const SYSTEM_NAME: &'static str = "SystemOrg";

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn root() -> Self {
        Self::new(Self::ROOT_ID, Self::ROOT_NAME)
    }

    pub fn default_org() -> Self {
        Self::new(Self::DEFAULT_ID, Self::DEFAULT_NAME)
    }

    pub fn system() -> Self {
        Self::new(Self::SYSTEM_ID, Self::SYSTEM_NAME)
    }

    /// Built-in organization for `id`, which exists regardless of storage.
    ///
    /// An empty id means the default organization.
    pub fn builtin(id: &str) -> Option<Self> {
        match id {
            "" | Self::DEFAULT_ID => Some(Self::default_org()),
            Self::ROOT_ID => Some(Self::root()),
            Self::SYSTEM_ID => Some(Self::system()),
            _ => None,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(
            self.id.as_str(),
            Self::ROOT_ID | Self::DEFAULT_ID | Self::SYSTEM_ID
        )
    }
}

/// Source of organizations, keyed by id.
pub trait OrgRegistry {
    /// Resolve an organization by id (or name).
    ///
    /// Unknown organizations are an error; callers propagate it unchanged.
    fn get_instance(&self, id_or_name: &str) -> Result<Organization>;
}
