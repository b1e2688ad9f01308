//! File-backed application catalog
//!
//! The catalog holds the organizations and applications the CLI works on.
//! It is read once per invocation and never written back.

use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::application::Application;
use super::organization::{OrgRegistry, Organization};
use crate::error::{Error, Result};
use crate::registry::{AppCategory, AppType};

/// Organizations and applications loaded from a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub organizations: Vec<Organization>,

    #[serde(default)]
    pub applications: Vec<Application>,
}

impl Catalog {
    /// Load a catalog from disk. `.json` files are parsed as JSON, anything
    /// else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading catalog from {}", path.display());
        let contents = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(contents)?;
        Ok(catalog.with_org_names())
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(contents)?;
        Ok(catalog.with_org_names())
    }

    /// Fill in `org_name` for applications stored without one.
    fn with_org_names(mut self) -> Self {
        let mut applications = std::mem::take(&mut self.applications);

        for app in applications.iter_mut().filter(|a| a.org_name.is_empty()) {
            match self.get_instance(&app.org_id) {
                Ok(org) => app.org_name = org.name,
                Err(_) => warn!(
                    "Application {} references unknown organization {}",
                    app.id, app.org_id
                ),
            }
        }

        self.applications = applications;
        self
    }

    /// Applications whose stored `org_id` resolves to `org`.
    pub fn applications_in(&self, org: &Organization) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|app| {
                self.get_instance(&app.org_id)
                    .is_ok_and(|owner| owner.id == org.id)
            })
            .collect()
    }

    /// Applications matching the optional type and category filters.
    ///
    /// Filters are matched against the parsed registry values, so `database`
    /// and `db` select the same records.
    pub fn filter_applications(
        &self,
        app_type: Option<AppType>,
        category: Option<AppCategory>,
    ) -> Vec<Application> {
        self.applications
            .iter()
            .filter(|app| match app_type {
                Some(t) => app.app_type.as_deref() == Some(t.as_str()),
                None => true,
            })
            .filter(|app| match category {
                Some(c) => app.category().ok() == Some(c),
                None => true,
            })
            .cloned()
            .collect()
    }
}

impl OrgRegistry for Catalog {
    fn get_instance(&self, id_or_name: &str) -> Result<Organization> {
        if let Some(org) = Organization::builtin(id_or_name) {
            return Ok(org);
        }

        self.organizations
            .iter()
            .find(|org| org.id == id_or_name)
            .or_else(|| self.organizations.iter().find(|org| org.name == id_or_name))
            .cloned()
            .ok_or_else(|| Error::OrgNotFound(id_or_name.to_string()))
    }
}
