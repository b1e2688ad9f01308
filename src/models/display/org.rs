//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use crate::models::Organization;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    /// Organization ID
    #[tabled(rename = "ORG ID")]
    pub id: String,

    /// Organization name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Marker for the built-in organizations
    #[tabled(rename = "BUILTIN")]
    pub builtin: String,
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id.clone(),
            name: org.name.clone(),
            builtin: if org.is_builtin() {
                "\u{2713}".to_string() // checkmark
            } else {
                "".to_string()
            },
        }
    }
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self::from(&org)
    }
}
