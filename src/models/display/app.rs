//! Application display model

use serde::Serialize;
use tabled::Tabled;

use crate::models::Application;

/// Application display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AppDisplay {
    #[tabled(rename = "APP ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub app_type: String,

    #[tabled(rename = "ORG")]
    pub org_name: String,
}

impl From<&Application> for AppDisplay {
    fn from(app: &Application) -> Self {
        Self {
            id: app.id.clone(),
            name: app.name.clone(),
            category: app.category.clone(),
            app_type: app.app_type.clone().unwrap_or_default(),
            org_name: app.org_name.clone(),
        }
    }
}

impl From<Application> for AppDisplay {
    fn from(app: Application) -> Self {
        Self::from(&app)
    }
}
