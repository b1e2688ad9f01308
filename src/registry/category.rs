//! Application categories and types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level application category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppCategory {
    /// Database applications
    #[serde(alias = "database")]
    Db,
    /// Remote (published) desktop applications
    RemoteApp,
    /// Cloud applications (Kubernetes clusters)
    Cloud,
}

impl AppCategory {
    pub const ALL: [AppCategory; 3] = [AppCategory::Db, AppCategory::RemoteApp, AppCategory::Cloud];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppCategory::Db => "db",
            AppCategory::RemoteApp => "remote_app",
            AppCategory::Cloud => "cloud",
        }
    }

    /// Types belonging to this category, in registry order.
    pub fn types(&self) -> Vec<AppType> {
        AppType::ALL
            .iter()
            .copied()
            .filter(|t| t.category() == *self)
            .collect()
    }
}

impl fmt::Display for AppCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "db" | "database" => Ok(AppCategory::Db),
            "remote_app" => Ok(AppCategory::RemoteApp),
            "cloud" => Ok(AppCategory::Cloud),
            other => Err(Error::UnsupportedCategory(other.to_string())),
        }
    }
}

/// Concrete application type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppType {
    Mysql,
    Oracle,
    Postgresql,
    Mariadb,
    Sqlserver,
    Redis,
    Mongodb,
    Chrome,
    MysqlWorkbench,
    VmwareClient,
    Custom,
    K8s,
}

impl AppType {
    pub const ALL: [AppType; 12] = [
        AppType::Mysql,
        AppType::Oracle,
        AppType::Postgresql,
        AppType::Mariadb,
        AppType::Sqlserver,
        AppType::Redis,
        AppType::Mongodb,
        AppType::Chrome,
        AppType::MysqlWorkbench,
        AppType::VmwareClient,
        AppType::Custom,
        AppType::K8s,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::Mysql => "mysql",
            AppType::Oracle => "oracle",
            AppType::Postgresql => "postgresql",
            AppType::Mariadb => "mariadb",
            AppType::Sqlserver => "sqlserver",
            AppType::Redis => "redis",
            AppType::Mongodb => "mongodb",
            AppType::Chrome => "chrome",
            AppType::MysqlWorkbench => "mysql_workbench",
            AppType::VmwareClient => "vmware_client",
            AppType::Custom => "custom",
            AppType::K8s => "k8s",
        }
    }

    pub fn category(&self) -> AppCategory {
        match self {
            AppType::Mysql
            | AppType::Oracle
            | AppType::Postgresql
            | AppType::Mariadb
            | AppType::Sqlserver
            | AppType::Redis
            | AppType::Mongodb => AppCategory::Db,
            AppType::Chrome
            | AppType::MysqlWorkbench
            | AppType::VmwareClient
            | AppType::Custom => AppCategory::RemoteApp,
            AppType::K8s => AppCategory::Cloud,
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AppType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidParameter {
                name: "type".to_string(),
                options: AppType::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            })
    }
}
