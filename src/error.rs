//! Error types for apptree

use thiserror::Error;

/// Result type alias for apptree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// A `type` or `category` query parameter outside the registry
    #[error("Invalid query parameter `{name}`, select from the following options: {options:?}")]
    InvalidParameter { name: String, options: Vec<String> },

    /// A write action was requested without the `type` query parameter
    #[error("The `{action}` action must take the `type` query parameter")]
    MissingRequiredParameter { action: String },

    /// An application record carries a category with no tree node shape
    #[error("Unsupported application category: {0}")]
    UnsupportedCategory(String),

    #[error("Invalid application attributes: {0}")]
    InvalidAttrs(String),

    #[error("Organization not found: {0}")]
    OrgNotFound(String),

    #[error("Application not found: {0}")]
    AppNotFound(String),

    #[error("Unknown action `{0}`")]
    UnknownAction(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `apptree init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "Catalog not configured. Pass `--catalog <PATH>` or run `apptree init --catalog <PATH>`."
    )]
    MissingCatalog,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_lists_options() {
        let err = Error::InvalidParameter {
            name: "type".to_string(),
            options: vec!["mysql".to_string(), "k8s".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("`type`"));
        assert!(msg.contains("\"mysql\""));
        assert!(msg.contains("\"k8s\""));
    }

    #[test]
    fn test_missing_required_parameter_names_action() {
        let err = Error::MissingRequiredParameter {
            action: "create".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The `create` action must take the `type` query parameter"
        );
    }

    #[test]
    fn test_unsupported_category() {
        let err = Error::UnsupportedCategory("unknown".to_string());
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn test_org_not_found() {
        let err = Error::OrgNotFound("org-404".to_string());
        assert!(err.to_string().contains("org-404"));
    }

    #[test]
    fn test_app_not_found() {
        let err = Error::AppNotFound("42".to_string());
        assert_eq!(err.to_string(), "Application not found: 42");
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("apptree init"));
    }

    #[test]
    fn test_config_error_missing_catalog() {
        let err = ConfigError::MissingCatalog;
        assert!(err.to_string().contains("--catalog"));
    }

    #[test]
    fn test_error_from_config_error() {
        let cfg_err = ConfigError::NotFound;
        let err: Error = cfg_err.into();

        match err {
            Error::Config(ConfigError::NotFound) => (),
            _ => panic!("Expected Error::Config(ConfigError::NotFound)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
