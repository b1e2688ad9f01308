//! Command execution context
//!
//! Provides a unified context for command execution: config loading,
//! catalog loading and output format resolution.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};
use crate::models::Catalog;

/// Context for command execution containing config, catalog and output format.
pub struct CommandContext {
    /// Loaded configuration (defaults when no config file exists)
    pub config: Config,
    /// Loaded application catalog
    pub catalog: Catalog,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is fine as long as `--catalog` is given.
    ///
    /// # Errors
    /// Returns error if no catalog is configured or it cannot be loaded.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = load_config(opts)?;
        let format = resolve_format(opts, &config);

        let catalog_path = config.catalog_path(opts.catalog_ref())?;
        let catalog = Catalog::load(&catalog_path)?;
        debug!(
            "Loaded {} organizations and {} applications from {}",
            catalog.organizations.len(),
            catalog.applications.len(),
            catalog_path.display()
        );

        Ok(Self {
            config,
            catalog,
            format,
        })
    }
}

/// Load the config file, treating a missing file as an empty config.
pub fn load_config(opts: &GlobalOptions) -> Result<Config> {
    match Config::load_at(opts.config_ref()) {
        Ok(config) => Ok(config),
        Err(Error::Config(ConfigError::NotFound)) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(err) => Err(err),
    }
}

/// Output format: CLI flag or env, then config preference, then table.
pub fn resolve_format(opts: &GlobalOptions, config: &Config) -> OutputFormat {
    opts.format
        .or_else(|| {
            config
                .preferences
                .format
                .as_deref()
                .and_then(OutputFormat::from_name)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;

    #[test]
    fn test_resolve_format_precedence() {
        let config = Config {
            catalog: None,
            preferences: Preferences {
                format: Some("json".to_string()),
            },
        };

        let mut opts = GlobalOptions::default();
        assert_eq!(resolve_format(&opts, &config), OutputFormat::Json);

        opts.format = Some(OutputFormat::Table);
        assert_eq!(resolve_format(&opts, &config), OutputFormat::Table);

        assert_eq!(
            resolve_format(&GlobalOptions::default(), &Config::default()),
            OutputFormat::Table
        );
    }

    #[test]
    fn test_context_requires_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let opts = GlobalOptions {
            format: None,
            config: dir.path().join("missing.yaml").to_str().map(String::from),
            catalog: None,
        };

        assert!(matches!(
            CommandContext::new(&opts),
            Err(Error::Config(ConfigError::MissingCatalog))
        ));
    }

    #[test]
    fn test_context_loads_catalog_override() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("apps.json");
        std::fs::write(
            &catalog,
            r#"{"applications": [{"id": 1, "name": "a", "category": "db"}]}"#,
        )
        .unwrap();

        let opts = GlobalOptions {
            format: None,
            config: dir.path().join("missing.yaml").to_str().map(String::from),
            catalog: catalog.to_str().map(String::from),
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.catalog.applications.len(), 1);
        assert_eq!(ctx.format, OutputFormat::Table);
    }
}
