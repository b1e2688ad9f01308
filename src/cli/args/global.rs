//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override (table, json)
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.apptree/config.yaml)
    pub config: Option<String>,

    /// Catalog path override (bypasses config file)
    pub catalog: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            catalog: cli.catalog.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get catalog override as `Option<&str>`.
    pub fn catalog_ref(&self) -> Option<&str> {
        self.catalog.as_deref()
    }
}
