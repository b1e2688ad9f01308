//! Init command implementation

use std::path::PathBuf;

use colored::Colorize;
use log::info;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::load_config;
use crate::error::{ConfigError, Result};
use crate::models::Catalog;

/// Run the init command
///
/// Verifies the catalog parses before recording it, so a broken path never
/// lands in the config file.
pub fn run(opts: &GlobalOptions, default_format: Option<OutputFormat>) -> Result<()> {
    let catalog_arg = opts.catalog_ref().ok_or(ConfigError::MissingCatalog)?;
    let catalog_path = std::fs::canonicalize(catalog_arg).unwrap_or_else(|_| PathBuf::from(catalog_arg));

    let catalog = Catalog::load(&catalog_path)?;
    println!(
        "{} Catalog loaded: {} organizations, {} applications",
        "✓".green(),
        catalog.organizations.len(),
        catalog.applications.len()
    );

    let mut config = load_config(opts)?;
    config.catalog = Some(catalog_path);
    if let Some(format) = default_format {
        config.preferences.format = Some(
            match format {
                OutputFormat::Table => "table",
                OutputFormat::Json => "json",
            }
            .to_string(),
        );
    }

    let saved = config.save_at(opts.config_ref())?;
    info!("Wrote config to {}", saved.display());
    println!(
        "{} Configuration saved to {}",
        "✓".green(),
        saved.display().to_string().cyan()
    );

    Ok(())
}
