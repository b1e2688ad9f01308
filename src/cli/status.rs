//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::resolve_format;
use crate::config::Config;
use crate::error::Result;
use crate::models::Catalog;
use crate::registry::Category;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "apptree Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!("  → Run '{}' to create one", "apptree --catalog <PATH> init".cyan());
            Config::default()
        }
    };

    println!("Output format: {:?}", resolve_format(opts, &config));
    println!();

    match config.catalog_path(opts.catalog_ref()) {
        Ok(path) => match Catalog::load(&path) {
            Ok(catalog) => {
                println!(
                    "{} Catalog: {}",
                    "✓".green(),
                    path.display().to_string().cyan()
                );
                println!("  Organizations: {}", catalog.organizations.len());
                println!("  Applications:  {}", catalog.applications.len());

                let unsupported = catalog
                    .applications
                    .iter()
                    .filter(|app| app.category().is_err())
                    .count();
                if unsupported > 0 {
                    println!(
                        "{} {} applications have an unsupported category",
                        "⚠".yellow(),
                        unsupported
                    );
                }

                let mismatched = catalog
                    .applications
                    .iter()
                    .filter(|app| match (app.app_type.as_deref(), app.category()) {
                        (Some(t), Ok(c)) => Category.get_type_category(t) != Some(c),
                        _ => false,
                    })
                    .count();
                if mismatched > 0 {
                    println!(
                        "{} {} applications have a type outside their category",
                        "⚠".yellow(),
                        mismatched
                    );
                }
            }
            Err(err) => {
                println!("{} Catalog {} failed to load: {}", "✗".red(), path.display(), err);
            }
        },
        Err(_) => {
            println!("{} No catalog configured", "○".dimmed());
        }
    }

    println!();
    Ok(())
}
