//! Organization command implementations

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;
use crate::models::OrgRegistry;
use crate::models::display::OrgDisplay;
use crate::output::{Formattable, json};

/// Run the org list command
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let display: Vec<OrgDisplay> = ctx.catalog.organizations.iter().map(OrgDisplay::from).collect();
    display.print(ctx.format)
}

/// Run the org get command
pub fn get(opts: &GlobalOptions, org: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.catalog.get_instance(org)?;

    match ctx.format {
        OutputFormat::Table => {
            let apps = ctx.catalog.applications_in(&org).len();

            println!("{}", "Organization".bold());
            println!();
            println!("  ID:           {}", org.id);
            println!("  Name:         {}", org.name);
            println!("  Applications: {}", apps);
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&org)?);
        }
    }

    Ok(())
}
