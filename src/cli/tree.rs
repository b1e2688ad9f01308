//! Tree export command

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::cli::{OutputFormat, ParamArgs};
use crate::error::Result;
use crate::models::display::NodeDisplay;
use crate::output::{Formattable, json};
use crate::registry::{AppCategory, AppType, Category};
use crate::serializer::{Action, BaseSerializer, QueryParams, SerializerSelector, TreeSerializer};

/// Validate `params` the way a list request would and parse them into
/// registry values for filtering.
pub(crate) fn list_filters(params: &QueryParams) -> Result<(Option<AppType>, Option<AppCategory>)> {
    SerializerSelector::new(&Category).get_serializer(
        BaseSerializer::application(),
        params,
        Action::List,
    )?;

    let app_type: Option<AppType> = params.app_type.as_deref().map(str::parse).transpose()?;
    let category: Option<AppCategory> = params.category.as_deref().map(str::parse).transpose()?;
    Ok((app_type, category))
}

/// Run the tree command
pub fn run(opts: &GlobalOptions, params: &ParamArgs, raw: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let (app_type, category) = list_filters(&params.to_params())?;

    let applications = ctx.catalog.filter_applications(app_type, category);
    debug!("Exporting {} applications", applications.len());

    let nodes = TreeSerializer::new(&ctx.catalog).serialize_applications_with_org(&applications)?;

    if raw {
        println!("{}", json::format_raw(&nodes)?);
        return Ok(());
    }

    match ctx.format {
        OutputFormat::Table => {
            let display: Vec<NodeDisplay> = nodes.iter().map(NodeDisplay::from).collect();
            display.print(OutputFormat::Table)?;
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&nodes)?);
        }
    }

    Ok(())
}
