//! Application command implementations

use serde_json::{Map, Value};

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::cli::tree::list_filters;
use crate::cli::{OutputFormat, ParamArgs};
use crate::error::{Error, Result};
use crate::models::display::AppDisplay;
use crate::output::{Formattable, json};
use crate::registry::Category;
use crate::serializer::{Action, BaseSerializer, SerializerSelector};

/// Run the app list command
pub fn list(opts: &GlobalOptions, params: &ParamArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let params = params.to_params();
    let (app_type, category) = list_filters(&params)?;

    let apps = ctx.catalog.filter_applications(app_type, category);

    match ctx.format {
        OutputFormat::Table => {
            let display: Vec<AppDisplay> = apps.iter().map(AppDisplay::from).collect();
            display.print(OutputFormat::Table)?;
        }
        OutputFormat::Json => {
            let serializer = SerializerSelector::new(&Category).get_serializer(
                BaseSerializer::application(),
                &params,
                Action::List,
            )?;
            let data = apps
                .iter()
                .map(|app| serializer.serialize(app))
                .collect::<Result<Vec<Value>>>()?;
            println!("{}", json::format_json(&data)?);
        }
    }

    Ok(())
}

/// Run the app get command
///
/// Always prints JSON: the point is to show the serialized attrs.
pub fn get(opts: &GlobalOptions, app_id: &str, params: &ParamArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let serializer = SerializerSelector::new(&Category).get_serializer(
        BaseSerializer::application(),
        &params.to_params(),
        Action::Retrieve,
    )?;

    let app = ctx
        .catalog
        .applications
        .iter()
        .find(|app| app.id == app_id)
        .ok_or_else(|| Error::AppNotFound(app_id.to_string()))?;

    println!("{}", json::format_json(&serializer.serialize(app)?)?);
    Ok(())
}

/// Run the app validate command
///
/// Prints the cleaned attrs (defaults applied, unknown keys dropped) as JSON.
pub fn validate(params: &ParamArgs, action: &str, attrs: &str) -> Result<()> {
    let action: Action = action.parse()?;
    if !action.is_write() {
        return Err(Error::Other(format!("`{}` is not a write action", action)));
    }

    let serializer = SerializerSelector::new(&Category).get_serializer(
        BaseSerializer::application(),
        &params.to_params(),
        action,
    )?;

    let payload: Map<String, Value> = match serde_json::from_str::<Value>(attrs)? {
        Value::Object(map) => map,
        _ => return Err(Error::InvalidAttrs("attrs must be a JSON object".to_string())),
    };

    let cleaned = serializer.validate_attrs(&payload)?;
    println!("{}", json::format_raw(&cleaned)?);
    Ok(())
}
