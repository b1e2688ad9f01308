//! Schema command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::{load_config, resolve_format};
use crate::cli::{OutputFormat, ParamArgs};
use crate::error::Result;
use crate::models::display::AttrFieldDisplay;
use crate::output::{json, table};
use crate::registry::Category;
use crate::serializer::{Action, ApplicationSerializer, BaseSerializer, SerializerSelector};

/// JSON shape of the schema command
#[derive(Serialize)]
struct SchemaOutput<'a> {
    serializer: String,
    action: &'a str,
    #[serde(flatten)]
    selected: &'a ApplicationSerializer,
}

/// Run the schema command
pub fn run(opts: &GlobalOptions, params: &ParamArgs, action: &str) -> Result<()> {
    let config = load_config(opts)?;
    let format = resolve_format(opts, &config);

    let action: Action = action.parse()?;
    let serializer = SerializerSelector::new(&Category).get_serializer(
        BaseSerializer::application(),
        &params.to_params(),
        action,
    )?;

    match format {
        OutputFormat::Table => {
            println!("{} {}", "Serializer:".bold(), serializer.name());
            println!("{} {}", "Base fields:".bold(), serializer.base.fields.join(", "));
            println!();
            let fields: Vec<AttrFieldDisplay> =
                serializer.attrs.fields.iter().map(AttrFieldDisplay::from).collect();
            println!("{}", table::format_table(&fields));
        }
        OutputFormat::Json => {
            let output = SchemaOutput {
                serializer: serializer.name(),
                action: action.as_str(),
                selected: &serializer,
            };
            println!("{}", json::format_json(&output)?);
        }
    }

    Ok(())
}
