//! Registry listing command

use crate::cli::args::GlobalOptions;
use crate::cli::context::{load_config, resolve_format};
use crate::error::{Error, Result};
use crate::models::display::TypeDisplay;
use crate::output::Formattable;
use crate::registry::{AppCategory, AppType, Category, SerializerRegistry};

/// Run the category list command
pub fn list(opts: &GlobalOptions, category: Option<&str>) -> Result<()> {
    let config = load_config(opts)?;
    let format = resolve_format(opts, &config);

    let types: Vec<AppType> = match category {
        Some(name) => {
            let options = Category.category_keys();
            if !options.iter().any(|o| o == name) {
                return Err(Error::InvalidParameter {
                    name: "category".to_string(),
                    options,
                });
            }
            name.parse::<AppCategory>()?.types()
        }
        None => AppType::ALL.to_vec(),
    };

    let display: Vec<TypeDisplay> = types.into_iter().map(TypeDisplay::from).collect();
    display.print(format)
}
