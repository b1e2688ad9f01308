//! Common CLI types shared across commands

use clap::Args;

use crate::serializer::QueryParams;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry (default)
    #[default]
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file; unknown names are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// The `type` / `category` query parameters, as flags or a raw query string.
#[derive(Args, Debug, Default, Clone)]
pub struct ParamArgs {
    /// Application type (e.g. mysql, chrome, k8s)
    #[arg(long = "type", short = 't')]
    pub app_type: Option<String>,

    /// Application category (db, remote_app, cloud)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Raw query string, e.g. "type=mysql&category=db"; flags take precedence
    #[arg(long, short = 'q')]
    pub query: Option<String>,
}

impl ParamArgs {
    pub fn to_params(&self) -> QueryParams {
        let from_query = self
            .query
            .as_deref()
            .map(QueryParams::parse)
            .unwrap_or_default();
        let flags = QueryParams::new(self.app_type.as_deref(), self.category.as_deref());

        QueryParams {
            app_type: flags.app_type.or(from_query.app_type),
            category: flags.category.or(from_query.category),
        }
    }
}
