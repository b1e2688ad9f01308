//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod app;
pub mod args;
pub mod category;
pub mod context;
pub mod init;
pub mod org;
pub mod schema;
pub mod status;
pub mod tree;

pub use args::{GlobalOptions, OutputFormat, ParamArgs};
pub use context::CommandContext;

/// apptree - application catalog companion: attrs schemas and tree export
#[derive(Parser, Debug)]
#[command(name = "apptree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, global = true, env = "APPTREE_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "APPTREE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override catalog file location
    #[arg(long, global = true, env = "APPTREE_CATALOG", hide_env = true)]
    pub catalog: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "APPTREE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a config file pointing at the `--catalog` file
    #[command(after_help = "EXAMPLES:\n  \
            apptree --catalog ./catalog.yaml init\n  \
            apptree --catalog ./catalog.json init --default-format json")]
    Init {
        /// Default output format
        #[arg(long = "default-format")]
        default_format: Option<OutputFormat>,
    },

    /// Show configuration and catalog status
    Status,

    /// Display version information
    Version,

    /// Export applications and their organizations as tree nodes
    #[command(after_help = "EXAMPLES:\n  \
            apptree tree                         # All applications\n  \
            apptree tree --category db           # Database applications only\n  \
            apptree tree --raw > nodes.json      # Bare node list for the UI")]
    Tree {
        #[command(flatten)]
        params: ParamArgs,

        /// Print the bare JSON node list without metadata
        #[arg(long)]
        raw: bool,
    },

    /// Show the attrs schema selected for a request
    #[command(after_help = "EXAMPLES:\n  \
            apptree schema                           # No-password default\n  \
            apptree schema --type chrome --action create\n  \
            apptree schema --query 'category=db'")]
    Schema {
        #[command(flatten)]
        params: ParamArgs,

        /// View action (list, retrieve, create, update, partial_update,
        /// bulk_update, partial_bulk_update, metadata)
        #[arg(long, short = 'a', default_value = "list")]
        action: String,
    },

    /// Inspect applications
    #[command(subcommand)]
    App(AppCommands),

    /// Inspect organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Inspect the application type registry
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Application subcommands
#[derive(Subcommand, Debug)]
pub enum AppCommands {
    /// List applications, optionally filtered by type or category
    List {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Show one application serialized with its attrs schema
    Get {
        /// Application ID
        app_id: String,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Validate an attrs payload for a write action
    #[command(after_help = "EXAMPLES:\n  \
            apptree app validate --type mysql --attrs '{\"host\": \"10.0.0.5\"}'\n  \
            apptree app validate --type k8s --action update --attrs '{}'")]
    Validate {
        #[command(flatten)]
        params: ParamArgs,

        /// Write action the payload is for
        #[arg(long, short = 'a', default_value = "create")]
        action: String,

        /// Attrs payload as a JSON object
        #[arg(long)]
        attrs: String,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations in the catalog
    List,

    /// Show one organization by ID or name
    Get {
        /// Organization ID or name
        org: String,
    },
}

/// Registry subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List application types and their categories
    List {
        /// Only types in this category
        #[arg(long, short = 'c')]
        category: Option<String>,
    },
}
