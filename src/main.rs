//! apptree CLI - application catalog companion

use clap::{CommandFactory, Parser};
use log::LevelFilter;

use apptree::cli::{self, AppCommands, CategoryCommands, Cli, Commands, GlobalOptions, OrgCommands};
use apptree::error::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init { default_format } => cli::init::run(&opts, default_format),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("apptree version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Tree { params, raw } => cli::tree::run(&opts, &params, raw),
        Commands::Schema { params, action } => cli::schema::run(&opts, &params, &action),
        Commands::App(app_cmd) => match app_cmd {
            AppCommands::List { params } => cli::app::list(&opts, &params),
            AppCommands::Get { app_id, params } => cli::app::get(&opts, &app_id, &params),
            AppCommands::Validate {
                params,
                action,
                attrs,
            } => cli::app::validate(&params, &action, &attrs),
        },
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::List => cli::org::list(&opts),
            OrgCommands::Get { org } => cli::org::get(&opts, &org),
        },
        Commands::Category(cat_cmd) => match cat_cmd {
            CategoryCommands::List { category } => cli::category::list(&opts, category.as_deref()),
        },
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "apptree", &mut std::io::stdout());
            Ok(())
        }
    }
}
