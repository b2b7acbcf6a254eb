use anyhow::Result;
use clap::{Parser, Subcommand};
use ddlforge::{commands, config, constants};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = constants::CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
struct RenderCommandArgs {
    /// Schema file to render (.yaml, .yml or .json)
    #[arg(long, short = 's')]
    schema: PathBuf,

    /// Check the schema for structural problems before rendering
    #[arg(long)]
    validate: bool,

    #[command(flatten)]
    render_args: config::RenderArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a schema file to DDL
    Render(RenderCommandArgs),

    /// Check a schema file for structural problems
    Validate {
        /// Schema file to check (.yaml, .yml or .json)
        #[arg(long, short = 's')]
        schema: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);
    run_main(cli)
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_main(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Render(args) => {
            let file_config = config::load_config(&cli.config_file)?;

            let config = config::ConfigBuilder::new()
                .with_file(file_config)
                .with_cli_args(args.render_args.clone().into())
                .resolve()?;

            info!("Rendering {}", args.schema.display());
            commands::cmd_render(&config, &args.schema, args.validate)
        }
        Commands::Validate { schema } => {
            info!("Validating schema consistency");
            commands::cmd_validate(schema)
        }
    }
}
