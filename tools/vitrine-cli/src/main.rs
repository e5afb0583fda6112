//! Vitrine CLI - a storefront demo session from the command line.
//!
//! Commands:
//! - `vitrine browse` - Filter, sort, and page through the catalog
//! - `vitrine demo` - Run a scripted end-to-end storefront session

mod commands;
mod config;
mod mock;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{BrowseArgs, DemoArgs};

/// Vitrine - browse a synthetic catalog and fill a cart
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort, and page through the catalog
    Browse(BrowseArgs),

    /// Run a scripted end-to-end storefront session
    Demo(DemoArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine_commerce=warn,vitrine_cli=warn".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let output = output::Output::new(cli.verbose);
    let config = config::CliConfig::load_or_default(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &config, &output).await,
        Commands::Demo(args) => commands::demo::run(args, &config, &output).await,
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
