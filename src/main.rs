//! CLI entry point for polysite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "polysite")]
#[command(version)]
#[command(about = "Multi-language content collection engine for static sites", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one collection view by name (e.g. blog_en, projects_de, blog_all)
    List {
        /// Name of the collection view
        name: String,
    },

    /// Show all collection views with their documents
    #[command(alias = "c")]
    Collections,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "polysite=debug,info"
    } else {
        "polysite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { name } => {
            let site = polysite::Site::new(&base_dir)?;
            polysite::commands::list::run(&site, &name)?;
        }

        Commands::Collections => {
            let site = polysite::Site::new(&base_dir)?;
            polysite::commands::collections::run(&site)?;
        }

        Commands::Version => {
            println!("polysite version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
