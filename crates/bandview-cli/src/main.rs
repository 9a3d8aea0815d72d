mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bandview", about = "Satellite band compositing and NDVI tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Render config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show raster metadata and band statistics
    Info(commands::info::InfoArgs),
    /// Render a false-color composite
    Composite(commands::composite::CompositeArgs),
    /// Compute NDVI from the Red and NIR files
    Ndvi(commands::ndvi::NdviArgs),
    /// Render three bands of one file as RGBA
    Select(commands::select::SelectArgs),
    /// Write the first band back out with its original metadata
    Save(commands::save::SaveArgs),
    /// Print or save the default render config
    Config(commands::config::ConfigArgs),
    /// Show or change the saved UI theme
    Theme(commands::theme::ThemeArgs),
    /// Run a script on the remote engine
    Script(commands::script::ScriptArgs),
    /// Download Sentinel-2 L2A products from Copernicus
    Fetch(commands::fetch::FetchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Composite(args) => commands::composite::run(args, config),
        Commands::Ndvi(args) => commands::ndvi::run(args, config),
        Commands::Select(args) => commands::select::run(args, config),
        Commands::Save(args) => commands::save::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Theme(args) => commands::theme::run(args),
        Commands::Script(args) => commands::script::run(args),
        Commands::Fetch(args) => commands::fetch::run(args),
    }
}
