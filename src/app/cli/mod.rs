//! CLI Adapter.

mod deps;
mod service;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::api;
use crate::app::commands::generate;
use crate::app::logging::init_logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "msforge")]
#[command(version)]
#[command(about = "Define Spring Boot microservices and generate project archives", long_about = None)]
struct Cli {
    /// Service store file (overrides MSFORGE_STORE and msforge.toml)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage service definitions
    #[clap(visible_alias = "s")]
    Service {
        #[command(subcommand)]
        command: service::ServiceCommands,
    },
    /// Generate one service's project archive
    #[clap(visible_alias = "g")]
    Generate {
        /// Service ID
        id: u64,
        /// Output file or directory (defaults to <name>.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate every stored service into a single archive
    #[clap(visible_alias = "ga")]
    GenerateAll {
        /// Output file or directory (defaults to microservices.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the dependency catalog
    #[clap(visible_alias = "d")]
    Deps {
        /// Only show one group (e.g. SQL, Cloud)
        #[arg(long)]
        group: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_logging();
    let cli = Cli::parse();
    let store = cli.store.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Service { command } => service::run_service(command, store),
        Commands::Generate { id, output } => run_generate(Some(id), output.as_deref(), store),
        Commands::GenerateAll { output } => run_generate(None, output.as_deref(), store),
        Commands::Deps { group } => deps::run_deps(group),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(
    id: Option<u64>,
    output: Option<&Path>,
    store: Option<&Path>,
) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let ctx = api::open_context_at(&root, store)?;

    let archive = match id {
        Some(id) => generate::generate(&ctx, id)?,
        None => generate::generate_all(&ctx)?,
    };
    let path = api::write_archive(&root, &archive, output)?;
    println!("✅ Generated {} ({} bytes)", path.display(), archive.bytes.len());
    Ok(())
}
