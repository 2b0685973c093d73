//! Service subcommand implementation.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::app::api;
use crate::app::commands::service;
use crate::domain::{AppError, StoredService};

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// List stored services
    #[clap(visible_alias = "ls")]
    List,
    /// Print one service definition as JSON
    Show {
        /// Service ID
        id: u64,
    },
    /// Add a service from a YAML or JSON definition file
    #[clap(visible_alias = "a")]
    Add {
        /// Path to the definition file
        file: PathBuf,
    },
    /// Replace a service's metadata from a definition file (omitted dependencies are kept)
    #[clap(visible_alias = "u")]
    Update {
        /// Service ID
        id: u64,
        /// Path to the definition file
        file: PathBuf,
    },
    /// Replace a service's dependency identifiers
    Deps {
        /// Service ID
        id: u64,
        /// Dependency identifiers (see `msforge deps`)
        dependencies: Vec<String>,
    },
    /// Record that one service calls another
    Link {
        /// Calling service ID
        id: u64,
        /// Called service ID
        #[arg(short, long)]
        target: u64,
        /// Communication type
        #[arg(long, default_value = "REST")]
        via: String,
    },
    /// Delete a service
    #[clap(visible_alias = "rm")]
    Remove {
        /// Service ID
        id: u64,
    },
}

pub fn run_service(command: ServiceCommands, store: Option<&Path>) -> Result<(), AppError> {
    let ctx = api::open_context(store)?;

    match command {
        ServiceCommands::List => {
            let services = service::list(&ctx)?;
            if services.is_empty() {
                println!("No services defined");
                return Ok(());
            }
            print_table(&services);
        }
        ServiceCommands::Show { id } => {
            let stored = service::show(&ctx, id)?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
        ServiceCommands::Add { file } => {
            let draft = service::load_draft(&file)?;
            let stored = service::add(&ctx, draft)?;
            println!("✅ Added service '{}' with ID {}", stored.config.name, stored.id);
        }
        ServiceCommands::Update { id, file } => {
            let draft = service::load_draft(&file)?;
            let stored = service::update(&ctx, id, draft)?;
            println!("✅ Updated service '{}' (ID {})", stored.config.name, stored.id);
        }
        ServiceCommands::Deps { id, dependencies } => {
            let stored = service::set_dependencies(&ctx, id, dependencies)?;
            if stored.config.dependencies.is_empty() {
                println!("✅ Cleared dependencies of '{}'", stored.config.name);
            } else {
                println!(
                    "✅ Set dependencies of '{}': {}",
                    stored.config.name,
                    stored.config.dependencies.join(", ")
                );
            }
        }
        ServiceCommands::Link { id, target, via } => {
            let stored = service::link(&ctx, id, target, &via)?;
            println!("✅ Linked service {} -> {} via {}", stored.id, target, via);
        }
        ServiceCommands::Remove { id } => {
            service::remove(&ctx, id)?;
            println!("✅ Removed service {}", id);
        }
    }
    Ok(())
}

fn print_table(services: &[StoredService]) {
    let name_width =
        services.iter().map(|s| s.config.name.len()).max().unwrap_or(0).max("NAME".len());
    println!("{:<4} {:<name_width$} {:<14} {:<8} DEPENDENCIES", "ID", "NAME", "BUILD", "LANGUAGE");
    for stored in services {
        let config = &stored.config;
        println!(
            "{:<4} {:<name_width$} {:<14} {:<8} {}",
            stored.id,
            config.name,
            config.build_system.id(),
            config.language.id(),
            config.dependencies.join(",")
        );
    }
}
