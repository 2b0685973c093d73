//! Service definition commands: CRUD over the store.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, Relationship, ServiceDraft, StoredService};
use crate::ports::ServiceStore;

pub fn list<S: ServiceStore>(ctx: &AppContext<S>) -> Result<Vec<StoredService>, AppError> {
    ctx.store().list()
}

pub fn show<S: ServiceStore>(ctx: &AppContext<S>, id: u64) -> Result<StoredService, AppError> {
    ctx.store().require(id)
}

/// Validate a draft, apply defaults, and store it under a fresh id.
pub fn add<S: ServiceStore>(
    ctx: &AppContext<S>,
    draft: ServiceDraft,
) -> Result<StoredService, AppError> {
    let config = draft.into_config();
    config.validate()?;
    ensure_unique_name(ctx, &config.name, None)?;
    let stored = ctx.store().insert(config)?;
    tracing::info!(id = stored.id, name = %stored.config.name, "service added");
    Ok(stored)
}

/// Replace a service's metadata. Its relationships are kept, and so are its
/// dependencies when the draft leaves them out.
pub fn update<S: ServiceStore>(
    ctx: &AppContext<S>,
    id: u64,
    draft: ServiceDraft,
) -> Result<StoredService, AppError> {
    let existing = ctx.store().require(id)?;
    let keep_dependencies = draft.dependencies.is_none();
    let mut config = draft.into_config();
    if keep_dependencies {
        config.dependencies = existing.config.dependencies;
    }
    config.validate()?;
    ensure_unique_name(ctx, &config.name, Some(id))?;
    let stored = ctx.store().update(id, config)?;
    tracing::info!(id, name = %stored.config.name, "service updated");
    Ok(stored)
}

pub fn set_dependencies<S: ServiceStore>(
    ctx: &AppContext<S>,
    id: u64,
    dependencies: Vec<String>,
) -> Result<StoredService, AppError> {
    ctx.store().require(id)?;
    for dep in &dependencies {
        if crate::domain::catalog::listing::lookup(dep).is_none() {
            tracing::debug!(dependency = %dep, "dependency is not in the catalog and will not affect output");
        }
    }
    ctx.store().update_dependencies(id, dependencies)
}

/// Record that `source` talks to `target`. Linking the same pair and
/// transport twice is a no-op.
pub fn link<S: ServiceStore>(
    ctx: &AppContext<S>,
    source: u64,
    target: u64,
    communication_type: &str,
) -> Result<StoredService, AppError> {
    let existing = ctx.store().require(source)?;
    ctx.store().require(target)?;

    let relationship = Relationship::new(source, target, communication_type);
    let mut relationships = existing.config.relationships;
    if relationships.contains(&relationship) {
        return ctx.store().require(source);
    }
    relationships.push(relationship);
    ctx.store().update_relationships(source, relationships)
}

pub fn remove<S: ServiceStore>(ctx: &AppContext<S>, id: u64) -> Result<(), AppError> {
    ctx.store().require(id)?;
    ctx.store().delete(id)?;
    tracing::info!(id, "service removed");
    Ok(())
}

/// Names become archive entries, so no two stored services may share one.
fn ensure_unique_name<S: ServiceStore>(
    ctx: &AppContext<S>,
    name: &str,
    except: Option<u64>,
) -> Result<(), AppError> {
    let taken = ctx
        .store()
        .list()?
        .into_iter()
        .find(|s| s.config.name == name && Some(s.id) != except);
    match taken {
        Some(other) => Err(AppError::invalid(
            "name",
            format!("'{}' is already used by service {}", name, other.id),
        )),
        None => Ok(()),
    }
}

/// Read a service definition from a YAML or JSON file.
pub fn load_draft(path: &Path) -> Result<ServiceDraft, AppError> {
    let content = std::fs::read_to_string(path)?;
    let parse_error = |details: String| AppError::ParseError {
        what: format!("service definition {}", path.display()),
        details,
    };
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        _ => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string())),
    }
}
