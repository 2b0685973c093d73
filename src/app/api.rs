//! API Facade for the application.
//!
//! Glues store resolution, context creation, and archive output together for
//! the CLI and for library callers working against a store file.

use std::path::{Path, PathBuf};

use crate::adapters::JsonFileServiceStore;
use crate::app::AppContext;
use crate::app::commands::generate::GeneratedArchive;
use crate::app::config::{STORE_ENV, resolve_store_path};
use crate::domain::AppError;

/// Create an `AppContext` backed by the JSON store that applies to `root`.
///
/// `store` is an explicit store path and wins over `MSFORGE_STORE` and `msforge.toml`.
pub fn open_context_at(
    root: &Path,
    store: Option<&Path>,
) -> Result<AppContext<JsonFileServiceStore>, AppError> {
    let path = resolve_store_path(root, store, std::env::var_os(STORE_ENV))?;
    tracing::debug!(store = %path.display(), "using service store");
    Ok(AppContext::new(JsonFileServiceStore::new(path)))
}

/// Create an `AppContext` for the current directory.
pub fn open_context(store: Option<&Path>) -> Result<AppContext<JsonFileServiceStore>, AppError> {
    open_context_at(&std::env::current_dir()?, store)
}

/// Save an archive and return where it was written.
///
/// Without `output` the archive lands in `root` under its own file name. An
/// existing directory as `output` receives the archive under its own name;
/// anything else is treated as the target file path.
pub fn write_archive(
    root: &Path,
    archive: &GeneratedArchive,
    output: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let target = match output {
        None => root.join(&archive.file_name),
        Some(path) => {
            let path = if path.is_absolute() { path.to_path_buf() } else { root.join(path) };
            if path.is_dir() { path.join(&archive.file_name) } else { path }
        }
    };
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&target, &archive.bytes)?;
    tracing::info!(path = %target.display(), bytes = archive.bytes.len(), "archive written");
    Ok(target)
}
