//! Tool configuration (`msforge.toml`) and store path resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

pub const CONFIG_FILE: &str = "msforge.toml";
pub const STORE_ENV: &str = "MSFORGE_STORE";
pub const DEFAULT_STORE_PATH: &str = ".msforge/services.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Location of the JSON service store, relative to the config file's directory.
    pub path: Option<PathBuf>,
}

/// Parse configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    Ok(toml::from_str(content)?)
}

/// Load `msforge.toml` from `root`; a missing file yields the defaults.
pub fn load_config(root: &Path) -> Result<AppConfig, AppError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Pick the store file: explicit flag, then environment, then config file, then default.
///
/// Relative paths are resolved against `root`.
pub fn resolve_store_path(
    root: &Path,
    flag: Option<&Path>,
    env: Option<OsString>,
) -> Result<PathBuf, AppError> {
    let chosen = match (flag, env.filter(|v| !v.is_empty())) {
        (Some(flag), _) => flag.to_path_buf(),
        (None, Some(env)) => PathBuf::from(env),
        (None, None) => load_config(root)?
            .store
            .path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
    };
    Ok(if chosen.is_absolute() { chosen } else { root.join(chosen) })
}
