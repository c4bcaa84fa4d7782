mod server;

pub use server::ServerConfig;

use std::path::PathBuf;

use crate::types::ConfigDocument;

/// Overrides the store-root directory.
pub const ENV_STORE_ROOT: &str = "MEATYCAPTURE_HOME";
/// Overrides the persisted `default_project` setting.
pub const ENV_DEFAULT_PROJECT: &str = "MEATYCAPTURE_PROJECT";
/// Overrides the persisted `api_url` setting; selects the remote backend.
pub const ENV_API_URL: &str = "MEATYCAPTURE_API_URL";

const DEFAULT_STORE_DIR: &str = ".meatycapture";

/// Resolve the store root: explicit flag, then `MEATYCAPTURE_HOME`, then
/// `~/.meatycapture`.
pub fn resolve_store_root(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Ok(value) = std::env::var(ENV_STORE_ROOT) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    let dirs = directories::UserDirs::new()
        .ok_or_else(|| anyhow::anyhow!("could not determine home directory. Is $HOME set?"))?;
    Ok(dirs.home_dir().join(DEFAULT_STORE_DIR))
}

/// Default project with the environment override applied. The persisted
/// setting is never modified by the override.
#[must_use]
pub fn effective_default_project(doc: &ConfigDocument) -> Option<String> {
    match std::env::var(ENV_DEFAULT_PROJECT) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => doc.default_project.clone(),
    }
}
