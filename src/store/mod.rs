pub mod atomic;
mod config;
mod factory;
mod fields;
mod projects;
mod remote;

pub use config::LocalConfigStore;
pub use factory::{Adapters, create_adapters};
pub use fields::LocalFieldStore;
pub use projects::LocalProjectStore;
pub use remote::{ApiClient, RemoteConfigStore, RemoteFieldStore, RemoteProjectStore};

use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, FileOp, Result};
use crate::types::{
    ConfigDocument, ConfigKey, FieldOption, NewFieldOption, NewProject, Project, ProjectPatch,
};

/// Store for the single global settings record.
///
/// No store holds locks across operations: each call is a self-contained
/// read or atomic-replace write, so two racing process invocations are
/// last-writer-wins. Accepted, documented, not fixed here.
pub trait ConfigStore: Send + Sync {
    /// Read the settings record. A missing backing file yields an in-memory
    /// default document; nothing is written.
    fn get(&self) -> Result<ConfigDocument>;

    /// Apply one key/value change and persist. An empty value clears the
    /// setting to absent.
    fn set(&self, key: ConfigKey, value: &str) -> Result<ConfigDocument>;
}

/// Store for the project registry, keyed by slug id.
pub trait ProjectStore: Send + Sync {
    /// All projects in insertion order as stored. Sorting and filtering are
    /// caller concerns.
    fn list(&self) -> Result<Vec<Project>>;

    /// Exact-match lookup. `None` means missing, not a store error.
    fn get(&self, id: &str) -> Result<Option<Project>>;

    fn create(&self, new: NewProject) -> Result<Project>;

    /// Merge patch fields into the record and bump `updated_at`
    /// unconditionally. The update is not diffed: re-applying the current
    /// `enabled` value still succeeds and still bumps the timestamp.
    fn update(&self, id: &str, patch: ProjectPatch) -> Result<Project>;

    fn remove(&self, id: &str) -> Result<()>;
}

/// Store for field-option catalogs, split into a global scope and one
/// scope per project.
pub trait FieldStore: Send + Sync {
    /// Global catalog. A missing file is seeded from the built-in defaults
    /// and written to disk, so later reads (and user edits) see the same
    /// records.
    fn global(&self) -> Result<Vec<FieldOption>>;

    /// Project-scoped catalog. A missing file is an empty catalog; project
    /// scopes are never seeded.
    fn for_project(&self, project_id: &str) -> Result<Vec<FieldOption>>;

    fn add(&self, new: NewFieldOption) -> Result<FieldOption>;

    /// Delete the option with this id from whichever scope holds it.
    fn remove(&self, id: &str) -> Result<()>;
}

/// Read and parse a JSON store file. A missing file is `None`; a file that
/// no longer parses is a validation error naming the path.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(FileOp::Read, path, e)),
    };
    serde_json::from_str(&content).map(Some).map_err(|e| {
        Error::Validation(format!("malformed store file {}: {e}", path.display()))
    })
}

/// Serialize and atomically replace a JSON store file, keeping one `.bak`
/// generation of the previous content.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)
        .map_err(|e| Error::Validation(format!("cannot serialize {}: {e}", path.display())))?;
    atomic::write_atomic(path, &json, true)
}
