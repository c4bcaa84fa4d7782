use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::store::projects::load_projects;
use crate::store::{FieldStore, read_json, write_json};
use crate::types::slug::validate_slug;
use crate::types::{FieldOption, NewFieldOption, Scope};

const GLOBAL_FIELDS_FILE: &str = "fields.json";

/// Options seeded into the global catalog the first time it is read.
const DEFAULT_OPTIONS: &[(&str, &str)] = &[
    ("status", "captured"),
    ("status", "triaged"),
    ("status", "in-progress"),
    ("status", "done"),
    ("priority", "low"),
    ("priority", "medium"),
    ("priority", "high"),
    ("kind", "note"),
    ("kind", "task"),
    ("kind", "idea"),
];

#[derive(Debug, Default, Serialize, Deserialize)]
struct FieldsFile {
    #[serde(default)]
    options: Vec<FieldOption>,
}

/// Field-option catalogs: `fields.json` for the global scope plus one
/// `fields.<project_id>.json` per project, all under the store root.
pub struct LocalFieldStore {
    root: PathBuf,
}

impl LocalFieldStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn global_path(&self) -> PathBuf {
        self.root.join(GLOBAL_FIELDS_FILE)
    }

    fn project_path(&self, project_id: &str) -> PathBuf {
        self.root.join(format!("fields.{project_id}.json"))
    }

    fn load(&self, path: &Path) -> Result<Option<Vec<FieldOption>>> {
        Ok(read_json::<FieldsFile>(path)?.map(|f| f.options))
    }

    fn save(&self, path: &Path, options: Vec<FieldOption>) -> Result<()> {
        write_json(path, &FieldsFile { options })
    }

    /// Load-or-initialize for the global scope: synthesize the default set,
    /// write it once, and return it. Later reads come back from disk, so
    /// the seeded records stay stable and user-editable.
    fn seed_global(&self) -> Result<Vec<FieldOption>> {
        let now = Utc::now();
        let options: Vec<FieldOption> = DEFAULT_OPTIONS
            .iter()
            .map(|(field, value)| FieldOption {
                id: Uuid::new_v4().to_string(),
                field: (*field).to_string(),
                value: (*value).to_string(),
                scope: Scope::Global,
                project_id: None,
                created_at: now,
            })
            .collect();

        self.save(&self.global_path(), options.clone())?;
        tracing::debug!(count = options.len(), "seeded global field catalog");
        Ok(options)
    }

    /// Delete `id` from one scope file if present there. A missing file is
    /// an empty scope, not an error.
    fn remove_from(&self, path: &Path, id: &str) -> Result<bool> {
        let Some(mut options) = self.load(path)? else {
            return Ok(false);
        };
        let before = options.len();
        options.retain(|o| o.id != id);
        if options.len() == before {
            return Ok(false);
        }
        self.save(path, options)?;
        Ok(true)
    }
}

impl FieldStore for LocalFieldStore {
    fn global(&self) -> Result<Vec<FieldOption>> {
        match self.load(&self.global_path())? {
            Some(options) => Ok(options),
            None => self.seed_global(),
        }
    }

    fn for_project(&self, project_id: &str) -> Result<Vec<FieldOption>> {
        validate_slug(project_id)?;
        Ok(self.load(&self.project_path(project_id))?.unwrap_or_default())
    }

    fn add(&self, new: NewFieldOption) -> Result<FieldOption> {
        if new.field.trim().is_empty() {
            return Err(Error::Validation("field name cannot be empty".to_string()));
        }
        if new.value.trim().is_empty() {
            return Err(Error::Validation("option value cannot be empty".to_string()));
        }

        let (path, base) = match (new.scope, new.project_id.as_deref()) {
            (Scope::Global, None) => {
                // Seed-on-first-read applies before appending, so the
                // defaults are never lost to a fresh write.
                (self.global_path(), self.global()?)
            }
            (Scope::Global, Some(_)) => {
                return Err(Error::Validation(
                    "a global option cannot carry a project id".to_string(),
                ));
            }
            (Scope::Project, Some(project_id)) => {
                validate_slug(project_id)?;
                if !load_projects(&self.root)?.iter().any(|p| p.id == project_id) {
                    return Err(Error::NotFound);
                }
                let path = self.project_path(project_id);
                let base = self.load(&path)?.unwrap_or_default();
                (path, base)
            }
            (Scope::Project, None) => {
                return Err(Error::Validation(
                    "a project-scoped option requires a project id".to_string(),
                ));
            }
        };

        let option = FieldOption {
            id: Uuid::new_v4().to_string(),
            field: new.field,
            value: new.value,
            scope: new.scope,
            project_id: new.project_id,
            created_at: Utc::now(),
        };

        let mut options = base;
        options.push(option.clone());
        self.save(&path, options)?;
        Ok(option)
    }

    fn remove(&self, id: &str) -> Result<()> {
        // Scopes live in separate files: try global, then probe every
        // registered project's file. The registry is the source of the
        // project-id list.
        if self.remove_from(&self.global_path(), id)? {
            return Ok(());
        }
        for project in load_projects(&self.root)? {
            if self.remove_from(&self.project_path(&project.id), id)? {
                return Ok(());
            }
        }
        Err(Error::NotFound)
    }
}
