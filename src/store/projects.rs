use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::{ProjectStore, read_json, write_json};
use crate::types::slug::validate_slug;
use crate::types::{NewProject, Project, ProjectPatch};

const PROJECTS_FILE: &str = "projects.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Loads the registry in stored insertion order. Shared with the field
/// store, which needs the list of project ids to probe.
pub(crate) fn load_projects(root: &Path) -> Result<Vec<Project>> {
    Ok(read_json::<ProjectsFile>(&root.join(PROJECTS_FILE))?
        .unwrap_or_default()
        .projects)
}

/// Project registry backed by `projects.json` under the store root.
pub struct LocalProjectStore {
    root: PathBuf,
}

impl LocalProjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn save(&self, projects: Vec<Project>) -> Result<()> {
        write_json(&self.root.join(PROJECTS_FILE), &ProjectsFile { projects })
    }
}

impl ProjectStore for LocalProjectStore {
    fn list(&self) -> Result<Vec<Project>> {
        load_projects(&self.root)
    }

    fn get(&self, id: &str) -> Result<Option<Project>> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }

    fn create(&self, new: NewProject) -> Result<Project> {
        validate_slug(&new.id)?;
        if new.name.trim().is_empty() {
            return Err(Error::Validation("project name cannot be empty".to_string()));
        }
        if new.default_path.trim().is_empty() {
            return Err(Error::Validation(
                "project default_path cannot be empty".to_string(),
            ));
        }

        let mut projects = load_projects(&self.root)?;
        if projects.iter().any(|p| p.id == new.id) {
            return Err(Error::Conflict(format!(
                "project '{}' already exists",
                new.id
            )));
        }

        let now = Utc::now();
        let project = Project {
            id: new.id,
            name: new.name,
            default_path: new.default_path,
            repo_url: new.repo_url.filter(|url| !url.trim().is_empty()),
            enabled: new.enabled.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        projects.push(project.clone());
        self.save(projects)?;
        Ok(project)
    }

    fn update(&self, id: &str, patch: ProjectPatch) -> Result<Project> {
        let mut projects = load_projects(&self.root)?;
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Err(Error::NotFound);
        };

        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(Error::Validation("project name cannot be empty".to_string()));
            }
            project.name = name;
        }
        if let Some(default_path) = patch.default_path {
            if default_path.trim().is_empty() {
                return Err(Error::Validation(
                    "project default_path cannot be empty".to_string(),
                ));
            }
            project.default_path = default_path;
        }
        if let Some(repo_url) = patch.repo_url {
            // Empty string clears the URL, mirroring config set semantics.
            project.repo_url = if repo_url.trim().is_empty() {
                None
            } else {
                Some(repo_url)
            };
        }
        if let Some(enabled) = patch.enabled {
            project.enabled = enabled;
        }

        // Bumped even when nothing changed; updates are not diffed.
        project.updated_at = Utc::now().max(project.updated_at);
        let updated = project.clone();

        self.save(projects)?;
        Ok(updated)
    }

    fn remove(&self, id: &str) -> Result<()> {
        let mut projects = load_projects(&self.root)?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(Error::NotFound);
        }
        self.save(projects)
    }
}
