use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Semantic version of the on-disk file format.
pub const STORE_FORMAT_VERSION: &str = "1.0.0";

/// The single global settings record, one per store root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl ConfigDocument {
    /// The document a store root without a `config.json` behaves as having.
    #[must_use]
    pub fn new_default() -> Self {
        let now = Utc::now();
        Self {
            version: STORE_FORMAT_VERSION.to_string(),
            created_at: now,
            updated_at: now,
            default_project: None,
            api_url: None,
        }
    }
}

/// Recognized settings keys. Anything else is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKey {
    DefaultProject,
    ApiUrl,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKey::DefaultProject => write!(f, "default_project"),
            ConfigKey::ApiUrl => write!(f, "api_url"),
        }
    }
}

impl FromStr for ConfigKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default_project" => Ok(ConfigKey::DefaultProject),
            "api_url" => Ok(ConfigKey::ApiUrl),
            _ => Err(Error::Validation(format!(
                "unknown configuration key '{s}' (expected default_project or api_url)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Slug identifier, unique within the store.
    pub id: String,
    pub name: String,
    /// Directory where the project's capture documents live.
    pub default_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller supplies when registering a project. Timestamps and the
/// `enabled` default are filled in by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub id: String,
    pub name: String,
    pub default_path: String,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Partial update for a project. Absent fields are left untouched; an
/// empty-string `repo_url` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Global,
    Project,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Unique across both scopes.
    pub id: String,
    /// Field this option belongs to, e.g. "status".
    pub field: String,
    pub value: String,
    pub scope: Scope,
    /// Present iff `scope` is `project`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFieldOption {
    pub field: String,
    pub value: String,
    pub scope: Scope,
    #[serde(default)]
    pub project_id: Option<String>,
}

/// `PUT /config` request body, also what the remote config store sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigUpdate {
    pub key: ConfigKey,
    pub value: String,
}
