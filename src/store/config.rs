use std::path::PathBuf;

use chrono::Utc;

use crate::error::{Error, Result};
use crate::store::{ConfigStore, read_json, write_json};
use crate::types::{ConfigDocument, ConfigKey};

const CONFIG_FILE: &str = "config.json";

/// Settings record backed by `config.json` under the store root.
pub struct LocalConfigStore {
    root: PathBuf,
}

impl LocalConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}

impl ConfigStore for LocalConfigStore {
    fn get(&self) -> Result<ConfigDocument> {
        Ok(read_json(&self.path())?.unwrap_or_else(ConfigDocument::new_default))
    }

    fn set(&self, key: ConfigKey, value: &str) -> Result<ConfigDocument> {
        let mut doc = self.get()?;

        let value = value.trim();
        let stored = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };

        match key {
            ConfigKey::DefaultProject => {
                if let Some(id) = &stored {
                    crate::types::slug::validate_slug(id)?;
                }
                doc.default_project = stored;
            }
            ConfigKey::ApiUrl => {
                if let Some(url) = &stored {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        return Err(Error::Validation(format!(
                            "api_url must be an absolute http(s) URL, got '{url}'"
                        )));
                    }
                }
                doc.api_url = stored;
            }
        }

        // Monotonic even if the wall clock stepped backwards.
        doc.updated_at = Utc::now().max(doc.updated_at);

        write_json(&self.path(), &doc)?;
        Ok(doc)
    }
}
