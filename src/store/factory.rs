use std::path::Path;

use crate::config::ENV_API_URL;
use crate::error::Result;
use crate::store::{
    ApiClient, ConfigStore, FieldStore, LocalConfigStore, LocalFieldStore, LocalProjectStore,
    ProjectStore, RemoteConfigStore, RemoteFieldStore, RemoteProjectStore,
};

/// The three store handles a command works through. Callers stay
/// backend-agnostic; both backends satisfy the same trait contracts.
pub struct Adapters {
    pub config: Box<dyn ConfigStore>,
    pub projects: Box<dyn ProjectStore>,
    pub fields: Box<dyn FieldStore>,
}

/// Backend selection happens here and nowhere else. The `MEATYCAPTURE_API_URL`
/// environment variable wins over the persisted `api_url` setting (an empty
/// env value forces the local backend); a non-empty URL selects the remote
/// stores, otherwise everything is local JSON under `root`.
pub fn create_adapters(root: &Path) -> Result<Adapters> {
    let api_url = match std::env::var(ENV_API_URL) {
        Ok(value) => Some(value),
        Err(_) => LocalConfigStore::new(root).get()?.api_url,
    };

    match api_url.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        Some(url) => {
            tracing::debug!(url, "using remote stores");
            let client = ApiClient::new(url)?;
            Ok(Adapters {
                config: Box::new(RemoteConfigStore::new(client.clone())),
                projects: Box::new(RemoteProjectStore::new(client.clone())),
                fields: Box::new(RemoteFieldStore::new(client)),
            })
        }
        None => {
            tracing::debug!(root = %root.display(), "using local stores");
            Ok(Adapters {
                config: Box::new(LocalConfigStore::new(root)),
                projects: Box::new(LocalProjectStore::new(root)),
                fields: Box::new(LocalFieldStore::new(root)),
            })
        }
    }
}
