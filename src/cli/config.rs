use std::path::PathBuf;

use crate::config::effective_default_project;
use crate::types::ConfigKey;

use super::{OutputOpts, init_adapters};

pub fn run_config_get(store_root: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let adapters = init_adapters(store_root)?;
    let doc = adapters.config.get()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("version:         {}", doc.version);
    println!(
        "default_project: {}",
        effective_default_project(&doc).as_deref().unwrap_or("(unset)")
    );
    println!(
        "api_url:         {}",
        doc.api_url.as_deref().unwrap_or("(unset)")
    );
    println!("updated_at:      {}", doc.updated_at.to_rfc3339());

    Ok(())
}

pub fn run_config_set(
    store_root: Option<PathBuf>,
    key: &str,
    value: &str,
    out: OutputOpts,
) -> anyhow::Result<()> {
    let key: ConfigKey = key.parse()?;
    let adapters = init_adapters(store_root)?;
    adapters.config.set(key, value)?;

    if !out.quiet {
        if value.trim().is_empty() {
            println!("Cleared {key}");
        } else {
            println!("Set {key} = {}", value.trim());
        }
    }

    Ok(())
}
