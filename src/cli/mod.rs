mod commands;
mod config;
mod field;
mod project;
pub mod prompt;

pub use commands::{ConfigCommands, FieldCommands, ProjectCommands};
pub use config::{run_config_get, run_config_set};
pub use field::{run_field_add, run_field_list, run_field_remove};
pub use project::{
    run_project_add, run_project_list, run_project_remove, run_project_set_enabled,
    run_project_update,
};

use std::path::PathBuf;

use crate::config::resolve_store_root;
use crate::store::{Adapters, create_adapters};

/// Per-invocation output settings, threaded explicitly through each run
/// function instead of a process-wide flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOpts {
    /// Suppress success chatter; errors and requested data still print.
    pub quiet: bool,
}

/// Resolve the store root and pick the backend for this invocation.
pub fn init_adapters(store_root: Option<PathBuf>) -> anyhow::Result<Adapters> {
    let root = resolve_store_root(store_root)?;
    Ok(create_adapters(&root)?)
}
