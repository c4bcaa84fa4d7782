use std::path::PathBuf;

use crate::types::{NewProject, ProjectPatch};

use super::prompt::{Confirmation, confirm_action, required_or_prompt};
use super::{OutputOpts, init_adapters};

pub fn run_project_list(store_root: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let adapters = init_adapters(store_root)?;
    let projects = adapters.projects.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects registered.");
        return Ok(());
    }

    for project in projects {
        let state = if project.enabled { "" } else { " [disabled]" };
        println!(
            "{}  {}{}  ({})",
            project.id, project.name, state, project.default_path
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn run_project_add(
    store_root: Option<PathBuf>,
    id: Option<String>,
    name: Option<String>,
    default_path: Option<String>,
    repo_url: Option<String>,
    disabled: bool,
    non_interactive: bool,
    out: OutputOpts,
) -> anyhow::Result<()> {
    let adapters = init_adapters(store_root)?;

    let id = required_or_prompt(id, "Project id:", "--id", non_interactive)?;
    let name = required_or_prompt(name, "Display name:", "--name", non_interactive)?;
    let default_path = required_or_prompt(
        default_path,
        "Documents directory:",
        "--default-path",
        non_interactive,
    )?;

    let project = adapters.projects.create(NewProject {
        id,
        name,
        default_path,
        repo_url,
        enabled: Some(!disabled),
    })?;

    if !out.quiet {
        println!("Registered project '{}'", project.id);
    }

    Ok(())
}

pub fn run_project_update(
    store_root: Option<PathBuf>,
    id: &str,
    patch: ProjectPatch,
    out: OutputOpts,
) -> anyhow::Result<()> {
    let adapters = init_adapters(store_root)?;
    let project = adapters.projects.update(id, patch)?;

    if !out.quiet {
        println!("Updated project '{}'", project.id);
    }

    Ok(())
}

pub fn run_project_set_enabled(
    store_root: Option<PathBuf>,
    id: &str,
    enabled: bool,
    out: OutputOpts,
) -> anyhow::Result<()> {
    let adapters = init_adapters(store_root)?;
    // Idempotent by contract: re-applying the current state succeeds.
    let project = adapters.projects.update(
        id,
        ProjectPatch {
            enabled: Some(enabled),
            ..ProjectPatch::default()
        },
    )?;

    if !out.quiet {
        let verb = if enabled { "Enabled" } else { "Disabled" };
        println!("{verb} project '{}'", project.id);
    }

    Ok(())
}

pub fn run_project_remove(
    store_root: Option<PathBuf>,
    id: &str,
    yes: bool,
    non_interactive: bool,
    out: OutputOpts,
) -> anyhow::Result<()> {
    let adapters = init_adapters(store_root)?;

    // Confirm before any disk mutation; a declined or interrupted prompt
    // leaves the store untouched.
    match confirm_action(&format!("Remove project '{id}'?"), yes, non_interactive)? {
        Confirmation::Confirmed => {}
        Confirmation::Declined => {
            println!("Cancelled.");
            return Ok(());
        }
        Confirmation::Interrupted => {
            println!("Interrupted.");
            return Ok(());
        }
    }

    adapters.projects.remove(id)?;

    if !out.quiet {
        println!("Removed project '{id}'");
    }

    Ok(())
}
