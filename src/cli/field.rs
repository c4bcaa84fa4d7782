use std::path::PathBuf;

use crate::types::{NewFieldOption, Scope};

use super::prompt::{Confirmation, confirm_action};
use super::{OutputOpts, init_adapters};

pub fn run_field_list(
    store_root: Option<PathBuf>,
    project: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let adapters = init_adapters(store_root)?;
    let options = match &project {
        Some(project_id) => adapters.fields.for_project(project_id)?,
        None => adapters.fields.global()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    if options.is_empty() {
        println!("No field options.");
        return Ok(());
    }

    for option in options {
        println!("{}  {} = {}", option.id, option.field, option.value);
    }

    Ok(())
}

pub fn run_field_add(
    store_root: Option<PathBuf>,
    field: String,
    value: String,
    project: Option<String>,
    out: OutputOpts,
) -> anyhow::Result<()> {
    let adapters = init_adapters(store_root)?;

    let scope = if project.is_some() {
        Scope::Project
    } else {
        Scope::Global
    };
    let option = adapters.fields.add(NewFieldOption {
        field,
        value,
        scope,
        project_id: project,
    })?;

    if !out.quiet {
        match &option.project_id {
            Some(project_id) => println!(
                "Added {} = {} to project '{project_id}'",
                option.field, option.value
            ),
            None => println!("Added {} = {} to the global catalog", option.field, option.value),
        }
    }

    Ok(())
}

pub fn run_field_remove(
    store_root: Option<PathBuf>,
    id: &str,
    yes: bool,
    non_interactive: bool,
    out: OutputOpts,
) -> anyhow::Result<()> {
    let adapters = init_adapters(store_root)?;

    match confirm_action(&format!("Remove field option '{id}'?"), yes, non_interactive)? {
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

    adapters.fields.remove(id)?;

    if !out.quiet {
        println!("Removed field option '{id}'");
    }

    Ok(())
}
