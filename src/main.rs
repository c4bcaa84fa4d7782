use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use meatycapture::cli::{
    self, ConfigCommands, FieldCommands, OutputOpts, ProjectCommands,
};
use meatycapture::config::{ServerConfig, resolve_store_root};
use meatycapture::server::{AppState, create_router};
use meatycapture::types::ProjectPatch;

#[derive(Parser)]
#[command(name = "meatycapture")]
#[command(about = "Local-first capture configuration", long_about = None)]
struct Cli {
    /// Store root directory (defaults to ~/.meatycapture)
    #[arg(long, global = true)]
    store_root: Option<PathBuf>,

    /// Suppress success chatter
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage global settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage the project registry
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Manage field-option catalogs
    Field {
        #[command(subcommand)]
        command: FieldCommands,
    },

    /// Serve the store over HTTP
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, short, default_value = "8080")]
        port: u16,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("meatycapture=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let out = OutputOpts { quiet: cli.quiet };
    let store_root = cli.store_root;

    match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Get { json } => cli::run_config_get(store_root, json)?,
            ConfigCommands::Set { key, value } => {
                cli::run_config_set(store_root, &key, &value, out)?;
            }
        },
        Commands::Project { command } => match command {
            ProjectCommands::List { json } => cli::run_project_list(store_root, json)?,
            ProjectCommands::Add {
                id,
                name,
                default_path,
                repo_url,
                disabled,
                non_interactive,
            } => cli::run_project_add(
                store_root,
                id,
                name,
                default_path,
                repo_url,
                disabled,
                non_interactive,
                out,
            )?,
            ProjectCommands::Update {
                id,
                name,
                default_path,
                repo_url,
            } => cli::run_project_update(
                store_root,
                &id,
                ProjectPatch {
                    name,
                    default_path,
                    repo_url,
                    enabled: None,
                },
                out,
            )?,
            ProjectCommands::Enable { id } => {
                cli::run_project_set_enabled(store_root, &id, true, out)?;
            }
            ProjectCommands::Disable { id } => {
                cli::run_project_set_enabled(store_root, &id, false, out)?;
            }
            ProjectCommands::Remove {
                id,
                yes,
                non_interactive,
            } => cli::run_project_remove(store_root, &id, yes, non_interactive, out)?,
        },
        Commands::Field { command } => match command {
            FieldCommands::List { project, json } => {
                cli::run_field_list(store_root, project, json)?;
            }
            FieldCommands::Add {
                field,
                value,
                project,
            } => cli::run_field_add(store_root, field, value, project, out)?,
            FieldCommands::Remove {
                id,
                yes,
                non_interactive,
            } => cli::run_field_remove(store_root, &id, yes, non_interactive, out)?,
        },
        Commands::Serve { host, port } => serve(store_root, host, port)?,
    }

    Ok(())
}

fn serve(store_root: Option<PathBuf>, host: String, port: u16) -> anyhow::Result<()> {
    let config = ServerConfig {
        host,
        port,
        store_root: resolve_store_root(store_root)?,
    };

    let state = Arc::new(AppState::local(&config.store_root));
    let app = create_router(state);
    let addr = config.socket_addr()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        info!(
            "Serving store {} on {}",
            config.store_root.display(),
            addr
        );
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;
        Ok::<_, anyhow::Error>(())
    })
}
