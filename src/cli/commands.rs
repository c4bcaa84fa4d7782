use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration
    Get {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a configuration key (an empty value clears it)
    Set {
        /// One of: default_project, api_url
        key: String,

        value: String,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List registered projects
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new project
    Add {
        /// Project id (lowercase letters, digits, and hyphens)
        #[arg(long)]
        id: Option<String>,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Directory where the project's capture documents live
        #[arg(long)]
        default_path: Option<String>,

        /// Repository URL
        #[arg(long)]
        repo_url: Option<String>,

        /// Register the project as disabled
        #[arg(long)]
        disabled: bool,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,
    },

    /// Update fields on a project
    Update {
        /// Project id
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New documents directory
        #[arg(long)]
        default_path: Option<String>,

        /// New repository URL (empty string clears it)
        #[arg(long)]
        repo_url: Option<String>,
    },

    /// Enable a project
    Enable {
        /// Project id
        id: String,
    },

    /// Disable a project
    Disable {
        /// Project id
        id: String,
    },

    /// Remove a project from the registry
    Remove {
        /// Project id
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Skip interactive prompts (requires --yes)
        #[arg(long)]
        non_interactive: bool,
    },
}

#[derive(Subcommand)]
pub enum FieldCommands {
    /// List field options (global catalog unless --project is given)
    List {
        /// List a project's catalog instead of the global one
        #[arg(long)]
        project: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a field option
    Add {
        /// Field the option belongs to, e.g. "status"
        #[arg(long)]
        field: String,

        /// Option value
        #[arg(long)]
        value: String,

        /// Attach to a project instead of the global catalog
        #[arg(long)]
        project: Option<String>,
    },

    /// Remove a field option by id
    Remove {
        /// Option id
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Skip interactive prompts (requires --yes)
        #[arg(long)]
        non_interactive: bool,
    },
}
