//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod boards;
pub mod info;
pub mod new;
pub mod templates;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project
    New(NewArgs),

    /// List selectable boards
    Boards,

    /// Show the compiler settings of a project file
    Info {
        /// Path to a .apf project file
        file: PathBuf,
    },

    /// Manage board templates
    Templates {
        #[command(subcommand)]
        command: TemplateCommands,
    },
}

/// Arguments of `armemus new`
#[derive(Args, Debug, Clone, Default)]
pub struct NewArgs {
    /// Project name (prompted when omitted)
    pub name: Option<String>,

    /// Directory the project folder is created in
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Board index or name (see `armemus boards`)
    #[arg(short, long)]
    pub board: Option<String>,

    /// Templates root directory
    #[arg(long, env = "ARMEMUS_TEMPLATES_DIR")]
    pub templates: Option<PathBuf>,

    /// Overwrite an existing project without asking
    #[arg(long, conflicts_with = "keep_existing")]
    pub overwrite: bool,

    /// Fail instead of overwriting an existing project
    #[arg(long)]
    pub keep_existing: bool,

    /// Print the planned operations without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Template subcommands
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Write the built-in templates to a directory for customisation
    Export {
        /// Destination templates root
        dir: PathBuf,

        /// Replace existing template files
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Self::New(args) => new::execute(args),
            Self::Boards => boards::execute(),
            Self::Info { file } => info::execute(&file),
            Self::Templates { command } => match command {
                TemplateCommands::Export { dir, force } => templates::export(&dir, force),
            },
        }
    }
}
