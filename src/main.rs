use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use custom_defines::cli;

#[derive(Parser)]
#[command(name = "defines")]
#[command(about = "Manage toggleable compiler defines and apply them to build targets")]
#[command(version)]
struct Cli {
    /// Working directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .defines/config.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new .defines/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the define list
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append a define (disabled unless --enable is given)
    Add {
        /// Symbol name (left blank when omitted)
        name: Option<String>,

        /// Enable the new define right away
        #[arg(long)]
        enable: bool,
    },

    /// Remove the define at INDEX
    Remove { index: usize },

    /// Rename the define at INDEX
    Rename { index: usize, name: String },

    /// Enable or disable the define at INDEX
    Toggle { index: usize },

    /// Show the names that would be applied
    Enabled {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the enabled defines to every configured build target
    Apply,

    /// Edit the list interactively
    Edit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let config = cli.config.as_ref();

    match cli.command {
        Commands::Init { force } => cli::init::init_command(&work_dir, config, force)?,
        Commands::List { json } => cli::define::list_command(&work_dir, config, json)?,
        Commands::Add { name, enable } => {
            cli::define::add_command(&work_dir, config, name, enable)?;
        }
        Commands::Remove { index } => cli::define::remove_command(&work_dir, config, index)?,
        Commands::Rename { index, name } => {
            cli::define::rename_command(&work_dir, config, index, name)?;
        }
        Commands::Toggle { index } => cli::define::toggle_command(&work_dir, config, index)?,
        Commands::Enabled { json } => cli::define::enabled_command(&work_dir, config, json)?,
        Commands::Apply => cli::apply::apply_command(&work_dir, config)?,
        Commands::Edit => cli::session::edit_command(&work_dir, config)?,
    }

    Ok(())
}
