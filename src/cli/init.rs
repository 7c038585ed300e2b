//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;

/// Default configuration content for `defines init`
pub const DEFAULT_CONFIG: &str = r#"# Custom Defines Configuration
# ============================
#
# The define list itself lives in the data file below and is edited with
# `defines add/remove/rename/toggle` or `defines edit`.

[settings]
# Where the define list is stored (relative to the working directory).
# Writes take a lock on a `<data file>.lock` sibling, which stays behind
# afterwards; `defines init` adds a .gitignore for it next to the data file.
data_path = ".defines/defines.toml"

# How edits are compared when deciding whether the list changed:
#   presence - every entry has an equal entry on the other side (duplicates collapse)
#   counted  - entries and their number of occurrences must match
change_detection = "presence"

# ============================================================================
# TARGETS - Build configurations that receive the enabled defines
# ============================================================================
#
# `defines apply` rewrites the `-define:` line of each target's response file
# and leaves its other lines alone.
#
# [target.standalone]
# description = "Desktop players"
# response_file = "Assets/csc.rsp"
"#;

/// Ignore rules for the write leftovers next to the defines file
pub const DATA_GITIGNORE: &str = "*.lock\n*.tmp\n";

/// Initialize a new configuration.
/// Creates .defines/config.toml in the working directory unless --config is given.
pub fn init_command(work_dir: &Path, config_path: Option<&PathBuf>, force: bool) -> Result<()> {
    let config_path = match config_path {
        Some(p) if p.is_absolute() => p.clone(),
        Some(p) => work_dir.join(p),
        None => Config::config_path(work_dir),
    };

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    info!("Created {}", config_path.display());
    println!("Created {}", config_path.display());

    let data_path = Config::with_defaults().data_path(work_dir);
    if let Some(data_dir) = data_path.parent() {
        write_gitignore(data_dir)?;
    }
    Ok(())
}

/// Write the data directory's .gitignore unless the user already has one
fn write_gitignore(data_dir: &Path) -> Result<()> {
    let path = data_dir.join(".gitignore");
    if path.exists() {
        return Ok(());
    }
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    std::fs::write(&path, DATA_GITIGNORE)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Created {}", path.display());
    Ok(())
}
