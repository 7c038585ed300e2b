//! CLI command implementations

pub mod apply;
pub mod define;
pub mod init;
pub mod session;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::domain::DefineSet;
use crate::store::DefineSetStore;

/// Load the config and the define store it points at
pub(crate) fn open_store(
    work_dir: &Path,
    config_override: Option<&PathBuf>,
) -> Result<(Config, DefineSetStore)> {
    let config = Config::load(work_dir, config_override.map(PathBuf::as_path))?;
    let store = config
        .open_store(work_dir)
        .context("Failed to load define list")?;
    Ok((config, store))
}

/// One line per entry: index, enabled marker, name
pub fn render_defines(defines: &DefineSet) -> String {
    if defines.is_empty() {
        return "(no defines)\n".to_string();
    }

    let mut out = String::new();
    for (index, define) in defines.entries().iter().enumerate() {
        let marker = if define.enabled { "x" } else { " " };
        let name = if define.name.is_empty() {
            "<unnamed>"
        } else {
            define.name.as_str()
        };
        out.push_str(&format!("{index:>3} [{marker}] {name}\n"));
    }
    out
}
