//! Apply command implementation

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::open_store;

/// Write the enabled defines to every configured target
pub fn apply_command(work_dir: &Path, config_override: Option<&PathBuf>) -> Result<()> {
    let (config, mut store) = open_store(work_dir, config_override)?;
    let targets = config.targets();
    if targets.is_empty() {
        warn!("No build targets configured; add [target.<id>] tables to the config");
    }

    let mut applier = config.applier(work_dir);
    store.apply_to_targets(&targets, &mut applier)?;

    let names = store.compute_enabled_names();
    for target in &targets {
        println!("{target}: {}", names.join(";"));
    }
    Ok(())
}
