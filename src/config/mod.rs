//! Configuration loading and management

mod io;
mod settings;
mod target;

pub use settings::Settings;
pub use target::TargetConfig;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::apply::ResponseFileApplier;
use crate::domain::TargetId;
use crate::store::{DefineSetStore, StoreError};

/// Directory holding the config and the default defines file
pub const CONFIG_DIR: &str = ".defines";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,

    /// Build targets, keyed by target id
    #[serde(default)]
    pub target: BTreeMap<String, TargetConfig>,
}

impl Config {
    /// Default config file location for a working directory (.defines/config.toml)
    pub fn config_path(work_dir: &Path) -> PathBuf {
        work_dir.join(CONFIG_DIR).join("config.toml")
    }

    /// Target ids in key order
    pub fn targets(&self) -> Vec<TargetId> {
        self.target.keys().map(|id| TargetId::new(id.as_str())).collect()
    }

    /// Resolved location of the defines file
    pub fn data_path(&self, work_dir: &Path) -> PathBuf {
        resolve(work_dir, &self.settings.data_path)
    }

    /// Applier writing each configured target's response file
    pub fn applier(&self, work_dir: &Path) -> ResponseFileApplier {
        self.target
            .iter()
            .fold(ResponseFileApplier::new(), |applier, (id, target)| {
                let path = resolve(work_dir, &target.response_file);
                applier.with_target(TargetId::new(id.as_str()), path)
            })
    }

    /// Load the define store this config points at
    pub fn open_store(&self, work_dir: &Path) -> Result<DefineSetStore, StoreError> {
        Ok(DefineSetStore::load(self.data_path(work_dir))?
            .with_detection(self.settings.change_detection))
    }
}

fn resolve(work_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        work_dir.join(path)
    }
}
