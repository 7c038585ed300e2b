//! Settings configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::ChangeDetection;

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where the define list is stored, relative to the working directory
    /// unless absolute
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Equality used to decide whether an edit changed the list.
    /// `presence` treats `[X, X]` and `[X]` as equal; `counted` does not.
    #[serde(default)]
    pub change_detection: ChangeDetection,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(".defines/defines.toml")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            change_detection: ChangeDetection::default(),
        }
    }
}
