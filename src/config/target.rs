//! Target configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Target configuration - a build configuration that receives the enabled defines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Compiler response file the defines are written to, relative to the
    /// working directory unless absolute
    pub response_file: PathBuf,
}
