//! Compiler response file applier
//!
//! Each target owns a response file (for example `Assets/csc.rsp`). Applying
//! rewrites its `-define:` line and keeps every other line as it was.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::TargetApplier;
use crate::domain::TargetId;
use crate::store::write_atomic;

const DEFINE_PREFIXES: [&str; 4] = ["-define:", "/define:", "-d:", "/d:"];

/// Writes the enabled defines into one response file per target
#[derive(Debug, Clone, Default)]
pub struct ResponseFileApplier {
    files: BTreeMap<TargetId, PathBuf>,
}

impl ResponseFileApplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the response file for a target
    pub fn with_target(mut self, target: TargetId, path: impl Into<PathBuf>) -> Self {
        self.files.insert(target, path.into());
        self
    }

    pub fn response_file(&self, target: &TargetId) -> Option<&Path> {
        self.files.get(target).map(PathBuf::as_path)
    }
}

impl TargetApplier for ResponseFileApplier {
    fn apply(&mut self, target: &TargetId, names: &[String]) -> Result<()> {
        let Some(path) = self.files.get(target) else {
            bail!("No response file configured for target '{}'", target);
        };

        // The compiler splits the define list on these
        if let Some(name) = names
            .iter()
            .map(|name| name.trim())
            .find(|name| name.contains(|c: char| c == ';' || c == ',' || c.is_whitespace()))
        {
            bail!(
                "Define '{}' for target '{}' contains a separator (';', ',' or whitespace)",
                name,
                target
            );
        }

        let existing = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read response file: {}", path.display()));
            }
        };

        let content = render_response_file(&existing, names);
        write_atomic(path, content.as_bytes())
            .with_context(|| format!("Failed to write response file: {}", path.display()))?;

        tracing::debug!("Wrote {} defines to {}", names.len(), path.display());
        Ok(())
    }
}

/// Replace the define line of a response file.
///
/// Earlier define lines (long or short form) are dropped, empty names are skipped, and no define
/// line is written when nothing remains.
pub fn render_response_file(existing: &str, names: &[String]) -> String {
    let defines: Vec<&str> = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect();
    let define_line = format!("-define:{}", defines.join(";"));

    let mut lines: Vec<&str> = existing
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !DEFINE_PREFIXES
                .iter()
                .any(|prefix| trimmed.starts_with(prefix))
        })
        .collect();

    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    if !defines.is_empty() {
        lines.push(&define_line);
    }

    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    content
}
