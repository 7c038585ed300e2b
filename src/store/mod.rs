//! Define set store
//!
//! Owns the current define list, tracks whether it changed since the last
//! apply, and keeps the defines file on disk in step with memory.
//!
//! Every mutator persists before returning. Change detection runs in cycles:
//! the store keeps a baseline copy taken at the start of the current cycle and
//! [`DefineSetStore::detect_change`] compares against it, latches `dirty`, and
//! starts the next cycle.

mod error;
mod io;

pub use error::StoreError;
pub use io::{read_define_set, write_define_set};
pub(crate) use io::write_atomic;

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::apply::TargetApplier;
use crate::domain::{ChangeDetection, DefineEntry, DefineSet, TargetId};

#[derive(Debug)]
pub struct DefineSetStore {
    path: PathBuf,
    current: DefineSet,
    baseline: DefineSet,
    dirty: bool,
    detection: ChangeDetection,
}

impl DefineSetStore {
    /// Load the store from `path`, starting clean.
    ///
    /// A missing file gives an empty list; a malformed one is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let current = read_define_set(&path)?;
        Ok(Self::with_defines(path, current))
    }

    /// Build a store around an already loaded set
    pub fn with_defines(path: impl Into<PathBuf>, defines: DefineSet) -> Self {
        Self {
            path: path.into(),
            baseline: defines.clone(),
            current: defines,
            dirty: false,
            detection: ChangeDetection::default(),
        }
    }

    /// Choose the equality used by [`DefineSetStore::detect_change`]
    pub fn with_detection(mut self, detection: ChangeDetection) -> Self {
        self.detection = detection;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current(&self) -> &DefineSet {
        &self.current
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn detection(&self) -> ChangeDetection {
        self.detection
    }

    /// Independent copy of the current set
    pub fn snapshot(&self) -> DefineSet {
        self.current.clone()
    }

    /// Presence equality between two sets; see [`DefineSet::equals_snapshot`]
    pub fn equals_snapshot(a: &DefineSet, b: &DefineSet) -> bool {
        a.equals_snapshot(b)
    }

    /// Append a blank, disabled entry and return its index
    pub fn add_entry(&mut self) -> Result<usize, StoreError> {
        self.edit(|entries| {
            entries.push(DefineEntry::placeholder());
            entries.len() - 1
        })
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<DefineEntry, StoreError> {
        self.check_index(index)?;
        self.edit(|entries| entries.remove(index))
    }

    pub fn rename_entry(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.check_index(index)?;
        let name = name.into();
        self.edit(|entries| entries[index].name = name)
    }

    /// Flip an entry's flag and return the new value
    pub fn toggle_entry(&mut self, index: usize) -> Result<bool, StoreError> {
        self.check_index(index)?;
        self.edit(|entries| {
            let entry = &mut entries[index];
            entry.enabled = !entry.enabled;
            entry.enabled
        })
    }

    /// Names that would be handed to build targets, in list order
    pub fn compute_enabled_names(&self) -> Vec<String> {
        self.current.enabled_names()
    }

    /// Compare the current set against the cycle baseline.
    ///
    /// Returns whether this cycle saw a change. A change latches `dirty`; an
    /// unchanged cycle never clears it, even if edits were reverted. The
    /// baseline then moves to the current set for the next cycle.
    pub fn detect_change(&mut self) -> bool {
        let changed = !self.detection.equal(&self.baseline, &self.current);
        if changed {
            tracing::debug!("Define list changed, marking unapplied");
            self.dirty = true;
        }
        self.baseline = self.snapshot();
        changed
    }

    /// Hand the enabled names to `apply_fn`.
    ///
    /// Always runs, whether or not the set is dirty. `dirty` is cleared only
    /// when `apply_fn` succeeds.
    pub fn apply<F>(&mut self, apply_fn: F) -> Result<(), StoreError>
    where
        F: FnOnce(&[String]) -> anyhow::Result<()>,
    {
        self.detect_change();
        let names = self.compute_enabled_names();
        apply_fn(&names).map_err(|e| StoreError::Apply(e.into()))?;
        self.dirty = false;
        tracing::info!("Applied {} enabled defines", names.len());
        Ok(())
    }

    /// Apply the enabled names to every target in order, stopping at the
    /// first failure.
    pub fn apply_to_targets<A>(
        &mut self,
        targets: &[TargetId],
        applier: &mut A,
    ) -> Result<(), StoreError>
    where
        A: TargetApplier + ?Sized,
    {
        self.apply(|names| {
            for target in targets {
                applier
                    .apply(target, names)
                    .with_context(|| format!("Failed to apply defines to target '{}'", target))?;
                tracing::debug!("Applied defines to target '{}'", target);
            }
            Ok(())
        })
    }

    /// Write the current set to the store's path
    pub fn persist(&self) -> Result<(), StoreError> {
        self.persist_to(&self.path)
    }

    /// Write the current set to `path`; does not touch `dirty`
    pub fn persist_to(&self, path: &Path) -> Result<(), StoreError> {
        write_define_set(&self.current, path)
    }

    /// Mutate the list and persist it. A failed write rolls the edit back so
    /// memory and disk never disagree.
    fn edit<T>(&mut self, f: impl FnOnce(&mut Vec<DefineEntry>) -> T) -> Result<T, StoreError> {
        let previous = self.current.clone();
        let out = f(self.current.entries_mut());
        if let Err(e) = self.persist() {
            tracing::warn!("Rolling back define edit: {}", e);
            self.current = previous;
            return Err(e);
        }
        Ok(out)
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        let len = self.current.len();
        if index >= len {
            return Err(StoreError::Index { index, len });
        }
        Ok(())
    }
}
