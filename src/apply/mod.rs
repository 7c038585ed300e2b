//! Build target appliers
//!
//! The store knows nothing about build targets; it hands the enabled names to
//! a [`TargetApplier`] once per target.

mod response_file;

pub use response_file::{ResponseFileApplier, render_response_file};

use anyhow::Result;

use crate::domain::TargetId;

/// Configures one build target with a list of define names
pub trait TargetApplier {
    fn apply(&mut self, target: &TargetId, names: &[String]) -> Result<()>;
}

impl<F> TargetApplier for F
where
    F: FnMut(&TargetId, &[String]) -> Result<()>,
{
    fn apply(&mut self, target: &TargetId, names: &[String]) -> Result<()> {
        self(target, names)
    }
}
