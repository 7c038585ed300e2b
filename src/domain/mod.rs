//! Core domain types for custom defines

mod define;
mod detection;
mod target;

pub use define::{DefineEntry, DefineSet};
pub use detection::ChangeDetection;
pub use target::TargetId;
