//! Custom Defines
//!
//! Keeps a list of compiler define symbols, each switched on or off, and
//! writes the enabled ones to a set of build targets.
//!
//! ## Pieces
//!
//! - [`store::DefineSetStore`] owns the list, persists it after every edit and
//!   tracks whether it changed since the last apply.
//! - [`apply::TargetApplier`] configures one build target with the enabled
//!   names; [`apply::ResponseFileApplier`] writes compiler response files.
//! - [`config::Config`] names the defines file and the targets.
//! - [`cli`] holds the `defines` command implementations.

pub mod apply;
pub mod cli;
pub mod config;
pub mod domain;
pub mod store;

pub use domain::*;
