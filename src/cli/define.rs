//! Define list commands (edit the defines file)

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::{open_store, render_defines};
use crate::store::DefineSetStore;

/// Report the change after a one-shot edit. Each invocation is its own
/// session, so an edit always leaves the list unapplied.
fn report_change(store: &mut DefineSetStore) {
    if store.detect_change() {
        println!("Defines changed. Run `defines apply` to update build targets.");
    }
}

pub fn list_command(work_dir: &Path, config_override: Option<&PathBuf>, json: bool) -> Result<()> {
    let (_, store) = open_store(work_dir, config_override)?;

    if json {
        println!("{}", serde_json::to_string_pretty(store.current().entries())?);
    } else {
        print!("{}", render_defines(store.current()));
    }
    Ok(())
}

pub fn enabled_command(
    work_dir: &Path,
    config_override: Option<&PathBuf>,
    json: bool,
) -> Result<()> {
    let (_, store) = open_store(work_dir, config_override)?;
    let names = store.compute_enabled_names();

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

pub fn add_command(
    work_dir: &Path,
    config_override: Option<&PathBuf>,
    name: Option<String>,
    enable: bool,
) -> Result<()> {
    let (_, mut store) = open_store(work_dir, config_override)?;

    let index = store.add_entry()?;
    if let Some(name) = name {
        store.rename_entry(index, name)?;
    }
    if enable {
        store.toggle_entry(index)?;
    }

    println!("Added define at index {index}");
    report_change(&mut store);
    Ok(())
}

pub fn remove_command(
    work_dir: &Path,
    config_override: Option<&PathBuf>,
    index: usize,
) -> Result<()> {
    let (_, mut store) = open_store(work_dir, config_override)?;
    let removed = store.remove_entry(index)?;

    println!("Removed define: {}", removed.name);
    report_change(&mut store);
    Ok(())
}

pub fn rename_command(
    work_dir: &Path,
    config_override: Option<&PathBuf>,
    index: usize,
    name: String,
) -> Result<()> {
    let (_, mut store) = open_store(work_dir, config_override)?;
    store.rename_entry(index, name)?;

    report_change(&mut store);
    Ok(())
}

pub fn toggle_command(
    work_dir: &Path,
    config_override: Option<&PathBuf>,
    index: usize,
) -> Result<()> {
    let (_, mut store) = open_store(work_dir, config_override)?;
    let enabled = store.toggle_entry(index)?;

    let state = if enabled { "enabled" } else { "disabled" };
    println!("Define {index} {state}");
    report_change(&mut store);
    Ok(())
}
