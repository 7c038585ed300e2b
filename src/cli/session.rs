//! Interactive editing session
//!
//! Reads one command per line, runs it against the store, then does one
//! change-detection cycle and re-renders the list. The unapplied flag lives
//! for the whole session, which makes it the only surface where the dirty
//! latch outlasts a single edit.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{open_store, render_defines};
use crate::apply::TargetApplier;
use crate::domain::TargetId;
use crate::store::DefineSetStore;

const HELP: &str = "\
Commands:
  list                 show the define list
  add [NAME]           append a define (disabled)
  remove N             remove define N
  rename N NAME        rename define N
  toggle N             enable/disable define N
  enabled              show the names that would be applied
  apply                write enabled defines to all targets
  status               show whether there are unapplied changes
  help                 show this help
  quit                 leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    Add(Option<String>),
    Remove(usize),
    Rename(usize, String),
    Toggle(usize),
    Enabled,
    Apply,
    Status,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "list" | "ls" => SessionCommand::List,
            "add" | "a" => SessionCommand::Add((!rest.is_empty()).then(|| rest.to_string())),
            "remove" | "rm" => SessionCommand::Remove(parse_index(rest)?),
            "rename" | "mv" => {
                let (index, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                SessionCommand::Rename(parse_index(index)?, name.trim().to_string())
            }
            "toggle" | "t" => SessionCommand::Toggle(parse_index(rest)?),
            "enabled" => SessionCommand::Enabled,
            "apply" => SessionCommand::Apply,
            "status" => SessionCommand::Status,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => return Err(format!("Unknown command: {other} (try `help`)")),
        };
        Ok(Some(command))
    }
}

fn parse_index(s: &str) -> Result<usize, String> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| format!("Expected a define index, got '{}'", s.trim()))
}

/// An editing session over a loaded store
pub struct Session<'a, A: TargetApplier + ?Sized> {
    store: DefineSetStore,
    targets: Vec<TargetId>,
    applier: &'a mut A,
}

impl<'a, A: TargetApplier + ?Sized> Session<'a, A> {
    pub fn new(store: DefineSetStore, targets: Vec<TargetId>, applier: &'a mut A) -> Self {
        Self {
            store,
            targets,
            applier,
        }
    }

    pub fn store(&self) -> &DefineSetStore {
        &self.store
    }

    /// Run commands from `input` until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        write!(output, "{}", render_defines(self.store.current()))?;

        for line in input.lines() {
            let line = line?;
            let command = match SessionCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    writeln!(output, "error: {message}")?;
                    continue;
                }
            };

            if command == SessionCommand::Quit {
                break;
            }
            self.step(command, output)?;
        }

        if self.store.is_dirty() {
            writeln!(output, "warning: leaving with unapplied changes")?;
        }
        Ok(())
    }

    /// Run one command followed by one change-detection cycle
    fn step<W: Write>(&mut self, command: SessionCommand, output: &mut W) -> Result<()> {
        let rerender = matches!(
            command,
            SessionCommand::Add(_)
                | SessionCommand::Remove(_)
                | SessionCommand::Rename(..)
                | SessionCommand::Toggle(_)
                | SessionCommand::List
        );

        if let Err(e) = self.execute(command, output) {
            writeln!(output, "error: {e:#}")?;
        }
        self.store.detect_change();

        if rerender {
            write!(output, "{}", render_defines(self.store.current()))?;
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: SessionCommand, output: &mut W) -> Result<()> {
        match command {
            SessionCommand::List | SessionCommand::Quit => {}
            SessionCommand::Add(name) => {
                let index = self.store.add_entry()?;
                if let Some(name) = name {
                    self.store.rename_entry(index, name)?;
                }
            }
            SessionCommand::Remove(index) => {
                self.store.remove_entry(index)?;
            }
            SessionCommand::Rename(index, name) => {
                self.store.rename_entry(index, name)?;
            }
            SessionCommand::Toggle(index) => {
                self.store.toggle_entry(index)?;
            }
            SessionCommand::Enabled => {
                writeln!(output, "{}", self.store.compute_enabled_names().join(";"))?;
            }
            SessionCommand::Apply => {
                self.store.apply_to_targets(&self.targets, &mut *self.applier)?;
                writeln!(output, "Applied to {} target(s)", self.targets.len())?;
            }
            SessionCommand::Status => {
                let status = if self.store.is_dirty() {
                    "unapplied changes"
                } else {
                    "clean"
                };
                writeln!(
                    output,
                    "{status} ({} change detection)",
                    self.store.detection().as_str()
                )?;
            }
            SessionCommand::Help => write!(output, "{HELP}")?,
        }
        Ok(())
    }
}

/// Run an interactive session on stdin/stdout
pub fn edit_command(work_dir: &Path, config_override: Option<&PathBuf>) -> Result<()> {
    let (config, store) = open_store(work_dir, config_override)?;
    let mut applier = config.applier(work_dir);
    let mut session = Session::new(store, config.targets(), &mut applier);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout)
}
