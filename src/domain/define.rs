//! Define symbol entries and the ordered set that holds them

use serde::{Deserialize, Serialize};

/// A single define symbol and whether it is passed to build targets
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DefineEntry {
    /// Symbol name. May be empty while the user is still typing it.
    #[serde(default)]
    pub name: String,

    /// Whether the symbol is part of the enabled projection
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl DefineEntry {
    /// Create an enabled entry
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
        }
    }

    /// Create an entry with an explicit flag
    pub fn with_enabled(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }

    /// The blank, disabled row appended by "add"
    pub fn placeholder() -> Self {
        Self::with_enabled("", false)
    }
}

impl Default for DefineEntry {
    fn default() -> Self {
        Self::new("")
    }
}

/// Ordered list of define entries.
///
/// Order only matters for display. Names are not required to be unique and
/// duplicates apply independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefineSet {
    #[serde(default, rename = "define")]
    entries: Vec<DefineEntry>,
}

impl DefineSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<DefineEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DefineEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<DefineEntry> {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DefineEntry> {
        self.entries.get(index)
    }

    pub fn push(&mut self, entry: DefineEntry) {
        self.entries.push(entry);
    }

    /// Names of the enabled entries, in list order
    pub fn enabled_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|define| define.enabled)
            .map(|define| define.name.clone())
            .collect()
    }

    /// Presence equality: every entry here has an equal entry in `other` and
    /// vice versa.
    ///
    /// Order does not matter, and neither does multiplicity: `[X, X]` equals
    /// `[X]`. Use [`DefineSet::equals_counted`] when occurrence counts matter.
    pub fn equals_snapshot(&self, other: &DefineSet) -> bool {
        self.entries
            .iter()
            .all(|define| other.entries.contains(define))
            && other
                .entries
                .iter()
                .all(|other_define| self.entries.contains(other_define))
    }

    /// Order-insensitive equality that also compares how often each entry occurs
    pub fn equals_counted(&self, other: &DefineSet) -> bool {
        if self.entries.len() != other.entries.len() {
            return false;
        }
        let mut ours: Vec<&DefineEntry> = self.entries.iter().collect();
        let mut theirs: Vec<&DefineEntry> = other.entries.iter().collect();
        ours.sort();
        theirs.sort();
        ours == theirs
    }
}

impl FromIterator<DefineEntry> for DefineSet {
    fn from_iter<I: IntoIterator<Item = DefineEntry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}
