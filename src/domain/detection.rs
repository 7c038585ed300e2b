//! Change detection policy

use serde::{Deserialize, Serialize};

use super::DefineSet;

/// Which equality the store uses when deciding whether an edit changed the set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDetection {
    /// Every entry of one set has an equal entry in the other (duplicates collapse)
    #[default]
    Presence,
    /// Same entries with the same number of occurrences
    Counted,
}

impl ChangeDetection {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeDetection::Presence => "presence",
            ChangeDetection::Counted => "counted",
        }
    }

    /// Compare two sets under this policy
    pub fn equal(&self, a: &DefineSet, b: &DefineSet) -> bool {
        match self {
            ChangeDetection::Presence => a.equals_snapshot(b),
            ChangeDetection::Counted => a.equals_counted(b),
        }
    }
}
