//! The uniform entry shape the ranker works on.

use crate::actions::Intent;

/// Origin of an entry, with only the data that origin carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Navigation { path: String, icon: String },
    Record { show_id: String, status: String, upcoming: bool },
    Action,
}

impl EntryKind {
    pub fn is_navigation(&self) -> bool {
        matches!(self, EntryKind::Navigation { .. })
    }

    /// Short tag shown next to a result.
    pub fn tag(&self) -> &'static str {
        match self {
            EntryKind::Navigation { .. } => "nav",
            EntryKind::Record { .. } => "show",
            EntryKind::Action => "action",
        }
    }
}

/// One searchable unit. `keywords` are lower-cased when built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchableEntry {
    pub id: String,
    pub kind: EntryKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub keywords: Vec<String>,
    pub priority: i32,
    pub invoke: Intent,
}

/// An entry paired with its score for one ranking pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankedResult<'a> {
    pub entry: &'a SearchableEntry,
    pub score: u32,
}
