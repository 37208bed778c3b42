//! App state: shows, route, activity log, command palette.

use std::time::SystemTime;

use crate::actions::Route;
use crate::i18n::Locale;
use crate::search::{Catalog, SearchableEntry, SelectionCursor, ShowRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: SystemTime,
}

impl LogEntry {
    pub fn info(message: String) -> Self {
        Self { level: LogLevel::Info, message, timestamp: SystemTime::now() }
    }
    pub fn warn(message: String) -> Self {
        Self { level: LogLevel::Warn, message, timestamp: SystemTime::now() }
    }
    pub fn error(message: String) -> Self {
        Self { level: LogLevel::Error, message, timestamp: SystemTime::now() }
    }
}

/// Command palette: visibility, query, catalog snapshot, ranked results, cursor.
#[derive(Clone, Debug, Default)]
pub struct PaletteState {
    pub visible: bool,
    pub query: String,
    pub catalog: Catalog,
    /// Fresh ranked sequence for the current query.
    pub results: Vec<SearchableEntry>,
    pub cursor: SelectionCursor,
}

impl PaletteState {
    pub fn selected_entry(&self) -> Option<&SearchableEntry> {
        self.cursor.selected().and_then(|i| self.results.get(i))
    }
}

/// Global app state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub locale: Locale,
    pub route: Route,
    pub shows: Vec<ShowRecord>,
    /// Highlighted row in the show list.
    pub shows_selected: usize,
    /// Show opened for editing from the palette.
    pub editing_show: Option<usize>,
    pub adding_show: bool,
    pub activity: Vec<LogEntry>,
    pub palette: PaletteState,
    pub loading: bool,
}

impl AppState {
    pub fn log(&mut self, entry: LogEntry) {
        self.activity.push(entry);
    }
}
