//! User actions (from keys) and intents (attached to palette entries).

/// Keyboard-level actions produced by `events::key_to_action`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Char(char),
    Backspace,
    ClearInput,
    Refresh,

    ShowsUp,
    ShowsDown,

    PaletteToggle,
    PaletteHide,
    PaletteUp,
    PaletteDown,
    PaletteSelect,
}

/// Dashboard routes reachable from the palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Dashboard,
    Shows,
    Calendar,
    Finance,
    Travel,
    Settings,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Shows => "/dashboard/shows",
            Route::Calendar => "/dashboard/calendar",
            Route::Finance => "/dashboard/finance",
            Route::Travel => "/dashboard/travel",
            Route::Settings => "/dashboard/settings",
        }
    }
}

/// What happens when a palette entry is chosen. The search engine carries
/// these around untouched; only `App::invoke` interprets them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Navigate(Route),
    /// `index` is the record's position in the show list the catalog was
    /// built from; `show_id` is the upstream id (or `#<index>` when missing).
    EditShow { index: usize, show_id: String },
    AddShow,
    ExportCsv,
}
