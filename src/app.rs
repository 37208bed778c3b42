//! Global state container, action dispatch, and intent handling.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::actions::{Action, Intent, Route};
use crate::backend::ShowSource;
use crate::commands::{rebuild_palette_catalog, update_palette_filter};
use crate::error::SourceError;
use crate::i18n::Locale;
use crate::search::ShowRecord;
use crate::state::{AppState, LogEntry};

type LoadResult = Result<Vec<ShowRecord>, SourceError>;

pub struct App {
    pub state: AppState,
    source: Arc<ShowSource>,
    loads_tx: UnboundedSender<LoadResult>,
    loads_rx: UnboundedReceiver<LoadResult>,
    pub should_quit: bool,
    /// For spinner animation (incremented each tick).
    pub tick: usize,
}

impl App {
    pub fn new(source: ShowSource, locale: Locale) -> Self {
        let (loads_tx, loads_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState { locale, ..AppState::default() },
            source: Arc::new(source),
            loads_tx,
            loads_rx,
            should_quit: false,
            tick: 0,
        }
    }

    pub fn source_label(&self) -> String {
        self.source.describe()
    }

    pub fn bootstrap(&mut self) {
        let locale = self.state.locale;
        rebuild_palette_catalog(&mut self.state.palette, &[], locale, Utc::now());
        self.state
            .log(LogEntry::info(format!("Loading shows from {}", self.source.describe())));
        self.request_load();
    }

    /// Loads shows on a worker thread; the result arrives via `poll_results`.
    pub fn request_load(&mut self) {
        if self.state.loading {
            return;
        }
        self.state.loading = true;
        let source = Arc::clone(&self.source);
        let tx = self.loads_tx.clone();
        std::thread::spawn(move || {
            // The receiver only goes away on shutdown.
            let _ = tx.send(source.load());
        });
    }

    pub fn poll_results(&mut self) {
        while let Ok(result) = self.loads_rx.try_recv() {
            self.state.loading = false;
            match result {
                Ok(shows) => self.apply_shows(shows, Utc::now()),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load shows");
                    self.state.log(LogEntry::error(format!("Could not load shows: {e}")));
                }
            }
        }
    }

    /// Replace the show list and rebuild the palette catalog as of `now`.
    pub fn apply_shows(&mut self, shows: Vec<ShowRecord>, now: DateTime<Utc>) {
        let upcoming = shows.iter().filter(|s| s.is_upcoming(now)).count();
        tracing::info!(shows = shows.len(), upcoming, "shows loaded");
        self.state.log(LogEntry::info(format!("Loaded {} shows ({upcoming} upcoming)", shows.len())));
        self.state.shows = shows;
        // Row indices from the previous list no longer apply.
        self.state.editing_show = None;
        self.state.shows_selected = self
            .state
            .shows_selected
            .min(self.state.shows.len().saturating_sub(1));
        let locale = self.state.locale;
        rebuild_palette_catalog(&mut self.state.palette, &self.state.shows, locale, now);
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                if self.state.palette.visible {
                    self.state.palette.query.push(c);
                    update_palette_filter(&mut self.state.palette);
                }
            }
            Action::Backspace => {
                if self.state.palette.visible && self.state.palette.query.pop().is_some() {
                    update_palette_filter(&mut self.state.palette);
                }
            }
            Action::ClearInput => {
                if self.state.palette.visible {
                    self.state.palette.query.clear();
                    update_palette_filter(&mut self.state.palette);
                }
            }
            Action::Refresh => self.request_load(),

            Action::ShowsUp => {
                self.state.shows_selected = self.state.shows_selected.saturating_sub(1);
            }
            Action::ShowsDown => {
                if self.state.shows_selected + 1 < self.state.shows.len() {
                    self.state.shows_selected += 1;
                }
            }

            Action::PaletteToggle => {
                if self.state.palette.visible {
                    self.close_palette();
                } else {
                    self.state.palette.visible = true;
                    self.state.palette.query.clear();
                    update_palette_filter(&mut self.state.palette);
                }
                tracing::info!(open = self.state.palette.visible, "command palette toggled");
            }
            Action::PaletteHide => self.close_palette(),
            Action::PaletteUp => self.state.palette.cursor.previous(),
            Action::PaletteDown => self.state.palette.cursor.next(),
            Action::PaletteSelect => {
                if let Some(entry) = self.state.palette.selected_entry().cloned() {
                    tracing::info!(entry = %entry.id, kind = entry.kind.tag(), "palette entry selected");
                    self.close_palette();
                    self.invoke(entry.invoke);
                }
            }
        }
    }

    /// Closing discards the query, the results and the cursor.
    fn close_palette(&mut self) {
        let palette = &mut self.state.palette;
        palette.visible = false;
        palette.query.clear();
        palette.results.clear();
        palette.cursor.reset(0);
    }

    fn invoke(&mut self, intent: Intent) {
        match intent {
            Intent::Navigate(route) => {
                tracing::info!(to = route.path(), "navigate");
                self.state.route = route;
                self.state.editing_show = None;
                self.state.adding_show = false;
                self.state.log(LogEntry::info(format!("Opened {}", route.path())));
            }
            Intent::EditShow { index, show_id } => {
                if index >= self.state.shows.len() {
                    tracing::warn!(index, show_id = %show_id, "show no longer in list");
                    return;
                }
                tracing::info!(index, show_id = %show_id, "open show");
                self.state.route = Route::Shows;
                self.state.adding_show = false;
                self.state.shows_selected = index;
                self.state.editing_show = Some(index);
                self.state.log(LogEntry::info(format!("Editing show {show_id}")));
            }
            Intent::AddShow => {
                tracing::info!(action = "addShow", "palette action");
                self.state.route = Route::Shows;
                self.state.editing_show = None;
                self.state.adding_show = true;
                self.state.log(LogEntry::info("New show draft started".to_string()));
            }
            Intent::ExportCsv => {
                tracing::info!(action = "exportCsv", shows = self.state.shows.len(), "palette action");
                self.state.log(LogEntry::warn(format!(
                    "CSV export requested for {} shows (no exporter configured)",
                    self.state.shows.len()
                )));
            }
        }
    }
}
