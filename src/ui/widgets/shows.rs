//! Show list: status dot, date, title, locality; selection highlight.

use chrono::{DateTime, Utc};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::search::ShowRecord;
use crate::ui::theme::{colors, styles};

pub struct ShowsView<'a> {
    pub shows: &'a [ShowRecord],
    pub selected: usize,
    /// Row index of the show opened for editing.
    pub editing: Option<usize>,
    pub now: DateTime<Utc>,
    pub title: &'a str,
    pub empty_text: &'a str,
    pub focused: bool,
}

fn date_label(show: &ShowRecord) -> String {
    match (show.parsed_date(), show.date()) {
        (Some(d), _) => d.format("%Y-%m-%d").to_string(),
        (None, Some(raw)) => raw.chars().take(10).collect(),
        (None, None) => "—".to_string(),
    }
}

fn row(index: usize, show: &ShowRecord, view: &ShowsView<'_>) -> Line<'static> {
    let upcoming = show.is_upcoming(view.now);
    let editing = view.editing == Some(index);
    let status = show.status().unwrap_or("");
    let title = show
        .display_title()
        .or(show.id.as_deref())
        .unwrap_or("(untitled)")
        .to_string();
    let locality = [show.city(), show.country()].into_iter().flatten().collect::<Vec<_>>().join(", ");
    let title_style = if upcoming {
        Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
    } else {
        styles::text_dim()
    };
    Line::from(vec![
        Span::styled(if editing { "✎ " } else { "  " }, Style::default().fg(colors::ACCENT)),
        Span::styled("● ", Style::default().fg(colors::status(status))),
        Span::styled(format!("{:<10} ", date_label(show)), Style::default().fg(colors::MUTED)),
        Span::styled(title, title_style),
        Span::styled(format!("  {locality}"), Style::default().fg(colors::MUTED)),
    ])
}

pub fn render(f: &mut Frame, view: &ShowsView<'_>, area: ratatui::prelude::Rect) {
    let border_style = if view.focused {
        Style::default().fg(colors::ACCENT)
    } else {
        Style::default().fg(colors::BORDER)
    };
    let block = Block::default()
        .title(format!(" {} ({}) ", view.title, view.shows.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if view.shows.is_empty() {
        let p = Paragraph::new(view.empty_text).style(Style::default().fg(colors::MUTED));
        f.render_widget(p, inner);
        return;
    }

    let items: Vec<ListItem> = view.shows.iter().enumerate().map(|(i, s)| ListItem::new(row(i, s, view))).collect();
    let list = List::new(items).highlight_style(Style::default().bg(colors::ACCENT_GLOW));
    let mut state = ListState::default().with_selected(Some(view.selected.min(view.shows.len() - 1)));
    f.render_stateful_widget(list, inner, &mut state);
}
