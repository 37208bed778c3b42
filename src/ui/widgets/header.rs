//! Header banner: app title, version, current route and show source.

use ratatui::{
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::actions::Route;
use crate::i18n::Locale;
use crate::ui::theme::styles;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Truncate to `max_chars` from the start, keeping the tail. Single pass over chars.
fn truncate_start(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    let take = max_chars.saturating_sub(1);
    format!("…{}", s.chars().skip(count - take).collect::<String>())
}

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect, route: Route, locale: Locale, source: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border())
        .style(styles::elevated_bg());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = format!("On Tour (v{VERSION})");
    let location = format!("{} · {}", locale.route_label(route), route.path());
    let used = title.chars().count() + location.chars().count() + 6;
    let source_show = truncate_start(source, (inner.width as usize).saturating_sub(used));

    let line = Line::from(vec![
        Span::styled("♪ ", styles::accent_bold()),
        Span::styled(title, styles::text()),
        Span::styled("  ", styles::muted()),
        Span::styled(location, styles::accent_bold()),
        Span::styled("  ", styles::muted()),
        Span::styled(source_show, styles::muted()),
    ]);
    f.render_widget(Paragraph::new(line), inner);
}
