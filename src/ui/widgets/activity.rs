//! Activity panel: append-only log of loads and invoked palette entries, newest at the bottom.

use chrono::{DateTime, Local};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{LogEntry, LogLevel};
use crate::ui::theme::{colors, styles};

fn level_style(level: LogLevel) -> Style {
    match level {
        LogLevel::Info => styles::text_dim(),
        LogLevel::Warn => Style::default().fg(colors::WARNING),
        LogLevel::Error => Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD),
    }
}

pub fn render(f: &mut Frame, entries: &[LogEntry], title: &str, area: ratatui::prelude::Rect) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = entries
        .iter()
        .map(|e| {
            let time = DateTime::<Local>::from(e.timestamp).format("%H:%M:%S ").to_string();
            Line::from(vec![
                Span::styled(time, Style::default().fg(colors::MUTED)),
                Span::styled(e.message.as_str(), level_style(e.level)),
            ])
        })
        .collect();
    // Auto-scroll: keep the tail visible.
    let height = inner.height as usize;
    let skip = lines.len().saturating_sub(height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
    let para = Paragraph::new(visible).wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}
