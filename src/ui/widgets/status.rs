//! Status bar: load state on the left, key hints on the right.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::colors;

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect, left: &str, hints: &str) {
    let width = area.width as usize;
    let pad = width.saturating_sub(left.chars().count() + hints.chars().count());
    let line = format!("{left}{}{hints}", " ".repeat(pad));
    let span = Span::styled(line, Style::default().fg(colors::MUTED).bg(colors::ELEVATED));
    f.render_widget(Paragraph::new(span), area);
}
