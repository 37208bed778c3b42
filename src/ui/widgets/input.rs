//! Query bar: palette prompt, query text or placeholder, and cursor.

use ratatui::{
    layout::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::colors;

const PROMPT: &str = " ⌕ ";

pub fn render(f: &mut Frame, query: &str, placeholder: &str, active: bool, area: ratatui::prelude::Rect) {
    let block = Block::default()
        .style(Style::default().bg(colors::ELEVATED))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER))
        .border_type(BorderType::Plain);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let body = if query.is_empty() {
        Span::styled(placeholder, Style::default().fg(colors::MUTED))
    } else {
        Span::styled(query, Style::default().fg(colors::TEXT))
    };
    let prompt_style = if active {
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::MUTED)
    };
    f.render_widget(Paragraph::new(Line::from(vec![Span::styled(PROMPT, prompt_style), body])), inner);

    if active {
        let prompt_width = PROMPT.chars().count() as u16;
        let cursor_x = inner.x + prompt_width + query.chars().count() as u16;
        let x = cursor_x.min(inner.x + inner.width.saturating_sub(1));
        f.set_cursor_position(Position { x, y: inner.y });
    }
}
