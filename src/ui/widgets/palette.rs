//! Command palette overlay: accent bar selection, highlighted title, subtitle, kind tag.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::{Locale, Text};
use crate::search::{tokenize, EntryKind, SearchableEntry};
use crate::state::PaletteState;
use crate::ui::theme::{colors, styles};

/// Lines used by one result row (title + subtitle).
const ROW_HEIGHT: usize = 2;

/// Char positions in `title` matched by any of `tokens`. Display only;
/// ranking never looks at these.
fn match_positions(matcher: &SkimMatcherV2, title: &str, tokens: &[String]) -> Vec<usize> {
    let mut positions: Vec<usize> = tokens
        .iter()
        .filter_map(|t| matcher.fuzzy_indices(title, t))
        .flat_map(|(_, idx)| idx)
        .collect();
    positions.sort_unstable();
    positions.dedup();
    positions
}

fn highlight(title: &str, positions: &[usize], base: Style, hit: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_hit = false;
    for (i, c) in title.chars().enumerate() {
        let is_hit = positions.binary_search(&i).is_ok();
        if is_hit != run_hit && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), if run_hit { hit } else { base }));
        }
        run_hit = is_hit;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, if run_hit { hit } else { base }));
    }
    spans
}

fn marker(kind: &EntryKind) -> Span<'static> {
    match kind {
        EntryKind::Navigation { icon, .. } => Span::raw(format!("{icon} ")),
        EntryKind::Record { status, .. } => {
            Span::styled("● ", Style::default().fg(colors::status(status)))
        }
        EntryKind::Action => Span::styled("+ ", Style::default().fg(colors::ACCENT_SOFT)),
    }
}

fn result_lines(entry: &SearchableEntry, selected: bool, positions: &[usize], width: usize) -> [Line<'static>; 2] {
    let (base, row_bg) = if selected {
        (Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD), Style::default().bg(colors::ACCENT_GLOW))
    } else {
        (styles::text_dim(), Style::default())
    };
    let hit = base.fg(colors::ACCENT).add_modifier(Modifier::UNDERLINED);

    let bar = Span::styled(if selected { "▎ " } else { "  " }, Style::default().fg(colors::ACCENT));
    let mut first = vec![bar, marker(&entry.kind)];
    first.extend(highlight(&entry.title, positions, base, hit));
    let used: usize = first.iter().map(|s| s.content.chars().count()).sum();
    let tag = entry.kind.tag();
    let pad = width.saturating_sub(used + tag.chars().count() + 1);
    first.push(Span::raw(" ".repeat(pad)));
    first.push(Span::styled(tag.to_uppercase(), Style::default().fg(colors::MUTED)));

    let subtitle = entry.subtitle.clone().unwrap_or_default();
    let second = Line::from(vec![
        Span::raw("    "),
        Span::styled(subtitle, Style::default().fg(if selected { colors::TEXT_DIM } else { colors::MUTED })),
    ]);
    [Line::from(first).style(row_bg), second.style(row_bg)]
}

/// First result index to draw so the selected row stays visible.
fn window_start(selected: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    selected.saturating_sub(capacity - 1)
}

pub fn render(f: &mut Frame, palette: &PaletteState, locale: Locale, area: ratatui::prelude::Rect) {
    if !palette.visible {
        return;
    }
    f.render_widget(Clear, area);
    let block = Block::default()
        .title(format!("  {}  ", locale.text(Text::Placeholder)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if !palette.cursor.is_active() {
        lines.push(Line::from(Span::styled(
            format!("  {}", locale.text(Text::NoResults)),
            styles::text_dim(),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", locale.text(Text::NoResultsHint)),
            Style::default().fg(colors::MUTED),
        )));
    } else {
        let matcher = SkimMatcherV2::default();
        let tokens = tokenize(&palette.query);
        let capacity = (inner.height as usize).saturating_sub(1) / ROW_HEIGHT;
        let selected = palette.cursor.selected().unwrap_or(0);
        let start = window_start(selected, capacity);
        for (i, entry) in palette.results.iter().enumerate().skip(start).take(capacity) {
            let positions = match_positions(&matcher, &entry.title, &tokens);
            lines.extend(result_lines(entry, i == selected, &positions, inner.width as usize));
        }
    }

    let body_height = inner.height.saturating_sub(1);
    let body = ratatui::layout::Rect { height: body_height, ..inner };
    f.render_widget(Paragraph::new(lines), body);

    let footer = ratatui::layout::Rect { y: inner.y + body_height, height: inner.height.min(1), ..inner };
    let footer_text = format!(" ↑↓ · ↵ · esc    {}", locale.results(palette.results.len()));
    f.render_widget(Paragraph::new(Span::styled(footer_text, Style::default().fg(colors::MUTED))), footer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_token_is_highlighted() {
        let matcher = SkimMatcherV2::default();
        let positions = match_positions(&matcher, "Finance", &["fin".to_string()]);
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn highlight_splits_runs() {
        let base = Style::default();
        let hit = Style::default().add_modifier(Modifier::BOLD);
        let spans = highlight("Paris Show", &[0, 1, 2, 3, 4], base, hit);
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["Paris", " Show"]);
        assert_eq!(spans[0].style, hit);
    }

    #[test]
    fn no_tokens_means_no_highlight() {
        let matcher = SkimMatcherV2::default();
        assert!(match_positions(&matcher, "Finance", &[]).is_empty());
    }

    #[test]
    fn window_follows_cursor() {
        assert_eq!(window_start(0, 5), 0);
        assert_eq!(window_start(4, 5), 0);
        assert_eq!(window_start(7, 5), 3);
        assert_eq!(window_start(3, 0), 0);
    }
}
