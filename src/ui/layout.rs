//! Header, two-column body (shows | activity), input bar, status line.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    HEADER_HEIGHT, INPUT_HEIGHT, MARGIN_X, MIN_BODY_LINES, PALETTE_MAX_HEIGHT, PALETTE_MAX_WIDTH,
    SHOWS_WIDTH_PCT, STATUS_HEIGHT,
};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub shows: Rect,
    pub activity: Rect,
    pub input: Rect,
    pub status: Rect,
}

/// Palette overlay: horizontally centred, starting ~15% from the top.
pub fn palette_overlay_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(PALETTE_MAX_WIDTH);
    let top = area.height * 15 / 100;
    let height = area.height.saturating_sub(top + 1).min(PALETTE_MAX_HEIGHT);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + top,
        width,
        height,
    }
}

pub fn compute(area: Rect) -> LayoutRegions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MIN_BODY_LINES),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let body = Rect {
        x: area.x + MARGIN_X,
        y: rows[1].y,
        width: area.width.saturating_sub(2 * MARGIN_X),
        height: rows[1].height,
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(SHOWS_WIDTH_PCT),
            Constraint::Percentage(100 - SHOWS_WIDTH_PCT),
        ])
        .split(body);
    LayoutRegions {
        header: rows[0],
        shows: columns[0],
        activity: columns[1],
        input: rows[2],
        status: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_fill_the_terminal() {
        let area = Rect::new(0, 0, 100, 40);
        let r = compute(area);
        assert_eq!(r.header.height, HEADER_HEIGHT);
        assert_eq!(r.status.y + r.status.height, 40);
        assert_eq!(r.shows.x, MARGIN_X);
        assert!(r.shows.width > r.activity.width);
        assert!(r.shows.width + r.activity.width <= 100 - 2 * MARGIN_X);
    }

    #[test]
    fn palette_fits_inside_small_terminals() {
        let area = Rect::new(0, 0, 30, 10);
        let p = palette_overlay_rect(area);
        assert!(p.x + p.width <= area.width);
        assert!(p.y + p.height <= area.height);
    }
}
