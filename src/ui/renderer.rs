//! Full-screen render: header, shows, activity, query bar, status, optional palette overlay.

use ratatui::Frame;

use crate::app::App;
use crate::i18n::Text;
use crate::ui::layout;
use crate::ui::theme::SPINNER;
use crate::ui::widgets::{
    render_activity, render_header, render_input, render_palette, render_shows, render_status, ShowsView,
};

pub fn render(f: &mut Frame, app: &App, tick: usize) {
    let area = f.area();
    let regions = layout::compute(area);
    let state = &app.state;
    let locale = state.locale;
    let palette = &state.palette;

    render_header(f, regions.header, state.route, locale, &app.source_label());

    let empty_text = if state.loading { locale.text(Text::Loading) } else { locale.text(Text::NoShows) };
    let view = ShowsView {
        shows: &state.shows,
        selected: state.shows_selected,
        editing: state.editing_show,
        now: palette.catalog.built_at(),
        title: locale.text(Text::Shows),
        empty_text,
        focused: !palette.visible,
    };
    render_shows(f, &view, regions.shows);
    render_activity(f, &state.activity, locale.text(Text::Activity), regions.activity);

    render_input(f, &palette.query, locale.text(Text::Placeholder), palette.visible, regions.input);

    let left = if state.loading {
        format!(" {} {}", SPINNER[tick % SPINNER.len()], locale.text(Text::Loading))
    } else if state.adding_show {
        format!(" {} · {}", state.route.path(), locale.text(Text::AddShow))
    } else {
        format!(" {}", state.route.path())
    };
    render_status(f, regions.status, &left, locale.text(Text::Hints));

    if palette.visible {
        render_palette(f, palette, locale, layout::palette_overlay_rect(area));
    }
}
