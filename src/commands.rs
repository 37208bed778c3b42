//! Command registry: navigation targets, quick actions, and palette re-ranking.

use chrono::{DateTime, Utc};

use crate::actions::{Intent, Route};
use crate::i18n::{Locale, Text};
use crate::search::{build_catalog, rank, NavTarget, QuickAction, ShowRecord};
use crate::state::PaletteState;

/// (route, icon, aliases). Aliases cover both languages so either locale
/// finds every page.
const NAV_TABLE: &[(Route, &str, &[&str])] = &[
    (Route::Dashboard, "🏠", &["home", "inicio", "dashboard"]),
    (Route::Shows, "🎤", &["shows", "concerts", "conciertos", "gigs"]),
    (Route::Calendar, "📅", &["calendar", "calendario", "schedule"]),
    (Route::Finance, "💰", &["finance", "finanzas", "money", "revenue"]),
    (Route::Travel, "✈", &["travel", "viajes", "flights", "vuelos"]),
    (Route::Settings, "⚙", &["settings", "ajustes", "config"]),
];

pub const ADD_SHOW_PRIORITY: i32 = 7;
pub const EXPORT_CSV_PRIORITY: i32 = 4;

pub fn nav_targets(locale: Locale) -> Vec<NavTarget> {
    NAV_TABLE
        .iter()
        .map(|(route, icon, aliases)| {
            let label = locale.route_label(*route);
            NavTarget {
                path: route.path().to_string(),
                label: label.to_string(),
                subtitle: locale.go_to(label),
                icon: icon.to_string(),
                aliases: aliases.iter().map(|a| a.to_string()).collect(),
                invoke: Intent::Navigate(*route),
            }
        })
        .collect()
}

pub fn quick_actions(locale: Locale) -> Vec<QuickAction> {
    vec![
        QuickAction {
            id: "add-show".into(),
            label: locale.text(Text::AddShow).into(),
            subtitle: Some(locale.text(Text::AddShowHint).into()),
            aliases: ["add", "new", "create", "añadir", "nuevo", "show"].map(String::from).to_vec(),
            priority: ADD_SHOW_PRIORITY,
            invoke: Intent::AddShow,
        },
        QuickAction {
            id: "export-csv".into(),
            label: locale.text(Text::ExportCsv).into(),
            subtitle: Some(locale.text(Text::ExportCsvHint).into()),
            aliases: ["export", "download", "csv", "excel", "exportar"].map(String::from).to_vec(),
            priority: EXPORT_CSV_PRIORITY,
            invoke: Intent::ExportCsv,
        },
    ]
}

/// Rebuild the palette catalog from the current shows and locale.
pub fn rebuild_palette_catalog(palette: &mut PaletteState, shows: &[ShowRecord], locale: Locale, now: DateTime<Utc>) {
    palette.catalog = build_catalog(&nav_targets(locale), shows, &quick_actions(locale), now);
    tracing::debug!(entries = palette.catalog.entries().len(), ?locale, "palette catalog replaced");
    update_palette_filter(palette);
}

/// Re-rank for the current query. Always resets the cursor.
pub fn update_palette_filter(palette: &mut PaletteState) {
    palette.results = rank(palette.catalog.entries(), &palette.query)
        .into_iter()
        .cloned()
        .collect();
    palette.cursor.reset(palette.results.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    fn show(id: &str, city: &str, days_ahead: i64) -> ShowRecord {
        ShowRecord {
            id: Some(id.into()),
            city: Some(city.into()),
            country: Some("ES".into()),
            status: Some("confirmed".into()),
            date: Some((now() + Duration::days(days_ahead)).format("%Y-%m-%d").to_string()),
            ..ShowRecord::default()
        }
    }

    fn titles(palette: &PaletteState) -> Vec<&str> {
        palette.results.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn registry_has_every_route_and_both_actions() {
        let targets = nav_targets(Locale::En);
        assert_eq!(targets.len(), NAV_TABLE.len());
        assert_eq!(targets[3].label, "Finance");
        assert_eq!(targets[3].subtitle, "Go to Finance");
        assert_eq!(quick_actions(Locale::En).len(), 2);
    }

    #[test]
    fn spanish_labels_keep_bilingual_aliases() {
        let targets = nav_targets(Locale::Es);
        assert_eq!(targets[3].label, "Finanzas");
        assert!(targets[3].aliases.contains(&"money".to_string()));
    }

    #[test]
    fn empty_query_surfaces_upcoming_then_actions_then_nav() {
        let mut palette = PaletteState::default();
        rebuild_palette_catalog(&mut palette, &[show("1", "Madrid", 3), show("2", "Bilbao", -3)], Locale::En, now());
        assert_eq!(
            titles(&palette),
            vec!["Madrid", "Add New Show", "Dashboard", "Shows", "Calendar", "Finance", "Travel", "Settings"]
        );
    }

    #[test]
    fn typing_reranks_and_resets_cursor() {
        let mut palette = PaletteState::default();
        rebuild_palette_catalog(&mut palette, &[show("1", "Madrid", 3)], Locale::En, now());
        palette.cursor.next();
        palette.cursor.next();

        palette.query = "madrid".into();
        update_palette_filter(&mut palette);
        assert_eq!(titles(&palette), vec!["Madrid"]);
        assert_eq!(palette.cursor.selected(), Some(0));

        palette.query = "zzz".into();
        update_palette_filter(&mut palette);
        assert!(palette.results.is_empty());
        assert_eq!(palette.cursor.selected(), None);
    }

    #[test]
    fn export_is_found_by_spanish_alias() {
        let mut palette = PaletteState::default();
        rebuild_palette_catalog(&mut palette, &[], Locale::En, now());
        palette.query = "exportar".into();
        update_palette_filter(&mut palette);
        assert_eq!(titles(&palette), vec!["Export Shows to CSV"]);
    }
}
