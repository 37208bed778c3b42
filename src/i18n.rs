//! UI strings for the supported locales. The locale is passed explicitly;
//! there is no global language setting.

use crate::actions::Route;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Parses `en`, `es`, `es-ES`, `es_MX.UTF-8` and friends.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag.trim().split(['-', '_', '.']).next()?.to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    pub fn route_label(self, route: Route) -> &'static str {
        match (self, route) {
            (Locale::En, Route::Dashboard) => "Dashboard",
            (Locale::En, Route::Shows) => "Shows",
            (Locale::En, Route::Calendar) => "Calendar",
            (Locale::En, Route::Finance) => "Finance",
            (Locale::En, Route::Travel) => "Travel",
            (Locale::En, Route::Settings) => "Settings",
            (Locale::Es, Route::Dashboard) => "Panel",
            (Locale::Es, Route::Shows) => "Shows",
            (Locale::Es, Route::Calendar) => "Calendario",
            (Locale::Es, Route::Finance) => "Finanzas",
            (Locale::Es, Route::Travel) => "Viajes",
            (Locale::Es, Route::Settings) => "Ajustes",
        }
    }

    pub fn go_to(self, label: &str) -> String {
        match self {
            Locale::En => format!("Go to {label}"),
            Locale::Es => format!("Ir a {label}"),
        }
    }

    pub fn text(self, key: Text) -> &'static str {
        use Text::*;
        match (self, key) {
            (Locale::En, Placeholder) => "Search shows, navigate, or type a command...",
            (Locale::Es, Placeholder) => "Buscar shows o acciones…",
            (Locale::En, NoResults) => "No results found",
            (Locale::Es, NoResults) => "Sin resultados",
            (Locale::En, NoResultsHint) => "Try searching for a show, city, or page name",
            (Locale::Es, NoResultsHint) => "Prueba con un show, una ciudad o una página",
            (Locale::En, AddShow) => "Add New Show",
            (Locale::Es, AddShow) => "Añadir nuevo show",
            (Locale::En, AddShowHint) => "Create a new show quickly",
            (Locale::Es, AddShowHint) => "Crea un show rápidamente",
            (Locale::En, ExportCsv) => "Export Shows to CSV",
            (Locale::Es, ExportCsv) => "Exportar shows a CSV",
            (Locale::En, ExportCsvHint) => "Download all shows as spreadsheet",
            (Locale::Es, ExportCsvHint) => "Descarga todos los shows como hoja de cálculo",
            (Locale::En, Shows) => "Shows",
            (Locale::Es, Shows) => "Shows",
            (Locale::En, Activity) => "Activity",
            (Locale::Es, Activity) => "Actividad",
            (Locale::En, Loading) => "Loading shows…",
            (Locale::Es, Loading) => "Cargando shows…",
            (Locale::En, NoShows) => "No shows yet",
            (Locale::Es, NoShows) => "Aún no hay shows",
            (Locale::En, Hints) => " Ctrl+K palette  ↑↓ move  Enter select  Ctrl+R reload  q quit ",
            (Locale::Es, Hints) => " Ctrl+K paleta  ↑↓ mover  Enter elegir  Ctrl+R recargar  q salir ",
        }
    }

    pub fn results(self, count: usize) -> String {
        match (self, count) {
            (Locale::En, 1) => "1 result".to_string(),
            (Locale::En, n) => format!("{n} results"),
            (Locale::Es, 1) => "1 resultado".to_string(),
            (Locale::Es, n) => format!("{n} resultados"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    Placeholder,
    NoResults,
    NoResultsHint,
    AddShow,
    AddShowHint,
    ExportCsv,
    ExportCsvHint,
    Shows,
    Activity,
    Loading,
    NoShows,
    Hints,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_tags_parse_language_prefix() {
        assert_eq!(Locale::from_tag("es"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("es_MX.UTF-8"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("EN-gb"), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn result_counts_pluralize() {
        assert_eq!(Locale::En.results(1), "1 result");
        assert_eq!(Locale::En.results(0), "0 results");
        assert_eq!(Locale::Es.results(3), "3 resultados");
    }
}
