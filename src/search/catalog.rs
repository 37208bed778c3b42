//! Catalog builder: navigation targets, show records and quick actions
//! normalized into one immutable snapshot of `SearchableEntry`.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::actions::Intent;
use crate::search::entry::{EntryKind, SearchableEntry};

pub const NAVIGATION_PRIORITY: i32 = 5;
pub const UPCOMING_SHOW_PRIORITY: i32 = 10;
pub const PAST_SHOW_PRIORITY: i32 = 3;

/// A static route entry. `label` and `subtitle` arrive already localized.
#[derive(Clone, Debug)]
pub struct NavTarget {
    pub path: String,
    pub label: String,
    pub subtitle: String,
    pub icon: String,
    pub aliases: Vec<String>,
    pub invoke: Intent,
}

/// A fixed quick action with its own priority.
#[derive(Clone, Debug)]
pub struct QuickAction {
    pub id: String,
    pub label: String,
    pub subtitle: Option<String>,
    pub aliases: Vec<String>,
    pub priority: i32,
    pub invoke: Intent,
}

/// Show as it comes from the API or a JSON file. Every field may be
/// missing or of the wrong type; the builder degrades instead of failing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ShowRecord {
    #[serde(default, deserialize_with = "text_field")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub name: Option<String>,
    /// The API's name for the show; used when `name` is missing.
    #[serde(default, deserialize_with = "text_field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub venue: Option<String>,
}

/// Accepts strings and numbers; anything else (null, objects, bools) is
/// treated as absent. Blank strings are absent too.
fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl ShowRecord {
    fn field(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        Self::field(&self.name).or_else(|| Self::field(&self.title))
    }
    pub fn city(&self) -> Option<&str> {
        Self::field(&self.city)
    }
    pub fn country(&self) -> Option<&str> {
        Self::field(&self.country)
    }
    pub fn venue(&self) -> Option<&str> {
        Self::field(&self.venue)
    }
    pub fn status(&self) -> Option<&str> {
        Self::field(&self.status)
    }
    pub fn date(&self) -> Option<&str> {
        Self::field(&self.date)
    }

    /// Display title: name (or title), then venue, then city.
    pub fn display_title(&self) -> Option<&str> {
        self.name().or_else(|| self.venue()).or_else(|| self.city())
    }

    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        self.date().and_then(parse_show_date)
    }

    /// Upcoming iff the date parses and lies strictly after `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.parsed_date().is_some_and(|d| d > now)
    }
}

/// Parses RFC 3339, naive `YYYY-MM-DDTHH:MM[:SS]` (as UTC) or a bare
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_show_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Immutable snapshot of all entries for one build cycle.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<SearchableEntry>,
    built_at: DateTime<Utc>,
}

impl Catalog {
    pub fn entries(&self) -> &[SearchableEntry] {
        &self.entries
    }
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}

/// Builds a snapshot in fixed source order: navigation, shows, actions.
pub fn build_catalog(
    nav: &[NavTarget],
    shows: &[ShowRecord],
    actions: &[QuickAction],
    now: DateTime<Utc>,
) -> Catalog {
    let mut entries = Vec::with_capacity(nav.len() + shows.len() + actions.len());
    entries.extend(nav.iter().map(nav_entry));

    let mut seen: HashMap<String, usize> = HashMap::new();
    for (position, show) in shows.iter().enumerate() {
        let show_id = show.id.clone().unwrap_or_else(|| format!("#{position}"));
        let count = seen.entry(show_id.clone()).or_insert(0);
        *count += 1;
        let entry_id = if *count == 1 {
            format!("show-{show_id}")
        } else {
            tracing::warn!(show_id = %show_id, occurrence = *count, "duplicate show id in catalog");
            format!("show-{show_id}~{count}")
        };
        entries.push(show_entry(entry_id, position, show_id, show, now));
    }

    entries.extend(actions.iter().map(action_entry));
    tracing::debug!(entries = entries.len(), "catalog rebuilt");
    Catalog { entries, built_at: now }
}

fn nav_entry(target: &NavTarget) -> SearchableEntry {
    let mut keywords = Vec::with_capacity(target.aliases.len() + 1);
    keywords.push(target.label.to_lowercase());
    keywords.extend(target.aliases.iter().map(|a| a.to_lowercase()));
    SearchableEntry {
        id: format!("nav-{}", target.path),
        kind: EntryKind::Navigation { path: target.path.clone(), icon: target.icon.clone() },
        title: target.label.clone(),
        subtitle: Some(target.subtitle.clone()),
        keywords,
        priority: NAVIGATION_PRIORITY,
        invoke: target.invoke.clone(),
    }
}

fn show_entry(id: String, position: usize, show_id: String, show: &ShowRecord, now: DateTime<Utc>) -> SearchableEntry {
    let upcoming = show.is_upcoming(now);
    let keywords = [show.name(), show.city(), show.country(), show.venue(), show.status(), show.date()]
        .into_iter()
        .flatten()
        .map(str::to_lowercase)
        .collect();

    SearchableEntry {
        id,
        kind: EntryKind::Record {
            show_id: show_id.clone(),
            status: show.status().unwrap_or_default().to_string(),
            upcoming,
        },
        title: show.display_title().unwrap_or(&show_id).to_string(),
        subtitle: show_subtitle(show),
        keywords,
        priority: if upcoming { UPCOMING_SHOW_PRIORITY } else { PAST_SHOW_PRIORITY },
        invoke: Intent::EditShow { index: position, show_id },
    }
}

/// "City, Country • date • status", skipping whatever is missing.
fn show_subtitle(show: &ShowRecord) -> Option<String> {
    let locality = [show.city(), show.country()].into_iter().flatten().collect::<Vec<_>>().join(", ");
    let date = match (show.parsed_date(), show.date()) {
        (Some(parsed), _) => Some(parsed.format("%Y-%m-%d").to_string()),
        (None, raw) => raw.map(str::to_string),
    };
    let parts: Vec<String> = [Some(locality).filter(|l| !l.is_empty()), date, show.status().map(str::to_string)]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

fn action_entry(action: &QuickAction) -> SearchableEntry {
    SearchableEntry {
        id: format!("action-{}", action.id),
        kind: EntryKind::Action,
        title: action.label.clone(),
        subtitle: action.subtitle.clone(),
        keywords: action.aliases.iter().map(|a| a.to_lowercase()).collect(),
        priority: action.priority,
        invoke: action.invoke.clone(),
    }
}
