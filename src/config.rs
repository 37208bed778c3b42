//! Runtime configuration from `ONTOUR_*` environment variables.

use std::path::PathBuf;

use crate::i18n::Locale;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub token: Option<String>,
    /// When set, shows are read from this file and the API is not used.
    pub shows_file: Option<PathBuf>,
    pub locale: Locale,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let locale = match get("ONTOUR_LANG") {
            Some(tag) => Locale::from_tag(&tag).unwrap_or_else(|| {
                tracing::warn!(tag = %tag, "unsupported ONTOUR_LANG, falling back to en");
                Locale::En
            }),
            None => Locale::En,
        };
        Self {
            base_url: get("ONTOUR_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            token: get("ONTOUR_TOKEN"),
            shows_file: get("ONTOUR_SHOWS_FILE").map(PathBuf::from),
            locale,
            log_file: get("ONTOUR_LOG_FILE").map(PathBuf::from),
        }
    }
}
