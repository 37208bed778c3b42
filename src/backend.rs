//! Show sources: the On Tour API (GET /api/shows) or a local JSON file.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SourceError};
use crate::search::ShowRecord;

/// `GET /api/shows` answers `{ data, total }`; exports and fixtures are
/// often a bare array. Both are accepted. Elements stay raw JSON so one bad
/// record cannot reject the whole list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShowsPayload {
    Envelope {
        data: Vec<Value>,
        #[serde(default)]
        total: Option<u64>,
    },
    Bare(Vec<Value>),
}

pub fn decode_shows(raw: &str) -> Result<Vec<ShowRecord>> {
    let items = match serde_json::from_str::<ShowsPayload>(raw)? {
        ShowsPayload::Envelope { data, total } => {
            if let Some(total) = total {
                if total as usize != data.len() {
                    tracing::debug!(total, received = data.len(), "shows payload is paginated");
                }
            }
            data
        }
        ShowsPayload::Bare(items) => items,
    };
    Ok(items.into_iter().enumerate().filter_map(|(i, item)| decode_record(i, item)).collect())
}

fn decode_record(position: usize, item: Value) -> Option<ShowRecord> {
    if !item.is_object() {
        tracing::warn!(position, kind = json_kind(&item), "skipping show that is not an object");
        return None;
    }
    match ShowRecord::deserialize(item) {
        Ok(show) => Some(show),
        Err(e) => {
            tracing::warn!(position, error = %e, "skipping undecodable show");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub struct ShowsClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl ShowsClient {
    pub fn new(base_url: String, token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(SourceError::Client)?;
        Ok(Self { base_url, token, client })
    }

    pub fn shows_url(&self) -> String {
        format!("{}/api/shows", self.base_url.trim_end_matches('/'))
    }

    pub fn list_shows(&self) -> Result<Vec<ShowRecord>> {
        let url = self.shows_url();
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let resp = request
            .send()
            .map_err(|source| SourceError::Transport { url: url.clone(), source })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        let body = resp
            .text()
            .map_err(|source| SourceError::Transport { url, source })?;
        decode_shows(&body)
    }
}

/// Where shows come from for this session.
pub enum ShowSource {
    Api(ShowsClient),
    File(PathBuf),
}

impl ShowSource {
    pub fn describe(&self) -> String {
        match self {
            ShowSource::Api(client) => client.shows_url(),
            ShowSource::File(path) => path.display().to_string(),
        }
    }

    pub fn load(&self) -> Result<Vec<ShowRecord>> {
        match self {
            ShowSource::Api(client) => client.list_shows(),
            ShowSource::File(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|source| SourceError::Io { path: path.clone(), source })?;
                decode_shows(&raw)
            }
        }
    }
}
