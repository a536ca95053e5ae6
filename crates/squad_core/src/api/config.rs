//! Sports-data API configuration
//!
//! Passed explicitly to whatever fetches squads. Nothing in the crate reads
//! credentials from global state.

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{Result, SquadError};

pub const API_KEY_ENV: &str = "SQUAD_API_KEY";
pub const API_HOST_ENV: &str = "SQUAD_API_HOST";
pub const API_BASE_URL_ENV: &str = "SQUAD_API_BASE_URL";

pub const DEFAULT_API_HOST: &str = "v3.football.api-sports.io";
pub const DEFAULT_BASE_URL: &str = "https://v3.football.api-sports.io";

/// Team loaded when the caller does not pick one (Manchester United).
pub const DEFAULT_TEAM_ID: &str = "33";

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Well-known team ids of the squads endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownTeam {
    pub name: &'static str,
    pub id: &'static str,
}

pub const KNOWN_TEAMS: [KnownTeam; 10] = [
    KnownTeam { name: "Manchester United", id: "33" },
    KnownTeam { name: "Manchester City", id: "50" },
    KnownTeam { name: "Liverpool", id: "40" },
    KnownTeam { name: "Chelsea", id: "49" },
    KnownTeam { name: "Arsenal", id: "42" },
    KnownTeam { name: "Tottenham", id: "47" },
    KnownTeam { name: "Real Madrid", id: "541" },
    KnownTeam { name: "Barcelona", id: "529" },
    KnownTeam { name: "Bayern Munich", id: "157" },
    KnownTeam { name: "PSG", id: "85" },
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_host")]
    pub api_host: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { api_key: String::new(), api_host: default_api_host(), base_url: default_base_url() }
    }
}

/// A fully described `GET` the caller's HTTP client should send.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SquadRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl SquadRequest {
    /// Copy with the api key header masked, for logs and CLI output.
    pub fn redacted(&self) -> SquadRequest {
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name == API_KEY_HEADER && !value.is_empty() {
                    (name.clone(), "***".to_string())
                } else {
                    (name.clone(), value.clone())
                }
            })
            .collect();
        SquadRequest { url: self.url.clone(), headers }
    }
}

impl ApiConfig {
    pub fn new(api_key: &str) -> Self {
        Self { api_key: api_key.to_string(), ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ApiConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read `SQUAD_API_KEY` / `SQUAD_API_HOST` / `SQUAD_API_BASE_URL`.
    /// Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(key) = read_env(API_KEY_ENV) {
            config.api_key = key;
        }
        if let Some(host) = read_env(API_HOST_ENV) {
            config.api_host = host;
        }
        if let Some(url) = read_env(API_BASE_URL_ENV) {
            config.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_host.trim().is_empty() {
            return Err(SquadError::Config("api_host must not be empty".into()));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(SquadError::Config(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn squad_request(&self, team_id: &str) -> SquadRequest {
        SquadRequest {
            url: format!("{}/players/squads?team={}", self.base_url.trim_end_matches('/'), team_id),
            headers: vec![
                (API_KEY_HEADER.to_string(), self.api_key.clone()),
                (API_HOST_HEADER.to_string(), self.api_host.clone()),
            ],
        }
    }
}

fn read_env(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
