//! Wire shape of the `/players/squads` endpoint.
//!
//! The core only reads these records. Missing or `null` fields are tolerated
//! so that a partially filled roster still maps.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Player record as delivered by the sports-data API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawPlayer {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
    /// "Goalkeeper" | "Defender" | "Midfielder" | "Attacker"
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub photo: Option<String>,
}

impl RawPlayer {
    pub fn new(id: PlayerId, name: &str, position: &str, number: Option<u32>) -> Self {
        Self {
            id,
            name: name.to_string(),
            age: None,
            number,
            position: position.to_string(),
            photo: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_photo(mut self, photo: &str) -> Self {
        self.photo = Some(photo.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SquadParameters {
    #[serde(default)]
    pub team: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Paging {
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamInfo {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamSquad {
    pub team: TeamInfo,
    #[serde(default)]
    pub players: Vec<RawPlayer>,
}

/// Response envelope. `errors` is an empty list (or `{}`) on success; the API
/// reports auth and quota problems as a non-empty array or keyed object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SquadResponse {
    #[serde(default)]
    pub get: String,
    #[serde(default)]
    pub parameters: SquadParameters,
    #[serde(default)]
    pub errors: serde_json::Value,
    #[serde(default)]
    pub results: u32,
    #[serde(default)]
    pub paging: Paging,
    pub response: Vec<TeamSquad>,
}

impl SquadResponse {
    pub fn has_errors(&self) -> bool {
        match &self.errors {
            serde_json::Value::Null => false,
            serde_json::Value::Array(items) => !items.is_empty(),
            serde_json::Value::Object(map) => !map.is_empty(),
            serde_json::Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// The endpoint answers with zero or one team record.
    pub fn first_team(&self) -> Option<&TeamSquad> {
        self.response.first()
    }
}
