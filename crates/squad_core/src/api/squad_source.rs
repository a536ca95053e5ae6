//! Squad source seam
//!
//! The crate never talks to the network. Callers plug their HTTP client (or a
//! file, or a fixture) in behind [`SquadSource`].

use crate::error::{Result, SquadError};
use crate::models::SquadResponse;

pub trait SquadSource {
    fn fetch_squad(&self, team_id: &str) -> Result<SquadResponse>;
}

/// Parse a `/players/squads` body. A non-empty `errors` field is an error
/// even when the HTTP status was 200.
pub fn parse_squad_response(json: &str) -> Result<SquadResponse> {
    let response: SquadResponse = serde_json::from_str(json)?;
    if response.has_errors() {
        return Err(SquadError::Api(response.errors.to_string()));
    }
    Ok(response)
}

/// Serves one canned response for every team id.
#[derive(Debug, Clone)]
pub struct StaticSquadSource {
    response: SquadResponse,
}

impl StaticSquadSource {
    pub fn new(response: SquadResponse) -> Self {
        Self { response }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(parse_squad_response(json)?))
    }
}

impl SquadSource for StaticSquadSource {
    fn fetch_squad(&self, _team_id: &str) -> Result<SquadResponse> {
        Ok(self.response.clone())
    }
}
