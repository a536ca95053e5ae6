//! JSON entry points for embedding hosts
//!
//! Each call takes the full current squad in the request and returns the
//! updated lists, so the host can keep owning its own copy of the state.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{PlayerId, RawPlayer, SquadPlayer};
use crate::roster::map_roster;
use crate::state::SquadState;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SquadLists {
    #[serde(default)]
    pub starters: Vec<SquadPlayer>,
    #[serde(default)]
    pub bench: Vec<SquadPlayer>,
}

impl From<SquadState> for SquadLists {
    fn from(state: SquadState) -> Self {
        let (starters, bench) = state.into_parts();
        Self { starters, bench }
    }
}

impl From<SquadLists> for SquadState {
    fn from(lists: SquadLists) -> Self {
        SquadState::new(lists.starters, lists.bench)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositionRequest {
    #[serde(flatten)]
    pub squad: SquadLists,
    pub player_id: PlayerId,
    pub dx: f32,
    pub dy: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositionResponse {
    pub player: SquadPlayer,
    #[serde(flatten)]
    pub squad: SquadLists,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstituteRequest {
    #[serde(flatten)]
    pub squad: SquadLists,
    pub starter_id: PlayerId,
    pub bench_player_id: PlayerId,
}

/// `[RawPlayer]` → `RosterMapping`
pub fn map_roster_json(players_json: &str) -> Result<String> {
    let players: Vec<RawPlayer> = serde_json::from_str(players_json)?;
    let mapping = map_roster(&players);
    Ok(serde_json::to_string(&mapping)?)
}

/// `RepositionRequest` → `RepositionResponse`
pub fn reposition_json(request_json: &str) -> Result<String> {
    let request: RepositionRequest = serde_json::from_str(request_json)?;
    let mut state = SquadState::from(request.squad);

    let player = state.reposition(request.player_id, request.dx, request.dy)?;

    let response = RepositionResponse { player, squad: state.into() };
    Ok(serde_json::to_string(&response)?)
}

/// `SubstituteRequest` → `SquadLists`
pub fn substitute_json(request_json: &str) -> Result<String> {
    let request: SubstituteRequest = serde_json::from_str(request_json)?;
    let mut state = SquadState::from(request.squad);

    state.substitute(request.starter_id, request.bench_player_id)?;

    Ok(serde_json::to_string(&SquadLists::from(state))?)
}
