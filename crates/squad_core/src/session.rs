//! Lineup screen session
//!
//! One session per open screen. A load fetches the roster through a
//! [`SquadSource`], maps it and replaces whatever squad was shown before.
//! Drag and substitution calls are forwarded to the [`SquadState`].

use serde::{Deserialize, Serialize};

use crate::api::SquadSource;
use crate::error::{Result, SquadError};
use crate::models::{PlayerId, RawPlayer, SquadPlayer, TeamInfo};
use crate::roster::map_roster;
use crate::state::SquadState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct SquadSession {
    status: LoadStatus,
    team: Option<TeamInfo>,
    state: Option<SquadState>,
    skipped: Vec<RawPlayer>,
}

impl Default for SquadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SquadSession {
    pub fn new() -> Self {
        Self { status: LoadStatus::Idle, team: None, state: None, skipped: Vec::new() }
    }

    /// Fetch and map `team_id`, replacing the current squad.
    ///
    /// On failure the previous squad is dropped and the status records the
    /// error message for the screen to show.
    pub fn load<S: SquadSource + ?Sized>(&mut self, source: &S, team_id: &str) -> Result<()> {
        self.status = LoadStatus::Loading;
        self.team = None;
        self.state = None;
        self.skipped.clear();

        match Self::fetch_and_map(source, team_id) {
            Ok((team, state, skipped)) => {
                log::info!(
                    "Loaded {} (team {}): {} starters, {} bench",
                    team.name,
                    team_id,
                    state.starters().len(),
                    state.bench().len()
                );
                self.team = Some(team);
                self.state = Some(state);
                self.skipped = skipped;
                self.status = LoadStatus::Ready;
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to load squad for team {}: {}", team_id, err);
                self.status = LoadStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    fn fetch_and_map<S: SquadSource + ?Sized>(
        source: &S,
        team_id: &str,
    ) -> Result<(TeamInfo, SquadState, Vec<RawPlayer>)> {
        let response = source.fetch_squad(team_id)?;
        if response.has_errors() {
            return Err(SquadError::Api(response.errors.to_string()));
        }

        let squad = response
            .response
            .into_iter()
            .next()
            .ok_or_else(|| SquadError::EmptySquad { team_id: team_id.to_string() })?;

        let mapping = map_roster(&squad.players);
        let skipped = mapping.skipped.clone();
        Ok((squad.team, SquadState::from(mapping), skipped))
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }

    pub fn team(&self) -> Option<&TeamInfo> {
        self.team.as_ref()
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team.as_ref().map(|t| t.name.as_str())
    }

    /// Roster entries left out of the lineup because of their position label.
    pub fn skipped(&self) -> &[RawPlayer] {
        &self.skipped
    }

    pub fn state(&self) -> Option<&SquadState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut SquadState> {
        self.state.as_mut()
    }

    pub fn reposition(&mut self, player_id: PlayerId, dx: f32, dy: f32) -> Result<SquadPlayer> {
        self.state.as_mut().ok_or(SquadError::NotLoaded)?.reposition(player_id, dx, dy)
    }

    pub fn substitute(
        &mut self,
        starter_id: PlayerId,
        bench_player_id: PlayerId,
    ) -> Result<(&[SquadPlayer], &[SquadPlayer])> {
        self.state.as_mut().ok_or(SquadError::NotLoaded)?.substitute(starter_id, bench_player_id)
    }
}
