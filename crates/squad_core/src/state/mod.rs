//! Squad State Manager
//!
//! Owns the live starters/bench split after a roster load and applies the two
//! user-driven mutations: dragging a starter and swapping a starter with a
//! bench player. The state has a single owner (the screen's event loop), so
//! mutations take `&mut self` and need no locking.

use serde::{Deserialize, Serialize};

use crate::error::{Partition, Result, SquadError};
use crate::models::{PlayerId, SquadPlayer};
use crate::roster::RosterMapping;


/// Current starters (pitch order) and bench (list order)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SquadState {
    starters: Vec<SquadPlayer>,
    bench: Vec<SquadPlayer>,
}

impl From<RosterMapping> for SquadState {
    fn from(mapping: RosterMapping) -> Self {
        let (starters, bench) = mapping.into_parts();
        Self::new(starters, bench)
    }
}

impl SquadState {
    pub fn new(starters: Vec<SquadPlayer>, bench: Vec<SquadPlayer>) -> Self {
        Self { starters, bench }
    }

    pub fn into_parts(self) -> (Vec<SquadPlayer>, Vec<SquadPlayer>) {
        (self.starters, self.bench)
    }

    // ========================
    // Queries
    // ========================

    pub fn starters(&self) -> &[SquadPlayer] {
        &self.starters
    }

    pub fn bench(&self) -> &[SquadPlayer] {
        &self.bench
    }

    pub fn starter(&self, player_id: PlayerId) -> Option<&SquadPlayer> {
        self.starters.iter().find(|p| p.id == player_id)
    }

    pub fn bench_player(&self, player_id: PlayerId) -> Option<&SquadPlayer> {
        self.bench.iter().find(|p| p.id == player_id)
    }

    /// Look a player up in either partition.
    pub fn find(&self, player_id: PlayerId) -> Option<&SquadPlayer> {
        self.starter(player_id).or_else(|| self.bench_player(player_id))
    }

    pub fn len(&self) -> usize {
        self.starters.len() + self.bench.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starters.is_empty() && self.bench.is_empty()
    }

    /// Ids of every player, starters first.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.starters.iter().chain(self.bench.iter()).map(|p| p.id).collect()
    }

    // ========================
    // Mutations
    // ========================

    /// Move a starter by a percentage offset, clamped to the drag box.
    ///
    /// Called once per drag sample, so offsets are small increments relative
    /// to the player's current coordinate.
    pub fn reposition(
        &mut self,
        player_id: PlayerId,
        dx_percent: f32,
        dy_percent: f32,
    ) -> Result<SquadPlayer> {
        if !dx_percent.is_finite() || !dy_percent.is_finite() {
            return Err(SquadError::InvalidOffset { dx: dx_percent, dy: dy_percent });
        }

        let player = self
            .starters
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| SquadError::not_found(player_id, Partition::Starters))?;

        let coord = player.coord().offset_clamped(dx_percent, dy_percent);
        player.set_coord(coord);

        Ok(player.clone())
    }

    /// Swap a starter with a bench player.
    ///
    /// The bench player takes the starter's place in the starters list and its
    /// exact current coordinate; the starter goes to the end of the bench.
    /// Both ids are resolved before anything changes.
    pub fn substitute(
        &mut self,
        starter_id: PlayerId,
        bench_player_id: PlayerId,
    ) -> Result<(&[SquadPlayer], &[SquadPlayer])> {
        let starter_idx = self
            .starters
            .iter()
            .position(|p| p.id == starter_id)
            .ok_or_else(|| SquadError::not_found(starter_id, Partition::Starters))?;
        let bench_idx = self
            .bench
            .iter()
            .position(|p| p.id == bench_player_id)
            .ok_or_else(|| SquadError::not_found(bench_player_id, Partition::Bench))?;

        let mut incoming = self.bench.remove(bench_idx);
        incoming.promote(self.starters[starter_idx].coord());

        let mut outgoing = std::mem::replace(&mut self.starters[starter_idx], incoming);
        outgoing.demote();
        self.bench.push(outgoing);

        log::debug!("Substituted {} -> {} at slot {}", starter_id, bench_player_id, starter_idx);

        Ok((self.starters.as_slice(), self.bench.as_slice()))
    }
}
