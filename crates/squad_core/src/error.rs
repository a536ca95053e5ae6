use std::fmt;
use thiserror::Error;

use crate::models::PlayerId;

/// Which side of the starters/bench split a lookup expected to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Starters,
    Bench,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Partition::Starters => write!(f, "starters"),
            Partition::Bench => write!(f, "bench"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SquadError {
    #[error("Player {player_id} not found in {partition}")]
    PlayerNotFound { player_id: PlayerId, partition: Partition },

    #[error("Invalid drag offset: dx={dx}, dy={dy}")]
    InvalidOffset { dx: f32, dy: f32 },

    #[error("Invalid pitch size: {width_px}x{height_px} px")]
    InvalidPitch { width_px: f32, height_px: f32 },

    #[error("No squad data found for team {team_id}")]
    EmptySquad { team_id: String },

    #[error("API returned errors: {0}")]
    Api(String),

    #[error("Squad not loaded")]
    NotLoaded,

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SquadError {
    pub(crate) fn not_found(player_id: PlayerId, partition: Partition) -> Self {
        SquadError::PlayerNotFound { player_id, partition }
    }

    /// Errors produced by a stale or malformed gesture. The caller can drop
    /// the gesture and keep the current squad as it is.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SquadError::PlayerNotFound { .. } => true,
            SquadError::InvalidOffset { .. } => true,
            SquadError::NotLoaded => true,
            SquadError::InvalidPitch { .. } => false,
            SquadError::EmptySquad { .. } => false,
            SquadError::Api(_) => false,
            SquadError::Config(_) => false,
            SquadError::Json(_) => false,
            SquadError::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SquadError>;
