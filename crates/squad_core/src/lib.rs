//! # squad_core - Lineup core for a squad management screen
//!
//! Turns a team roster from a sports-data API into a starting eleven laid out
//! on a fixed formation, and keeps that lineup consistent while the user
//! drags players around and makes substitutions.
//!
//! ## Features
//! - Deterministic roster mapping (same roster = same lineup)
//! - Drag repositioning clamped to the pitch
//! - Atomic starter/bench substitution
//! - JSON API for easy integration with UI hosts
//!
//! The crate performs no I/O. Fetching rosters is left to a [`SquadSource`]
//! supplied by the caller.

// Position codes mirror the wire format (GK, DEF, MID, FWD)
#![allow(clippy::upper_case_acronyms)]

pub mod api;
pub mod error;
pub mod models;
pub mod pitch;
pub mod roster;
pub mod session;
pub mod state;
pub mod tactics;

// Re-export main API
pub use api::{
    map_roster_json, parse_squad_response, reposition_json, substitute_json, ApiConfig,
    SquadSource, StaticSquadSource,
};
pub use error::{Partition, Result, SquadError};
pub use models::{PlayerId, Position, RawPlayer, SquadPlayer, SquadResponse};
pub use pitch::{PitchCoord, PitchDimensions, DRAG_MAX, DRAG_MIN};
pub use roster::{map_roster, map_roster_with, RosterMapping};
pub use session::{LoadStatus, SquadSession};
pub use state::SquadState;
pub use tactics::{Formation, DEFAULT_FORMATION};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
