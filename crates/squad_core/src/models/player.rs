use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pitch::PitchCoord;

pub type PlayerId = u64;

/// Nationality placeholder. The squads endpoint carries no nationality, so
/// every mapped player (starter or bench) gets this value.
pub const UNKNOWN_NATIONALITY: &str = "UNKNOWN";

/// Position line of a squad player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    DEF,
    MID,
    FWD,
}

impl Position {
    /// Lines in sort priority order.
    pub const ALL: [Position; 4] = [Position::GK, Position::DEF, Position::MID, Position::FWD];

    /// Parse the API's position label. Matching is exact; anything outside the
    /// four canonical labels yields `None`.
    pub fn from_api_label(label: &str) -> Option<Self> {
        match label {
            "Goalkeeper" => Some(Position::GK),
            "Defender" => Some(Position::DEF),
            "Midfielder" => Some(Position::MID),
            "Attacker" => Some(Position::FWD),
            _ => None,
        }
    }

    pub fn api_label(&self) -> &'static str {
        match self {
            Position::GK => "Goalkeeper",
            Position::DEF => "Defender",
            Position::MID => "Midfielder",
            Position::FWD => "Attacker",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        }
    }

    /// Sort key: GK=0, DEF=1, MID=2, FWD=3.
    pub fn priority(&self) -> u8 {
        match self {
            Position::GK => 0,
            Position::DEF => 1,
            Position::MID => 2,
            Position::FWD => 3,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A roster entry as held by the lineup screen.
///
/// `x`/`y` are percentages of pitch width/height. While benched the
/// coordinate is `(0, 0)` and carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SquadPlayer {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub number: u32,
    pub age: u32,
    pub nationality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub x: f32,
    pub y: f32,
    #[serde(rename = "isStarter")]
    pub is_starter: bool,
}

impl SquadPlayer {
    pub fn coord(&self) -> PitchCoord {
        PitchCoord::new(self.x, self.y)
    }

    pub fn set_coord(&mut self, coord: PitchCoord) {
        self.x = coord.x;
        self.y = coord.y;
    }

    /// Move onto the pitch at `coord`.
    pub(crate) fn promote(&mut self, coord: PitchCoord) {
        self.set_coord(coord);
        self.is_starter = true;
    }

    /// Move to the bench; the coordinate resets.
    pub(crate) fn demote(&mut self) {
        self.set_coord(PitchCoord::BENCH);
        self.is_starter = false;
    }
}
