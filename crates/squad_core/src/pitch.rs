//! Pitch coordinate system
//!
//! Coordinates are percentages of the drawn pitch, independent of the
//! device's screen size:
//! - x: 0 = left touchline, 100 = right touchline
//! - y: 0 = top (attacking end), 100 = bottom (own goal line)
//!
//! Dragged starters are kept inside `[DRAG_MIN, DRAG_MAX]` on both axes so a
//! token can never be dropped off the diagram.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SquadError};

/// Lower drag bound in percent.
pub const DRAG_MIN: f32 = 5.0;
/// Upper drag bound in percent.
pub const DRAG_MAX: f32 = 95.0;

/// Pitch height relative to width on the lineup screen (2:3 portrait).
pub const PITCH_ASPECT: f32 = 1.5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PitchCoord {
    pub x: f32,
    pub y: f32,
}

impl PitchCoord {
    /// Coordinate held by bench players.
    pub const BENCH: PitchCoord = PitchCoord { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Apply a percentage offset and keep the result inside the drag bounds.
    pub fn offset_clamped(self, dx: f32, dy: f32) -> Self {
        Self {
            x: (self.x + dx).clamp(DRAG_MIN, DRAG_MAX),
            y: (self.y + dy).clamp(DRAG_MIN, DRAG_MAX),
        }
    }

    pub fn in_drag_bounds(&self) -> bool {
        (DRAG_MIN..=DRAG_MAX).contains(&self.x) && (DRAG_MIN..=DRAG_MAX).contains(&self.y)
    }

    pub fn in_pitch_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// Pixel size of the rendered pitch, used to turn raw drag deltas into
/// percentage offsets before they reach [`crate::state::SquadState::reposition`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PitchDimensions {
    pub width_px: f32,
    pub height_px: f32,
}

impl PitchDimensions {
    pub fn new(width_px: f32, height_px: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width_px) || !valid(height_px) {
            return Err(SquadError::InvalidPitch { width_px, height_px });
        }
        Ok(Self { width_px, height_px })
    }

    /// Pitch drawn at `width_px` with the screen's fixed aspect ratio.
    pub fn from_width(width_px: f32) -> Result<Self> {
        Self::new(width_px, width_px * PITCH_ASPECT)
    }

    pub fn delta_to_percent(&self, dx_px: f32, dy_px: f32) -> (f32, f32) {
        (dx_px / self.width_px * 100.0, dy_px / self.height_px * 100.0)
    }
}
