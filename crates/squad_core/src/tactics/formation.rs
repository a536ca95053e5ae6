// crates/squad_core/src/tactics/formation.rs
// Formation template used to lay out starters on the lineup pitch

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::Position;
use crate::pitch::PitchCoord;

/// Shared 4-3-3 template.
pub static DEFAULT_FORMATION: Lazy<Formation> = Lazy::new(Formation::default_433);

/// One pitch slot of a formation line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationSlot {
    /// Display label of the role, e.g. "LB", "ST"
    pub role: String,
    pub x: f32,
    pub y: f32,
}

impl FormationSlot {
    pub fn new(role: &str, x: f32, y: f32) -> Self {
        Self { role: role.to_string(), x: x.clamp(0.0, 100.0), y: y.clamp(0.0, 100.0) }
    }

    pub fn coord(&self) -> PitchCoord {
        PitchCoord::new(self.x, self.y)
    }
}

/// Slots of a single position line, in fill order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationLine {
    pub position: Position,
    pub slots: Vec<FormationSlot>,
}

impl FormationLine {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// Complete formation: one line per position, GK first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Formation {
    pub name: String,
    pub lines: Vec<FormationLine>,
}

impl Formation {
    /// 4-3-3 (GK, back four, three central midfielders, front three)
    pub fn default_433() -> Formation {
        Formation {
            name: "4-3-3".to_string(),
            lines: vec![
                FormationLine {
                    position: Position::GK,
                    slots: vec![FormationSlot::new("GK", 50.0, 89.0)],
                },
                FormationLine {
                    position: Position::DEF,
                    slots: vec![
                        FormationSlot::new("LB", 18.0, 70.0),
                        FormationSlot::new("CB", 40.0, 72.0),
                        FormationSlot::new("CB", 60.0, 72.0),
                        FormationSlot::new("RB", 82.0, 70.0),
                    ],
                },
                FormationLine {
                    position: Position::MID,
                    slots: vec![
                        FormationSlot::new("CM", 30.0, 45.0),
                        FormationSlot::new("CM", 50.0, 50.0),
                        FormationSlot::new("CM", 70.0, 45.0),
                    ],
                },
                FormationLine {
                    position: Position::FWD,
                    slots: vec![
                        FormationSlot::new("LW", 25.0, 25.0),
                        FormationSlot::new("ST", 50.0, 15.0),
                        FormationSlot::new("RW", 75.0, 25.0),
                    ],
                },
            ],
        }
    }

    pub fn line(&self, position: Position) -> Option<&FormationLine> {
        self.lines.iter().find(|line| line.position == position)
    }

    pub fn slot_count(&self, position: Position) -> usize {
        self.line(position).map_or(0, FormationLine::slot_count)
    }

    pub fn total_slots(&self) -> usize {
        self.lines.iter().map(FormationLine::slot_count).sum()
    }

    /// Slot coordinates of a line in fill order
    pub fn coords(&self, position: Position) -> Vec<PitchCoord> {
        self.line(position)
            .map(|line| line.slots.iter().map(FormationSlot::coord).collect())
            .unwrap_or_default()
    }
}

impl Default for Formation {
    fn default() -> Self {
        Self::default_433()
    }
}
