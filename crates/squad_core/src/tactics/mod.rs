// crates/squad_core/src/tactics/mod.rs
// Formation templates for the lineup pitch

pub mod formation;

pub use formation::{Formation, FormationLine, FormationSlot, DEFAULT_FORMATION};
