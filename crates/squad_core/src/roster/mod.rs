pub mod mapper;

pub use mapper::{map_roster, map_roster_with, RosterMapping};
