pub mod player;
pub mod squad_response;

pub use player::{PlayerId, Position, SquadPlayer, UNKNOWN_NATIONALITY};
pub use squad_response::{Paging, RawPlayer, SquadParameters, SquadResponse, TeamInfo, TeamSquad};
