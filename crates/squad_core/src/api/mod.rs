pub mod config;
pub mod json_api;
pub mod squad_source;

pub use config::{ApiConfig, KnownTeam, SquadRequest, DEFAULT_TEAM_ID, KNOWN_TEAMS};
pub use json_api::{
    map_roster_json, reposition_json, substitute_json, RepositionRequest, RepositionResponse,
    SquadLists, SubstituteRequest,
};
pub use squad_source::{parse_squad_response, SquadSource, StaticSquadSource};
