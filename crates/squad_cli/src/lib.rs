//! Squad CLI library
//!
//! Saved `/players/squads` response → lineup, plus the drag and substitution
//! operations, for inspecting the core from a terminal.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use squad_core::api::SquadSource;
use squad_core::{
    parse_squad_response, PitchDimensions, PlayerId, SquadPlayer, SquadResponse, SquadSession,
};

/// Reads a saved API response from disk for any team id.
#[derive(Debug, Clone)]
pub struct FileSquadSource {
    path: PathBuf,
}

impl FileSquadSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SquadSource for FileSquadSource {
    fn fetch_squad(&self, _team_id: &str) -> squad_core::Result<SquadResponse> {
        let body = fs::read_to_string(&self.path)?;
        parse_squad_response(&body)
    }
}

/// Load the squad stored at `path` into a fresh session.
pub fn load_session(path: &Path) -> Result<SquadSession> {
    let source = FileSquadSource::new(path);
    let team_id = team_id_hint(path)?;

    let mut session = SquadSession::new();
    session
        .load(&source, &team_id)
        .with_context(|| format!("Failed to load squad from {}", path.display()))?;

    if !session.skipped().is_empty() {
        log::warn!("{} player(s) with unknown positions left out", session.skipped().len());
    }

    Ok(session)
}

/// Team id recorded in the response's `parameters.team`, used for messages.
fn team_id_hint(path: &Path) -> Result<String> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read squad file: {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&body)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    Ok(value["parameters"]["team"].as_str().unwrap_or("unknown").to_string())
}

/// Convert a pixel drag on a pitch `width_px` wide and move the player.
pub fn drag_player(
    session: &mut SquadSession,
    player_id: PlayerId,
    dx_px: f32,
    dy_px: f32,
    width_px: f32,
) -> Result<SquadPlayer> {
    let pitch = PitchDimensions::from_width(width_px)?;
    let (dx, dy) = pitch.delta_to_percent(dx_px, dy_px);
    Ok(session.reposition(player_id, dx, dy)?)
}

/// Lists as JSON `{ "starters": [...], "bench": [...] }`.
pub fn lineup_json(session: &SquadSession, pretty: bool) -> Result<String> {
    let state = session.state().context("Squad not loaded")?;
    let value = serde_json::json!({
        "team": session.team_name(),
        "starters": state.starters(),
        "bench": state.bench(),
    });

    let out = if pretty { serde_json::to_string_pretty(&value)? } else { value.to_string() };
    Ok(out)
}

/// Plain-text lineup, one player per line.
pub fn lineup_text(session: &SquadSession) -> Result<String> {
    let state = session.state().context("Squad not loaded")?;
    let mut out = String::new();

    out.push_str(&format!("{}\n", session.team_name().unwrap_or("Unknown team")));
    out.push_str("\nStarters\n");
    for p in state.starters() {
        out.push_str(&format!(
            "  #{:<3} {:<4} {:<28} ({:>5.1}, {:>5.1})\n",
            p.number,
            p.position.code(),
            p.name,
            p.x,
            p.y
        ));
    }

    out.push_str("\nBench\n");
    for p in state.bench() {
        out.push_str(&format!(
            "  #{:<3} {:<4} {:<28} {} yrs\n",
            p.number,
            p.position.code(),
            p.name,
            p.age
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn squad_file(players: serde_json::Value) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        let body = serde_json::json!({
            "get": "players/squads",
            "parameters": { "team": "33" },
            "errors": [],
            "results": 1,
            "paging": { "current": 1, "total": 1 },
            "response": [{
                "team": { "id": 33, "name": "Manchester United", "logo": "" },
                "players": players
            }]
        });
        file.write_all(body.to_string().as_bytes())?;
        Ok(file)
    }

    fn players() -> serde_json::Value {
        serde_json::json!([
            { "id": 1, "name": "Keeper", "age": 31, "number": 1, "position": "Goalkeeper" },
            { "id": 12, "name": "Backup", "age": 22, "number": 12, "position": "Goalkeeper" },
            { "id": 9, "name": "Striker", "age": 27, "number": 9, "position": "Attacker" }
        ])
    }

    #[test]
    fn test_load_session_from_file() -> Result<()> {
        let file = squad_file(players())?;
        let session = load_session(file.path())?;

        assert_eq!(session.team_name(), Some("Manchester United"));
        let state = session.state().unwrap();
        assert_eq!(state.starters().len(), 2);
        assert_eq!(state.bench().len(), 1);
        Ok(())
    }

    #[test]
    fn test_load_session_api_errors() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(br#"{ "errors": { "requests": "limit reached" }, "response": [] }"#)?;

        let err = load_session(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("limit reached"));
        Ok(())
    }

    #[test]
    fn test_drag_player_converts_pixels() -> Result<()> {
        let file = squad_file(players())?;
        let mut session = load_session(file.path())?;

        // 200px wide pitch is 300px tall: 20px right = 10%, 30px down = 10%
        let moved = drag_player(&mut session, 9, 20.0, 30.0, 200.0)?;
        assert!((moved.x - 35.0).abs() < 1e-4);
        assert!((moved.y - 35.0).abs() < 1e-4);
        Ok(())
    }

    #[test]
    fn test_drag_player_rejects_zero_width() -> Result<()> {
        let file = squad_file(players())?;
        let mut session = load_session(file.path())?;
        assert!(drag_player(&mut session, 9, 1.0, 1.0, 0.0).is_err());
        Ok(())
    }

    #[test]
    fn test_lineup_outputs() -> Result<()> {
        let file = squad_file(players())?;
        let session = load_session(file.path())?;

        let json: serde_json::Value = serde_json::from_str(&lineup_json(&session, false)?)?;
        assert_eq!(json["team"], "Manchester United");
        assert_eq!(json["starters"][0]["id"], 1);
        assert_eq!(json["bench"][0]["id"], 12);

        let text = lineup_text(&session)?;
        assert!(text.contains("Starters"));
        assert!(text.contains("Striker"));
        assert!(text.contains("Backup"));
        Ok(())
    }
}
