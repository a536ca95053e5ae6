//! Squad CLI
//!
//! Saved squad response → lineup, drag and substitution from the terminal

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "squad_cli")]
#[command(about = "Map a team squad onto a 4-3-3 and edit the lineup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print starters and bench as JSON
    Map {
        /// Saved /players/squads response
        #[arg(long)]
        r#in: PathBuf,

        /// Pretty-print the JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Print a readable lineup
    Lineup {
        /// Saved /players/squads response
        #[arg(long)]
        r#in: PathBuf,
    },

    /// Swap a starter with a bench player
    Substitute {
        /// Saved /players/squads response
        #[arg(long)]
        r#in: PathBuf,

        /// Id of the starter leaving the pitch
        #[arg(long)]
        starter: u64,

        /// Id of the bench player coming on
        #[arg(long)]
        bench: u64,
    },

    /// Drag a starter by a pixel delta
    Drag {
        /// Saved /players/squads response
        #[arg(long)]
        r#in: PathBuf,

        /// Id of the starter to move
        #[arg(long)]
        player: u64,

        /// Horizontal delta in pixels
        #[arg(long, allow_hyphen_values = true)]
        dx: f32,

        /// Vertical delta in pixels
        #[arg(long, allow_hyphen_values = true)]
        dy: f32,

        /// Rendered pitch width in pixels
        #[arg(long, default_value = "343")]
        width: f32,
    },

    /// List well-known team ids
    Teams,

    /// Show the request a fetcher would send (config from SQUAD_API_* env)
    Request {
        /// Team id
        #[arg(long, default_value = squad_core::api::DEFAULT_TEAM_ID)]
        team: String,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Map { r#in, pretty } => {
            let session = squad_cli::load_session(&r#in)?;
            println!("{}", squad_cli::lineup_json(&session, pretty)?);
        }

        Commands::Lineup { r#in } => {
            let session = squad_cli::load_session(&r#in)?;
            print!("{}", squad_cli::lineup_text(&session)?);
        }

        Commands::Substitute { r#in, starter, bench } => {
            let mut session = squad_cli::load_session(&r#in)?;
            session.substitute(starter, bench)?;
            println!("🔁 {} off, {} on\n", starter, bench);
            print!("{}", squad_cli::lineup_text(&session)?);
        }

        Commands::Drag { r#in, player, dx, dy, width } => {
            let mut session = squad_cli::load_session(&r#in)?;
            let moved = squad_cli::drag_player(&mut session, player, dx, dy, width)?;
            println!("📍 {} moved to ({:.1}, {:.1})\n", moved.name, moved.x, moved.y);
            print!("{}", squad_cli::lineup_text(&session)?);
        }

        Commands::Teams => {
            for team in squad_core::api::KNOWN_TEAMS {
                println!("{:>4}  {}", team.id, team.name);
            }
        }

        Commands::Request { team } => {
            let config = squad_core::ApiConfig::from_env()?;
            if !config.has_api_key() {
                log::warn!("{} is not set", squad_core::api::config::API_KEY_ENV);
            }
            let request = config.squad_request(&team).redacted();
            println!("GET {}", request.url);
            for (name, value) in &request.headers {
                println!("{}: {}", name, value);
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("squad_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
