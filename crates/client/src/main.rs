//! ATB battle client binary.
//!
//! Composition root: environment config, file logging, then one battle.
//!
//! ```bash
//! # Fixed biome and a reproducible enemy AI
//! ATB_BIOME="World of Ruin" ATB_AI_SEED=7 cargo run -p battle-client
//! ```
//!
//! Exit code 0 on victory, 1 on defeat, 2 when the player quits.

use std::process::ExitCode;

use anyhow::Result;
use battle_client::{ClientConfig, app, logging};

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    let ending = app::run(&config)?;
    tracing::info!(?ending, "session finished");
    Ok(ending.exit_code())
}
