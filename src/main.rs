use anyhow::Result;
use std::path::Path;
use tokio::signal;

use parasail_checkin_bot::config::load_env;
use parasail_checkin_bot::services::start_auto_checkin;
use parasail_checkin_bot::utils::{load_bearer_tokens, Logger, ParasailClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    let env = load_env()?;

    // Fail fast on a missing or empty token file before entering the loop;
    // the loop itself reloads the file every cycle.
    let tokens = load_bearer_tokens(Path::new(&env.token_file))?;
    Logger::startup(tokens.len(), &env.token_file, &env.api_base_url);

    let client = ParasailClient::new(&env)?;

    tokio::select! {
        result = start_auto_checkin(&client, &env) => {
            // Only returns on a fatal credential-load error
            result?;
        }
        _ = signal::ctrl_c() => {
            Logger::separator();
            Logger::info("Received SIGINT, shutting down...");
        }
    }

    Ok(())
}
