//! One-shot stats report for every configured token. Never submits a
//! check-in; useful for verifying tokens before running the daily bot.

use anyhow::Result;
use chrono::Utc;
use std::path::Path;

use parasail_checkin_bot::config::load_env;
use parasail_checkin_bot::services::{is_checkin_due, next_checkin_time};
use parasail_checkin_bot::utils::{format_checkin_time, load_bearer_tokens, Logger, ParasailClient};

#[tokio::main]
async fn main() -> Result<()> {
    println!("🔍 Checking Parasail node stats\n");

    let env = load_env()?;
    let tokens = load_bearer_tokens(Path::new(&env.token_file))?;
    println!("Endpoint: {}", env.api_base_url);
    println!("{}\n", "━".repeat(65));

    let client = ParasailClient::new(&env)?;
    let now = Utc::now().timestamp();

    for token in &tokens {
        match client.node_stats(token).await {
            Ok(stats) => {
                println!("⛵ {}", Logger::mask_token(token));
                println!("   Points:        {}", stats.points);
                println!(
                    "   Last check-in: {}",
                    format_checkin_time(stats.last_checkin_time)
                );
                if is_checkin_due(stats.last_checkin_time, now) {
                    println!("   Status:        due for check-in");
                } else {
                    println!(
                        "   Status:        next check-in at {}",
                        format_checkin_time(next_checkin_time(stats.last_checkin_time))
                    );
                }
            }
            Err(e) => {
                println!("⛵ {}", Logger::mask_token(token));
                println!("   Stats unavailable: {}", e);
            }
        }
        println!();
    }

    Ok(())
}
