use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "https://www.parasail.network";
pub const DEFAULT_TOKEN_FILE: &str = "data.txt";

#[derive(Debug, Clone)]
pub struct Env {
    pub token_file: String,
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub account_delay_secs: u64,
    pub cycle_interval_hours: u64,
}

fn parse_env_u64(key: &str, default: &str) -> Result<u64> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Invalid {}", key))
}

fn validate_api_url(url: &str) -> Result<()> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        eprintln!("\n❌ Invalid API URL\n");
        eprintln!("Current value: {}", url);
        eprintln!("Expected an http:// or https:// URL, e.g. {}\n", DEFAULT_API_BASE_URL);
        anyhow::bail!("Invalid PARASAIL_API_URL: {}", url);
    }
    Ok(())
}

pub fn load_env() -> Result<Env> {
    dotenvy::dotenv().ok(); // Load .env file if it exists

    let request_timeout_ms = parse_env_u64("REQUEST_TIMEOUT_MS", "10000")?;
    let account_delay_secs = parse_env_u64("ACCOUNT_DELAY_SECS", "5")?;
    let cycle_interval_hours = parse_env_u64("CYCLE_INTERVAL_HOURS", "24")?;
    if cycle_interval_hours == 0 {
        anyhow::bail!("CYCLE_INTERVAL_HOURS must be at least 1");
    }

    let api_base_url = env::var("PARASAIL_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();
    validate_api_url(&api_base_url)?;

    Ok(Env {
        token_file: env::var("TOKEN_FILE").unwrap_or_else(|_| DEFAULT_TOKEN_FILE.to_string()),
        api_base_url,
        request_timeout_ms,
        account_delay_secs,
        cycle_interval_hours,
    })
}

impl Env {
    pub fn cycle_interval_secs(&self) -> u64 {
        self.cycle_interval_hours * 60 * 60
    }
}
