//! Shared fixtures for the check-in integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

use parasail_checkin_bot::config::Env;

/// Build an `Env` pointed at a mock server, with the inter-account delay
/// zeroed so cycle tests run instantly.
pub fn test_env(base_url: &str, token_file: &str) -> Env {
    Env {
        token_file: token_file.to_string(),
        api_base_url: base_url.trim_end_matches('/').to_string(),
        request_timeout_ms: 5_000,
        account_delay_secs: 0,
        cycle_interval_hours: 24,
    }
}

/// Write a token file with one token per line.
pub fn token_file(tokens: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp token file");
    for token in tokens {
        writeln!(file, "{}", token).expect("write token");
    }
    file.flush().expect("flush token file");
    file
}
