use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use tokio::time::{sleep, Duration};

use crate::config::Env;
use crate::interfaces::NodeStats;
use crate::utils::{format_checkin_time, load_bearer_tokens, ApiError, Logger, ParasailClient};

/// Minimum gap the service enforces between two accepted check-ins.
pub const CHECKIN_INTERVAL_SECS: i64 = 24 * 60 * 60;

/// Earliest Unix time at which the next check-in is accepted.
pub fn next_checkin_time(last_checkin_time: i64) -> i64 {
    last_checkin_time + CHECKIN_INTERVAL_SECS
}

/// An account that has never checked in (`last_checkin_time == 0`) is always
/// due; otherwise a full 24 hours must have passed.
pub fn is_checkin_due(last_checkin_time: i64, now: i64) -> bool {
    if last_checkin_time == 0 {
        return true;
    }
    now >= next_checkin_time(last_checkin_time)
}

/// Terminal outcome of one account in one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountOutcome {
    /// Stats could not be fetched; the account was skipped without a
    /// check-in attempt.
    FetchFailed,
    /// Less than 24 hours since the last check-in.
    NotDue,
    /// Check-in accepted. `updated_points` is `None` when the follow-up
    /// stats fetch failed; the check-in itself still counts as a success.
    CheckedIn { updated_points: Option<i64> },
    /// Check-in submission failed; no retry within the cycle.
    CheckinFailed,
}

/// Presentation seam for per-account progress. The protocol below never
/// formats output itself.
pub trait CheckinReporter {
    fn account_start(&self, token: &str);
    fn stats(&self, stats: &NodeStats);
    fn stats_failed(&self, err: &ApiError);
    fn not_due(&self, next_checkin_time: i64);
    fn checkin_succeeded(&self, updated_points: Option<i64>);
    fn checkin_failed(&self, err: &ApiError);
    fn account_done(&self);
}

/// Console implementation backed by the shared [`Logger`].
pub struct ConsoleReporter;

impl CheckinReporter for ConsoleReporter {
    fn account_start(&self, token: &str) {
        Logger::info(&format!("🔄 Processing account {}", Logger::mask_token(token)));
    }

    fn stats(&self, stats: &NodeStats) {
        Logger::info(&format!("🏆 Current points: {}", stats.points));
        Logger::info(&format!(
            "🕰️ Last check-in: {}",
            format_checkin_time(stats.last_checkin_time)
        ));
    }

    fn stats_failed(&self, err: &ApiError) {
        Logger::error(&format!("Failed to fetch node stats: {}", err));
    }

    fn not_due(&self, next_checkin_time: i64) {
        Logger::warning(&format!(
            "⏳ Not due yet, next check-in accepted at {}",
            format_checkin_time(next_checkin_time)
        ));
    }

    fn checkin_succeeded(&self, updated_points: Option<i64>) {
        Logger::success("Check-in successful");
        match updated_points {
            Some(points) => Logger::success(&format!("🎯 Points after check-in: {}", points)),
            None => Logger::warning("Could not refresh points after check-in"),
        }
    }

    fn checkin_failed(&self, err: &ApiError) {
        Logger::error(&format!("Check-in failed: {}", err));
    }

    fn account_done(&self) {
        Logger::separator();
    }
}

/// Run the fetch/decide/check-in protocol for one account.
pub async fn process_account(
    client: &ParasailClient,
    token: &str,
    reporter: &dyn CheckinReporter,
) -> AccountOutcome {
    reporter.account_start(token);

    let stats = match client.node_stats(token).await {
        Ok(stats) => stats,
        Err(e) => {
            reporter.stats_failed(&e);
            return AccountOutcome::FetchFailed;
        }
    };
    reporter.stats(&stats);

    let now = Utc::now().timestamp();
    if !is_checkin_due(stats.last_checkin_time, now) {
        reporter.not_due(next_checkin_time(stats.last_checkin_time));
        return AccountOutcome::NotDue;
    }

    match client.check_in(token).await {
        Ok(()) => {
            // The check-in already succeeded; a failed refresh only means the
            // updated total goes unreported.
            let updated_points = client.node_stats(token).await.ok().map(|s| s.points);
            reporter.checkin_succeeded(updated_points);
            AccountOutcome::CheckedIn { updated_points }
        }
        Err(e) => {
            reporter.checkin_failed(&e);
            AccountOutcome::CheckinFailed
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummary {
    pub accounts: usize,
    pub checked_in: usize,
    pub checkin_failed: usize,
    pub fetch_failed: usize,
    pub not_due: usize,
}

impl CycleSummary {
    fn record(&mut self, outcome: &AccountOutcome) {
        self.accounts += 1;
        match outcome {
            AccountOutcome::FetchFailed => self.fetch_failed += 1,
            AccountOutcome::NotDue => self.not_due += 1,
            AccountOutcome::CheckedIn { .. } => self.checked_in += 1,
            AccountOutcome::CheckinFailed => self.checkin_failed += 1,
        }
    }
}

/// One pass over the token list. Tokens are reloaded here, not cached, so
/// edits to the file take effect on the next cycle. A token-load failure is
/// the only error that propagates.
pub async fn run_cycle(
    client: &ParasailClient,
    env: &Env,
    reporter: &dyn CheckinReporter,
) -> Result<CycleSummary> {
    let tokens = load_bearer_tokens(Path::new(&env.token_file))?;

    let mut summary = CycleSummary::default();
    for token in &tokens {
        let outcome = process_account(client, token, reporter).await;
        summary.record(&outcome);
        reporter.account_done();

        // Pause between accounts to avoid bursting the API
        sleep(Duration::from_secs(env.account_delay_secs)).await;
    }

    Ok(summary)
}

/// Daily loop: run a full cycle, report the tally, sleep 24 hours, repeat.
/// Returns only when credential enumeration fails fatally.
pub async fn start_auto_checkin(client: &ParasailClient, env: &Env) -> Result<()> {
    let reporter = ConsoleReporter;

    loop {
        Logger::header("🚀 Starting daily check-in cycle");

        let summary = run_cycle(client, env, &reporter).await?;

        Logger::success(&format!(
            "Cycle complete: {} account(s) | {} checked in | {} not yet due | {} stats failure(s) | {} check-in failure(s)",
            summary.accounts,
            summary.checked_in,
            summary.not_due,
            summary.fetch_failed,
            summary.checkin_failed,
        ));
        Logger::info(&format!(
            "⏳ Sleeping {} hour(s) until the next cycle...",
            env.cycle_interval_hours
        ));

        sleep(Duration::from_secs(env.cycle_interval_secs())).await;
    }
}
