use chrono::{FixedOffset, TimeZone, Utc};

// Check-in times are reported in Western Indonesia Time (UTC+7).
const WIB_OFFSET_SECS: i32 = 7 * 3600;

/// Render a check-in timestamp for console reporting. `0` means the account
/// has never checked in.
pub fn format_checkin_time(timestamp: i64) -> String {
    if timestamp == 0 {
        return "never checked in".to_string();
    }

    let wib = FixedOffset::east_opt(WIB_OFFSET_SECS).unwrap();
    match Utc.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.with_timezone(&wib).format("%d/%m/%Y %H:%M:%S WIB").to_string(),
        None => format!("invalid timestamp {}", timestamp),
    }
}
