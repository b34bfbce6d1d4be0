pub mod format_time;
pub mod logger;
pub mod parasail_api;
pub mod tokens;

// Re-export commonly used items
pub use format_time::format_checkin_time;
pub use logger::Logger;
pub use parasail_api::{ApiError, ParasailClient};
pub use tokens::load_bearer_tokens;
