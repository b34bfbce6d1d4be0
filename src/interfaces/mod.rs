use serde::{Deserialize, Serialize};

/// Per-node stats returned by the Parasail API. The endpoint returns more
/// fields than this; only the ones the bot acts on are kept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeStats {
    #[serde(default)]
    pub points: i64,
    /// Unix seconds of the last accepted check-in, `0` = never checked in.
    #[serde(default)]
    pub last_checkin_time: i64,
}

/// `{"data": {...}}` envelope wrapping every stats response.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeStatsResponse {
    pub data: NodeStats,
}
