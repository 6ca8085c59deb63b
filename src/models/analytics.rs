use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable timestamped metric observation for a user/platform pair.
/// Samples are append-only; "updating a metric" means appending a newer one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSample {
    pub id: i64,
    pub user_id: i64,
    pub platform_id: i64,
    pub metric: String, // followers, engagement, reach, responseTime
    pub value: i64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsForm {
    pub user_id: i64,
    pub platform_id: i64,
    pub metric: String,
    pub value: i64,
    /// Defaults to now when omitted.
    pub date: Option<DateTime<Utc>>,
}
