//! Derives dashboard view-models from raw, append-only analytics samples.
//! Everything here is a pure function; the routes fetch rows through the
//! store and hand them in.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::analytics::AnalyticsSample;
use crate::models::platform::Platform;

pub const METRIC_FOLLOWERS: &str = "followers";
pub const METRIC_ENGAGEMENT: &str = "engagement";
pub const METRIC_REACH: &str = "reach";
pub const METRIC_RESPONSE_TIME: &str = "responseTime";

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub followers: i64,
    pub engagement: i64,
    pub reach: i64,
    pub response_time: i64,
}

/// One chart row: a UTC calendar date plus one column per platform type
/// that has a sample on that date. Platforms without a sample that day are
/// absent, not zero.
#[derive(Debug, Serialize, PartialEq)]
pub struct GrowthRow {
    pub date: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, i64>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct EngagementRow {
    pub platform: String,
    pub engagement: i64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
}

/// Most recent sample of `metric` per platform id. Equal timestamps:
/// last write wins (higher id, i.e. insertion order).
pub fn latest_per_platform<'a>(
    samples: &'a [AnalyticsSample],
    metric: &str,
) -> HashMap<i64, &'a AnalyticsSample> {
    let mut latest: HashMap<i64, &AnalyticsSample> = HashMap::new();
    for sample in samples.iter().filter(|s| s.metric == metric) {
        match latest.get(&sample.platform_id) {
            Some(cur) if (sample.date, sample.id) < (cur.date, cur.id) => {}
            _ => {
                latest.insert(sample.platform_id, sample);
            }
        }
    }
    latest
}

/// Sum of the latest follower count across all platforms.
pub fn total_followers(samples: &[AnalyticsSample]) -> i64 {
    latest_per_platform(samples, METRIC_FOLLOWERS)
        .values()
        .map(|s| s.value)
        .sum()
}

/// Headline stats for the dashboard. Followers aggregates latest-per-platform;
/// the remaining metrics take the first sample found with that name, 0 when
/// none exists.
pub fn dashboard_stats(samples: &[AnalyticsSample]) -> DashboardStats {
    let first = |metric: &str| {
        samples
            .iter()
            .find(|s| s.metric == metric)
            .map(|s| s.value)
            .unwrap_or(0)
    };
    DashboardStats {
        followers: total_followers(samples),
        engagement: first(METRIC_ENGAGEMENT),
        reach: first(METRIC_REACH),
        response_time: first(METRIC_RESPONSE_TIME),
    }
}

/// Follower samples grouped by UTC calendar date, one column per platform
/// type, rows ascending by date. A later sample for the same (date, type)
/// overwrites the earlier one.
pub fn follower_growth(samples: &[AnalyticsSample], platforms: &[Platform]) -> Vec<GrowthRow> {
    let type_by_id: HashMap<i64, &str> = platforms
        .iter()
        .map(|p| (p.id, p.platform_type.as_str()))
        .collect();

    let mut by_date: BTreeMap<NaiveDate, BTreeMap<String, i64>> = BTreeMap::new();
    for sample in samples.iter().filter(|s| s.metric == METRIC_FOLLOWERS) {
        // Samples for platforms the user no longer has are skipped.
        let Some(platform_type) = type_by_id.get(&sample.platform_id) else {
            continue;
        };
        by_date
            .entry(sample.date.date_naive())
            .or_default()
            .insert(platform_type.to_string(), sample.value);
    }

    by_date
        .into_iter()
        .map(|(date, values)| GrowthRow {
            date: date.format("%Y-%m-%d").to_string(),
            values,
        })
        .collect()
}

/// Fixed per-type engagement scores (0–100). A deterministic placeholder
/// policy, total over any input string.
pub fn engagement_for_type(platform_type: &str) -> (i64, i64, i64, i64) {
    match platform_type {
        "instagram" => (70, 80, 65, 40),
        "twitter" => (85, 65, 70, 90),
        "linkedin" => (55, 60, 45, 50),
        "youtube" => (40, 45, 60, 30),
        "facebook" => (62, 65, 70, 50),
        _ => (50, 50, 50, 50),
    }
}

pub fn platform_engagement(platforms: &[Platform]) -> Vec<EngagementRow> {
    platforms
        .iter()
        .map(|p| {
            let (engagement, likes, comments, shares) = engagement_for_type(&p.platform_type);
            EngagementRow {
                platform: p.platform_type.clone(),
                engagement,
                likes,
                comments,
                shares,
            }
        })
        .collect()
}
