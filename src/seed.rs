//! Optional demo dataset: one user, four connected platforms, a month of
//! follower history for three of them, the headline metrics, and a few
//! bookmarks. Enabled with SEED_DEMO=1; tests build their own stores.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::auth;
use crate::models::analytics::AnalyticsForm;
use crate::models::bookmark::BookmarkForm;
use crate::models::platform::PlatformForm;
use crate::models::user::UserForm;
use crate::store::Store;

const DEMO_EMAIL: &str = "demo@dashmetrics.local";
const DEMO_PASSWORD: &str = "demo1234";

pub fn seed_demo(store: &dyn Store) -> Result<(), String> {
    if store.user_get_by_email(DEMO_EMAIL).is_some() {
        log::info!("Demo data already present, skipping seed");
        return Ok(());
    }

    let user = store.user_create(&UserForm {
        username: "demo".to_string(),
        email: DEMO_EMAIL.to_string(),
        name: "Demo User".to_string(),
        profile_pic: String::new(),
        password: auth::hash_password(DEMO_PASSWORD, bcrypt::DEFAULT_COST)?,
        provider: "password".to_string(),
    })?;
    log::info!("Seeded demo user {} / {}", DEMO_EMAIL, DEMO_PASSWORD);

    let platforms = [
        ("instagram", "dashmetrics.demo"),
        ("twitter", "dashmetricsdemo"),
        ("linkedin", "dashmetrics-demo"),
        ("youtube", "dashmetricsdemo"),
    ];
    let mut platform_ids = Vec::new();
    for (platform_type, handle) in platforms {
        let platform = store.platform_create(&PlatformForm {
            user_id: user.id,
            platform_type: platform_type.to_string(),
            handle: handle.to_string(),
            is_active: Some(true),
        })?;
        platform_ids.push(platform.id);
    }

    // 30 days of follower curves for the first three platforms: a base
    // level plus a jittered daily gain, mirroring real growth shapes.
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let base = 20_000i64;
    let curves = [
        (platform_ids[0], 0i64, 150.0, 0.3),
        (platform_ids[1], -5_000, 100.0, 0.4),
        (platform_ids[2], -8_000, 80.0, 0.2),
    ];
    for day in 0..30 {
        let date = now - Duration::days(30 - day);
        for (platform_id, offset, gain, jitter) in curves {
            let value =
                base + offset + (day as f64 * gain * (1.0 + rng.gen::<f64>() * jitter)) as i64;
            store.analytics_create(&AnalyticsForm {
                user_id: user.id,
                platform_id,
                metric: "followers".to_string(),
                value,
                date: Some(date),
            })?;
        }
    }

    for (metric, value) in [("engagement", 52), ("reach", 83_247), ("responseTime", 47)] {
        store.analytics_create(&AnalyticsForm {
            user_id: user.id,
            platform_id: platform_ids[0],
            metric: metric.to_string(),
            value,
            date: None,
        })?;
    }

    let bookmarks = [
        (
            "10 Tips for Better Social Media Engagement",
            "https://example.com/social-media-tips",
            "twitter",
            vec!["engagement", "tips", "socialmedia"],
        ),
        (
            "How to Use Analytics to Grow Your Following",
            "https://example.com/analytics-growth",
            "instagram",
            vec!["analytics", "growth", "strategy"],
        ),
        (
            "The Future of Social Media Marketing",
            "https://example.com/future-marketing",
            "linkedin",
            vec!["future", "trends", "marketing"],
        ),
    ];
    for (title, url, platform_type, tags) in bookmarks {
        store.bookmark_create(&BookmarkForm {
            user_id: user.id,
            title: title.to_string(),
            url: url.to_string(),
            platform_type: platform_type.to_string(),
            tags: Some(tags.into_iter().map(String::from).collect()),
        })?;
    }

    Ok(())
}
