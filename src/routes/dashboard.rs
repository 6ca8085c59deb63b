use rocket::State;
use serde_json::json;

use crate::aggregate;
use crate::auth::AuthUser;
use crate::store::Store;

use super::{ok, ApiResponse};

#[get("/dashboard/stats")]
pub fn stats(store: &State<Box<dyn Store>>, user: AuthUser) -> ApiResponse {
    let samples = store.analytics_list_by_user(user.id);
    ok(json!({ "stats": aggregate::dashboard_stats(&samples) }))
}

#[get("/dashboard/follower-growth")]
pub fn follower_growth(store: &State<Box<dyn Store>>, user: AuthUser) -> ApiResponse {
    let samples = store.analytics_list_by_user(user.id);
    let platforms = store.platform_list_by_user(user.id);
    ok(json!({ "data": aggregate::follower_growth(&samples, &platforms) }))
}

#[get("/dashboard/platform-engagement")]
pub fn platform_engagement(store: &State<Box<dyn Store>>, user: AuthUser) -> ApiResponse {
    let platforms = store.platform_list_by_user(user.id);
    ok(json!({ "data": aggregate::platform_engagement(&platforms) }))
}

/// Static placeholder feed; not derived from stored data.
#[get("/dashboard/recent-activities")]
pub fn recent_activities(_user: AuthUser) -> ApiResponse {
    ok(json!({
        "activities": [
            {
                "id": 1,
                "type": "like",
                "platform": "instagram",
                "message": "Your Instagram post received 257 likes",
                "time": "2 hours ago"
            },
            {
                "id": 2,
                "type": "comment",
                "platform": "twitter",
                "message": "@markjohnson commented on your Twitter post",
                "time": "5 hours ago"
            },
            {
                "id": 3,
                "type": "mention",
                "platform": "linkedin",
                "message": "You were mentioned in 5 new LinkedIn posts",
                "time": "Yesterday"
            },
            {
                "id": 4,
                "type": "scheduled",
                "platform": "twitter",
                "message": "Your scheduled post for Twitter is ready to be published",
                "time": "2 days ago"
            }
        ]
    }))
}

/// Static placeholder ranking; not derived from stored data.
#[get("/dashboard/top-content")]
pub fn top_content(_user: AuthUser) -> ApiResponse {
    ok(json!({
        "content": [
            {
                "id": 1,
                "rank": 1,
                "platform": "instagram",
                "type": "image",
                "title": "Summer collection photoshoot behind the scenes",
                "growth": 32.4,
                "engagement": 4200,
                "score": 85
            },
            {
                "id": 2,
                "rank": 2,
                "platform": "youtube",
                "type": "video",
                "title": "10 Tips for Better Social Media Engagement",
                "growth": 28.7,
                "engagement": 12900,
                "score": 72
            },
            {
                "id": 3,
                "rank": 3,
                "platform": "linkedin",
                "type": "article",
                "title": "The Future of Remote Work in Tech Industry",
                "growth": -4.2,
                "engagement": 847,
                "score": 68
            },
            {
                "id": 4,
                "rank": 4,
                "platform": "twitter",
                "type": "thread",
                "title": "Breaking down our latest product updates",
                "growth": 18.9,
                "engagement": 2300,
                "score": 60
            }
        ]
    }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        stats,
        follower_growth,
        platform_engagement,
        recent_activities,
        top_content
    ]
}
