use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::models::analytics::{AnalyticsForm, AnalyticsSample};
use crate::models::bookmark::{Bookmark, BookmarkForm, BookmarkPatch};
use crate::models::platform::{Platform, PlatformForm, PlatformPatch};
use crate::models::user::{User, UserForm};

use super::Store;

#[derive(Default)]
struct Inner {
    users: HashMap<i64, User>,
    platforms: HashMap<i64, Platform>,
    analytics: HashMap<i64, AnalyticsSample>,
    bookmarks: HashMap<i64, Bookmark>,
    next_user_id: i64,
    next_platform_id: i64,
    next_analytics_id: i64,
    next_bookmark_id: i64,
}

/// In-memory store: four keyed collections with per-kind monotonic id
/// allocators starting at 1. One mutex serializes all access — Rocket runs
/// handlers on a worker pool, so the counters and maps must never be
/// touched concurrently.
pub struct MemStore {
    inner: Mutex<Inner>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore {
            inner: Mutex::new(Inner {
                next_user_id: 1,
                next_platform_id: 1,
                next_analytics_id: 1,
                next_bookmark_id: 1,
                ..Inner::default()
            }),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemStore {
    // ── Users ──

    fn user_get(&self, id: i64) -> Option<User> {
        self.inner.lock().ok()?.users.get(&id).cloned()
    }

    fn user_get_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.lock().ok()?;
        // First match in id order; duplicates are rejected upstream.
        let mut users: Vec<&User> = inner.users.values().collect();
        users.sort_by_key(|u| u.id);
        users.into_iter().find(|u| u.email == email).cloned()
    }

    fn user_get_by_username(&self, username: &str) -> Option<User> {
        let inner = self.inner.lock().ok()?;
        let mut users: Vec<&User> = inner.users.values().collect();
        users.sort_by_key(|u| u.id);
        users.into_iter().find(|u| u.username == username).cloned()
    }

    fn user_create(&self, form: &UserForm) -> Result<User, String> {
        let mut inner = self.inner.lock().map_err(|_| "store lock poisoned".to_string())?;
        let id = inner.next_user_id;
        inner.next_user_id += 1;
        let user = User {
            id,
            username: form.username.clone(),
            email: form.email.clone(),
            name: form.name.clone(),
            profile_pic: form.profile_pic.clone(),
            password: form.password.clone(),
            provider: form.provider.clone(),
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    // ── Platforms ──

    fn platform_list_by_user(&self, user_id: i64) -> Vec<Platform> {
        let inner = match self.inner.lock() {
            Ok(i) => i,
            Err(_) => return vec![],
        };
        let mut list: Vec<Platform> = inner
            .platforms
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        // Insertion order == id order, ids are monotonic.
        list.sort_by_key(|p| p.id);
        list
    }

    fn platform_get(&self, id: i64) -> Option<Platform> {
        self.inner.lock().ok()?.platforms.get(&id).cloned()
    }

    fn platform_create(&self, form: &PlatformForm) -> Result<Platform, String> {
        let mut inner = self.inner.lock().map_err(|_| "store lock poisoned".to_string())?;
        let id = inner.next_platform_id;
        inner.next_platform_id += 1;
        let platform = Platform {
            id,
            user_id: form.user_id,
            platform_type: form.platform_type.clone(),
            handle: form.handle.clone(),
            is_active: form.is_active.unwrap_or(true),
        };
        inner.platforms.insert(id, platform.clone());
        Ok(platform)
    }

    fn platform_update(&self, id: i64, patch: &PlatformPatch) -> Option<Platform> {
        let mut inner = self.inner.lock().ok()?;
        let platform = inner.platforms.get_mut(&id)?;
        if let Some(ref t) = patch.platform_type {
            platform.platform_type = t.clone();
        }
        if let Some(ref h) = patch.handle {
            platform.handle = h.clone();
        }
        if let Some(a) = patch.is_active {
            platform.is_active = a;
        }
        Some(platform.clone())
    }

    fn platform_delete(&self, id: i64) -> bool {
        match self.inner.lock() {
            Ok(mut inner) => inner.platforms.remove(&id).is_some(),
            Err(_) => false,
        }
    }

    // ── Analytics ──

    fn analytics_list_by_user(&self, user_id: i64) -> Vec<AnalyticsSample> {
        let inner = match self.inner.lock() {
            Ok(i) => i,
            Err(_) => return vec![],
        };
        let mut list: Vec<AnalyticsSample> = inner
            .analytics
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by_key(|a| a.id);
        list
    }

    fn analytics_list_by_user_platform(
        &self,
        user_id: i64,
        platform_id: i64,
    ) -> Vec<AnalyticsSample> {
        let inner = match self.inner.lock() {
            Ok(i) => i,
            Err(_) => return vec![],
        };
        let mut list: Vec<AnalyticsSample> = inner
            .analytics
            .values()
            .filter(|a| a.user_id == user_id && a.platform_id == platform_id)
            .cloned()
            .collect();
        list.sort_by_key(|a| a.id);
        list
    }

    fn analytics_create(&self, form: &AnalyticsForm) -> Result<AnalyticsSample, String> {
        let mut inner = self.inner.lock().map_err(|_| "store lock poisoned".to_string())?;
        let id = inner.next_analytics_id;
        inner.next_analytics_id += 1;
        let sample = AnalyticsSample {
            id,
            user_id: form.user_id,
            platform_id: form.platform_id,
            metric: form.metric.clone(),
            value: form.value,
            date: form.date.unwrap_or_else(Utc::now),
        };
        inner.analytics.insert(id, sample.clone());
        Ok(sample)
    }

    // ── Bookmarks ──

    fn bookmark_list_by_user(&self, user_id: i64) -> Vec<Bookmark> {
        let inner = match self.inner.lock() {
            Ok(i) => i,
            Err(_) => return vec![],
        };
        let mut list: Vec<Bookmark> = inner
            .bookmarks
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by_key(|b| b.id);
        list
    }

    fn bookmark_get(&self, id: i64) -> Option<Bookmark> {
        self.inner.lock().ok()?.bookmarks.get(&id).cloned()
    }

    fn bookmark_create(&self, form: &BookmarkForm) -> Result<Bookmark, String> {
        let mut inner = self.inner.lock().map_err(|_| "store lock poisoned".to_string())?;
        let id = inner.next_bookmark_id;
        inner.next_bookmark_id += 1;
        let bookmark = Bookmark {
            id,
            user_id: form.user_id,
            title: form.title.clone(),
            url: form.url.clone(),
            platform_type: form.platform_type.clone(),
            tags: form.tags.clone().unwrap_or_default(),
        };
        inner.bookmarks.insert(id, bookmark.clone());
        Ok(bookmark)
    }

    fn bookmark_update(&self, id: i64, patch: &BookmarkPatch) -> Option<Bookmark> {
        let mut inner = self.inner.lock().ok()?;
        let bookmark = inner.bookmarks.get_mut(&id)?;
        if let Some(ref t) = patch.title {
            bookmark.title = t.clone();
        }
        if let Some(ref u) = patch.url {
            bookmark.url = u.clone();
        }
        if let Some(ref p) = patch.platform_type {
            bookmark.platform_type = p.clone();
        }
        if let Some(ref tags) = patch.tags {
            bookmark.tags = tags.clone();
        }
        Some(bookmark.clone())
    }

    fn bookmark_delete(&self, id: i64) -> bool {
        match self.inner.lock() {
            Ok(mut inner) => inner.bookmarks.remove(&id).is_some(),
            Err(_) => false,
        }
    }
}
