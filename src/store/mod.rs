use crate::models::analytics::{AnalyticsForm, AnalyticsSample};
use crate::models::bookmark::{Bookmark, BookmarkForm, BookmarkPatch};
use crate::models::platform::{Platform, PlatformForm, PlatformPatch};
use crate::models::user::{User, UserForm};

pub mod memory;
pub mod sqlite;

/// Unified data-access trait. Every entity operation goes through here.
/// Implementations: `MemStore` (maps + counters, demo/test use) and
/// `SqliteStore` (wraps rusqlite/r2d2 for durable deployments).
///
/// Conventions: lookups return `Option` (absence is a sentinel, never an
/// error — routes decide the HTTP status), deletes return `false` for a
/// missing id, and identifiers per entity kind start at 1, increase
/// strictly, and are never reused after deletion.
pub trait Store: Send + Sync {
    // ── Users ───────────────────────────────────────────────────────
    fn user_get(&self, id: i64) -> Option<User>;
    fn user_get_by_email(&self, email: &str) -> Option<User>;
    fn user_get_by_username(&self, username: &str) -> Option<User>;
    /// Does not enforce email/username uniqueness; callers pre-check.
    fn user_create(&self, form: &UserForm) -> Result<User, String>;

    // ── Platforms ───────────────────────────────────────────────────
    fn platform_list_by_user(&self, user_id: i64) -> Vec<Platform>;
    fn platform_get(&self, id: i64) -> Option<Platform>;
    fn platform_create(&self, form: &PlatformForm) -> Result<Platform, String>;
    /// Merge the patch into the existing record, preserving the id and any
    /// fields the patch leaves out. `None` when the id does not exist.
    fn platform_update(&self, id: i64, patch: &PlatformPatch) -> Option<Platform>;
    fn platform_delete(&self, id: i64) -> bool;

    // ── Analytics (append-only; no update or delete exists) ─────────
    fn analytics_list_by_user(&self, user_id: i64) -> Vec<AnalyticsSample>;
    fn analytics_list_by_user_platform(&self, user_id: i64, platform_id: i64)
        -> Vec<AnalyticsSample>;
    fn analytics_create(&self, form: &AnalyticsForm) -> Result<AnalyticsSample, String>;

    // ── Bookmarks ───────────────────────────────────────────────────
    fn bookmark_list_by_user(&self, user_id: i64) -> Vec<Bookmark>;
    fn bookmark_get(&self, id: i64) -> Option<Bookmark>;
    fn bookmark_create(&self, form: &BookmarkForm) -> Result<Bookmark, String>;
    fn bookmark_update(&self, id: i64, patch: &BookmarkPatch) -> Option<Bookmark>;
    fn bookmark_delete(&self, id: i64) -> bool;
}
