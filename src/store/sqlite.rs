use chrono::{DateTime, Utc};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Row};

use crate::models::analytics::{AnalyticsForm, AnalyticsSample};
use crate::models::bookmark::{Bookmark, BookmarkForm, BookmarkPatch};
use crate::models::platform::{Platform, PlatformForm, PlatformPatch};
use crate::models::user::{User, UserForm};

use super::Store;

pub type DbPool = Pool<SqliteConnectionManager>;

/// SQLite-backed implementation of the Store trait, for deployments that
/// need the data to survive a restart. AUTOINCREMENT keeps the never-reuse
/// id guarantee even after deletes.
pub struct SqliteStore {
    pool: DbPool,
}

const USER_COLS: &str = "id, username, email, name, profile_pic, password, provider";
const PLATFORM_COLS: &str = "id, user_id, platform_type, handle, is_active";
const ANALYTICS_COLS: &str = "id, user_id, platform_id, metric, value, date";
const BOOKMARK_COLS: &str = "id, user_id, title, url, platform_type, tags";

impl SqliteStore {
    pub fn new(path: &str) -> Result<Self, String> {
        let manager = SqliteConnectionManager::file(path);
        Self::build(manager)
    }

    /// Named shared-cache in-memory database, so every pooled connection
    /// sees the same data. Used by tests.
    pub fn in_memory(name: &str) -> Result<Self, String> {
        let uri = format!("file:{}?mode=memory&cache=shared", name);
        let manager = SqliteConnectionManager::file(uri);
        Self::build(manager)
    }

    fn build(manager: SqliteConnectionManager) -> Result<Self, String> {
        let pool = Pool::builder()
            .max_size(10)
            .build(manager)
            .map_err(|e| e.to_string())?;
        let store = SqliteStore { pool };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<(), String> {
        let conn = self.pool.get().map_err(|e| e.to_string())?;
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;

            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL,
                email TEXT NOT NULL,
                name TEXT NOT NULL,
                profile_pic TEXT NOT NULL DEFAULT '',
                password TEXT NOT NULL,
                provider TEXT NOT NULL DEFAULT 'password'
            );

            CREATE TABLE IF NOT EXISTS platforms (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                platform_type TEXT NOT NULL,
                handle TEXT NOT NULL,
                is_active INTEGER NOT NULL DEFAULT 1
            );

            CREATE TABLE IF NOT EXISTS analytics (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                platform_id INTEGER NOT NULL,
                metric TEXT NOT NULL,
                value INTEGER NOT NULL,
                date TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS bookmarks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                url TEXT NOT NULL,
                platform_type TEXT NOT NULL,
                tags TEXT NOT NULL DEFAULT '[]'
            );
            ",
        )
        .map_err(|e| e.to_string())
    }

    fn user_from_row(row: &Row) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            email: row.get(2)?,
            name: row.get(3)?,
            profile_pic: row.get(4)?,
            password: row.get(5)?,
            provider: row.get(6)?,
        })
    }

    fn platform_from_row(row: &Row) -> rusqlite::Result<Platform> {
        let active: i64 = row.get(4)?;
        Ok(Platform {
            id: row.get(0)?,
            user_id: row.get(1)?,
            platform_type: row.get(2)?,
            handle: row.get(3)?,
            is_active: active != 0,
        })
    }

    fn analytics_from_row(row: &Row) -> rusqlite::Result<AnalyticsSample> {
        let date: DateTime<Utc> = row.get(5)?;
        Ok(AnalyticsSample {
            id: row.get(0)?,
            user_id: row.get(1)?,
            platform_id: row.get(2)?,
            metric: row.get(3)?,
            value: row.get(4)?,
            date,
        })
    }

    fn bookmark_from_row(row: &Row) -> rusqlite::Result<Bookmark> {
        let tags_json: String = row.get(5)?;
        Ok(Bookmark {
            id: row.get(0)?,
            user_id: row.get(1)?,
            title: row.get(2)?,
            url: row.get(3)?,
            platform_type: row.get(4)?,
            tags: serde_json::from_str(&tags_json).unwrap_or_default(),
        })
    }
}

impl Store for SqliteStore {
    // ── Users ──

    fn user_get(&self, id: i64) -> Option<User> {
        let conn = self.pool.get().ok()?;
        conn.query_row(
            &format!("SELECT {} FROM users WHERE id = ?1", USER_COLS),
            params![id],
            Self::user_from_row,
        )
        .ok()
    }

    fn user_get_by_email(&self, email: &str) -> Option<User> {
        let conn = self.pool.get().ok()?;
        conn.query_row(
            &format!(
                "SELECT {} FROM users WHERE email = ?1 ORDER BY id ASC LIMIT 1",
                USER_COLS
            ),
            params![email],
            Self::user_from_row,
        )
        .ok()
    }

    fn user_get_by_username(&self, username: &str) -> Option<User> {
        let conn = self.pool.get().ok()?;
        conn.query_row(
            &format!(
                "SELECT {} FROM users WHERE username = ?1 ORDER BY id ASC LIMIT 1",
                USER_COLS
            ),
            params![username],
            Self::user_from_row,
        )
        .ok()
    }

    fn user_create(&self, form: &UserForm) -> Result<User, String> {
        let conn = self.pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO users (username, email, name, profile_pic, password, provider)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                form.username,
                form.email,
                form.name,
                form.profile_pic,
                form.password,
                form.provider
            ],
        )
        .map_err(|e| e.to_string())?;
        let id = conn.last_insert_rowid();
        Ok(User {
            id,
            username: form.username.clone(),
            email: form.email.clone(),
            name: form.name.clone(),
            profile_pic: form.profile_pic.clone(),
            password: form.password.clone(),
            provider: form.provider.clone(),
        })
    }

    // ── Platforms ──

    fn platform_list_by_user(&self, user_id: i64) -> Vec<Platform> {
        let conn = match self.pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };
        let mut stmt = match conn.prepare(&format!(
            "SELECT {} FROM platforms WHERE user_id = ?1 ORDER BY id ASC",
            PLATFORM_COLS
        )) {
            Ok(s) => s,
            Err(_) => return vec![],
        };
        stmt.query_map(params![user_id], Self::platform_from_row)
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }

    fn platform_get(&self, id: i64) -> Option<Platform> {
        let conn = self.pool.get().ok()?;
        conn.query_row(
            &format!("SELECT {} FROM platforms WHERE id = ?1", PLATFORM_COLS),
            params![id],
            Self::platform_from_row,
        )
        .ok()
    }

    fn platform_create(&self, form: &PlatformForm) -> Result<Platform, String> {
        let conn = self.pool.get().map_err(|e| e.to_string())?;
        let is_active = form.is_active.unwrap_or(true);
        conn.execute(
            "INSERT INTO platforms (user_id, platform_type, handle, is_active)
             VALUES (?1, ?2, ?3, ?4)",
            params![form.user_id, form.platform_type, form.handle, is_active as i64],
        )
        .map_err(|e| e.to_string())?;
        Ok(Platform {
            id: conn.last_insert_rowid(),
            user_id: form.user_id,
            platform_type: form.platform_type.clone(),
            handle: form.handle.clone(),
            is_active,
        })
    }

    fn platform_update(&self, id: i64, patch: &PlatformPatch) -> Option<Platform> {
        let existing = self.platform_get(id)?;
        let merged = Platform {
            id: existing.id,
            user_id: existing.user_id,
            platform_type: patch
                .platform_type
                .clone()
                .unwrap_or(existing.platform_type),
            handle: patch.handle.clone().unwrap_or(existing.handle),
            is_active: patch.is_active.unwrap_or(existing.is_active),
        };
        let conn = self.pool.get().ok()?;
        conn.execute(
            "UPDATE platforms SET platform_type = ?1, handle = ?2, is_active = ?3 WHERE id = ?4",
            params![
                merged.platform_type,
                merged.handle,
                merged.is_active as i64,
                id
            ],
        )
        .ok()?;
        Some(merged)
    }

    fn platform_delete(&self, id: i64) -> bool {
        let conn = match self.pool.get() {
            Ok(c) => c,
            Err(_) => return false,
        };
        conn.execute("DELETE FROM platforms WHERE id = ?1", params![id])
            .map(|n| n > 0)
            .unwrap_or(false)
    }

    // ── Analytics ──

    fn analytics_list_by_user(&self, user_id: i64) -> Vec<AnalyticsSample> {
        let conn = match self.pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };
        let mut stmt = match conn.prepare(&format!(
            "SELECT {} FROM analytics WHERE user_id = ?1 ORDER BY id ASC",
            ANALYTICS_COLS
        )) {
            Ok(s) => s,
            Err(_) => return vec![],
        };
        stmt.query_map(params![user_id], Self::analytics_from_row)
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }

    fn analytics_list_by_user_platform(
        &self,
        user_id: i64,
        platform_id: i64,
    ) -> Vec<AnalyticsSample> {
        let conn = match self.pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };
        let mut stmt = match conn.prepare(&format!(
            "SELECT {} FROM analytics WHERE user_id = ?1 AND platform_id = ?2 ORDER BY id ASC",
            ANALYTICS_COLS
        )) {
            Ok(s) => s,
            Err(_) => return vec![],
        };
        stmt.query_map(params![user_id, platform_id], Self::analytics_from_row)
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }

    fn analytics_create(&self, form: &AnalyticsForm) -> Result<AnalyticsSample, String> {
        let conn = self.pool.get().map_err(|e| e.to_string())?;
        let date = form.date.unwrap_or_else(Utc::now);
        conn.execute(
            "INSERT INTO analytics (user_id, platform_id, metric, value, date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![form.user_id, form.platform_id, form.metric, form.value, date],
        )
        .map_err(|e| e.to_string())?;
        Ok(AnalyticsSample {
            id: conn.last_insert_rowid(),
            user_id: form.user_id,
            platform_id: form.platform_id,
            metric: form.metric.clone(),
            value: form.value,
            date,
        })
    }

    // ── Bookmarks ──

    fn bookmark_list_by_user(&self, user_id: i64) -> Vec<Bookmark> {
        let conn = match self.pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };
        let mut stmt = match conn.prepare(&format!(
            "SELECT {} FROM bookmarks WHERE user_id = ?1 ORDER BY id ASC",
            BOOKMARK_COLS
        )) {
            Ok(s) => s,
            Err(_) => return vec![],
        };
        stmt.query_map(params![user_id], Self::bookmark_from_row)
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }

    fn bookmark_get(&self, id: i64) -> Option<Bookmark> {
        let conn = self.pool.get().ok()?;
        conn.query_row(
            &format!("SELECT {} FROM bookmarks WHERE id = ?1", BOOKMARK_COLS),
            params![id],
            Self::bookmark_from_row,
        )
        .ok()
    }

    fn bookmark_create(&self, form: &BookmarkForm) -> Result<Bookmark, String> {
        let conn = self.pool.get().map_err(|e| e.to_string())?;
        let tags = form.tags.clone().unwrap_or_default();
        let tags_json = serde_json::to_string(&tags).map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO bookmarks (user_id, title, url, platform_type, tags)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![form.user_id, form.title, form.url, form.platform_type, tags_json],
        )
        .map_err(|e| e.to_string())?;
        Ok(Bookmark {
            id: conn.last_insert_rowid(),
            user_id: form.user_id,
            title: form.title.clone(),
            url: form.url.clone(),
            platform_type: form.platform_type.clone(),
            tags,
        })
    }

    fn bookmark_update(&self, id: i64, patch: &BookmarkPatch) -> Option<Bookmark> {
        let existing = self.bookmark_get(id)?;
        let merged = Bookmark {
            id: existing.id,
            user_id: existing.user_id,
            title: patch.title.clone().unwrap_or(existing.title),
            url: patch.url.clone().unwrap_or(existing.url),
            platform_type: patch
                .platform_type
                .clone()
                .unwrap_or(existing.platform_type),
            tags: patch.tags.clone().unwrap_or(existing.tags),
        };
        let tags_json = serde_json::to_string(&merged.tags).ok()?;
        let conn = self.pool.get().ok()?;
        conn.execute(
            "UPDATE bookmarks SET title = ?1, url = ?2, platform_type = ?3, tags = ?4 WHERE id = ?5",
            params![merged.title, merged.url, merged.platform_type, tags_json, id],
        )
        .ok()?;
        Some(merged)
    }

    fn bookmark_delete(&self, id: i64) -> bool {
        let conn = match self.pool.get() {
            Ok(c) => c,
            Err(_) => return false,
        };
        conn.execute("DELETE FROM bookmarks WHERE id = ?1", params![id])
            .map(|n| n > 0)
            .unwrap_or(false)
    }
}
