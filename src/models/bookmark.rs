use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub url: String,
    pub platform_type: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkForm {
    pub user_id: i64,
    pub title: String,
    pub url: String,
    pub platform_type: String,
    /// Defaults to empty when the caller omits it.
    pub tags: Option<Vec<String>>,
}

/// Partial update. Absent fields are left untouched; `id` and `user_id`
/// are never patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub platform_type: Option<String>,
    pub tags: Option<Vec<String>>,
}
