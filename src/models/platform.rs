use serde::{Deserialize, Serialize};

/// A connected social-media account, not the software platform itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: i64,
    pub user_id: i64,
    pub platform_type: String, // instagram, twitter, linkedin, youtube, facebook
    pub handle: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformForm {
    pub user_id: i64,
    pub platform_type: String,
    pub handle: String,
    /// Defaults to true when the caller omits it.
    pub is_active: Option<bool>,
}

/// Partial update. Absent fields are left untouched; `id` and `user_id`
/// are never patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPatch {
    pub platform_type: Option<String>,
    pub handle: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformType {
    Instagram,
    Twitter,
    Linkedin,
    Youtube,
    Facebook,
}

impl PlatformType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "instagram" => Some(Self::Instagram),
            "twitter" => Some(Self::Twitter),
            "linkedin" => Some(Self::Linkedin),
            "youtube" => Some(Self::Youtube),
            "facebook" => Some(Self::Facebook),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Youtube => "youtube",
            Self::Facebook => "facebook",
        }
    }
}
