use serde::{Deserialize, Serialize};

/// Sentinel stored in place of a password hash for OAuth-created accounts.
pub const OAUTH_NO_PASSWORD: &str = "oauth-no-password";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub name: String,
    pub profile_pic: String,
    /// Bcrypt hash, or `OAUTH_NO_PASSWORD` for google/github accounts.
    pub password: String,
    pub provider: String, // password, google, github
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub profile_pic: String,
    pub password: String,
    pub provider: String,
}

impl User {
    /// Public shape without the credential, for response bodies.
    pub fn safe_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "email": self.email,
            "name": self.name,
            "profilePic": self.profile_pic,
        })
    }
}
