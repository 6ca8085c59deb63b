use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::json;

use crate::auth::{self, AuthUser};
use crate::config::Config;
use crate::models::user::{UserForm, OAUTH_NO_PASSWORD};
use crate::store::Store;

use super::{created, error, ok, ApiResponse};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OauthRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

#[post("/auth/login", format = "json", data = "<body>")]
pub fn login(
    store: &State<Box<dyn Store>>,
    config: &State<Config>,
    body: Json<LoginRequest>,
) -> ApiResponse {
    let (email, password) = match (body.email.as_deref(), body.password.as_deref()) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => return error(Status::BadRequest, "Email and password are required"),
    };

    let user = match store.user_get_by_email(email) {
        Some(u) => u,
        None => return error(Status::NotFound, "User not found"),
    };

    if !auth::verify_password(password, &user.password) {
        return error(Status::Unauthorized, "Invalid password");
    }

    match auth::issue_token(&config.jwt_secret, &user) {
        Ok(token) => ok(json!({ "user": user.safe_json(), "token": token })),
        Err(e) => {
            log::error!("Token issue failed: {}", e);
            error(Status::InternalServerError, "Internal server error")
        }
    }
}

#[post("/auth/register", format = "json", data = "<body>")]
pub fn register(
    store: &State<Box<dyn Store>>,
    config: &State<Config>,
    body: Json<RegisterRequest>,
) -> ApiResponse {
    fn filled(f: &Option<String>) -> Option<&str> {
        f.as_deref().filter(|s| !s.trim().is_empty())
    }
    let (username, email, name, password) = match (
        filled(&body.username),
        filled(&body.email),
        filled(&body.name),
        filled(&body.password),
    ) {
        (Some(u), Some(e), Some(n), Some(p)) => (u, e, n, p),
        _ => return error(Status::BadRequest, "Invalid user data"),
    };

    // Duplicate emails and usernames are rejected here; the store itself
    // does not enforce uniqueness.
    if store.user_get_by_email(email).is_some() || store.user_get_by_username(username).is_some() {
        return error(Status::Conflict, "User already exists");
    }

    let hash = match auth::hash_password(password, config.bcrypt_cost) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Password hash failed: {}", e);
            return error(Status::InternalServerError, "Internal server error");
        }
    };

    let form = UserForm {
        username: username.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        profile_pic: body.profile_pic.clone().unwrap_or_default(),
        password: hash,
        provider: "password".to_string(),
    };

    match store.user_create(&form) {
        Ok(user) => match auth::issue_token(&config.jwt_secret, &user) {
            Ok(token) => created(json!({ "user": user.safe_json(), "token": token })),
            Err(e) => {
                log::error!("Token issue failed: {}", e);
                error(Status::InternalServerError, "Internal server error")
            }
        },
        Err(e) => {
            log::error!("User create failed: {}", e);
            error(Status::InternalServerError, "Internal server error")
        }
    }
}

/// Shared fetch-or-create for the OAuth simulation endpoints. The provider
/// token was validated upstream; only a profile arrives here.
fn oauth_login(
    store: &State<Box<dyn Store>>,
    config: &State<Config>,
    body: &OauthRequest,
    provider: &str,
) -> ApiResponse {
    let email = match body.email.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(e) => e,
        None => return error(Status::BadRequest, "Email is required"),
    };

    let user = match store.user_get_by_email(email) {
        Some(u) => u,
        None => {
            let username = email.split('@').next().unwrap_or(email).to_string();
            let form = UserForm {
                username,
                email: email.to_string(),
                name: body.name.clone().unwrap_or_default(),
                profile_pic: body.profile_pic.clone().unwrap_or_default(),
                password: OAUTH_NO_PASSWORD.to_string(),
                provider: provider.to_string(),
            };
            match store.user_create(&form) {
                Ok(u) => u,
                Err(e) => {
                    log::error!("OAuth user create failed: {}", e);
                    return error(Status::InternalServerError, "Internal server error");
                }
            }
        }
    };

    match auth::issue_token(&config.jwt_secret, &user) {
        Ok(token) => ok(json!({ "user": user.safe_json(), "token": token })),
        Err(e) => {
            log::error!("Token issue failed: {}", e);
            error(Status::InternalServerError, "Internal server error")
        }
    }
}

#[post("/auth/google", format = "json", data = "<body>")]
pub fn google(
    store: &State<Box<dyn Store>>,
    config: &State<Config>,
    body: Json<OauthRequest>,
) -> ApiResponse {
    oauth_login(store, config, &body, "google")
}

#[post("/auth/github", format = "json", data = "<body>")]
pub fn github(
    store: &State<Box<dyn Store>>,
    config: &State<Config>,
    body: Json<OauthRequest>,
) -> ApiResponse {
    oauth_login(store, config, &body, "github")
}

#[get("/auth/me")]
pub fn me(store: &State<Box<dyn Store>>, user: AuthUser) -> ApiResponse {
    match store.user_get(user.id) {
        Some(u) => ok(u.safe_json()),
        None => error(Status::NotFound, "User not found"),
    }
}

pub fn routes() -> Vec<rocket::Route> {
    routes![login, register, google, github, me]
}
