use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::json;

use crate::auth::AuthUser;
use crate::models::platform::{PlatformForm, PlatformPatch, PlatformType};
use crate::store::Store;

use super::{created, error, ok, ApiResponse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformCreate {
    pub platform_type: Option<String>,
    pub handle: Option<String>,
    pub is_active: Option<bool>,
}

#[get("/platforms")]
pub fn list(store: &State<Box<dyn Store>>, user: AuthUser) -> ApiResponse {
    ok(json!({ "platforms": store.platform_list_by_user(user.id) }))
}

#[post("/platforms", format = "json", data = "<body>")]
pub fn create(
    store: &State<Box<dyn Store>>,
    user: AuthUser,
    body: Json<PlatformCreate>,
) -> ApiResponse {
    let (platform_type, handle) = match (
        body.platform_type.as_deref().filter(|s| !s.trim().is_empty()),
        body.handle.as_deref().filter(|s| !s.trim().is_empty()),
    ) {
        (Some(t), Some(h)) => (t, h),
        _ => return error(Status::BadRequest, "Platform type and handle are required"),
    };

    if PlatformType::parse(platform_type).is_none() {
        return error(Status::BadRequest, "Unknown platform type");
    }

    let form = PlatformForm {
        user_id: user.id,
        platform_type: platform_type.to_string(),
        handle: handle.to_string(),
        is_active: body.is_active,
    };

    match store.platform_create(&form) {
        Ok(platform) => created(json!({ "platform": platform })),
        Err(e) => {
            log::error!("Platform create failed: {}", e);
            error(Status::InternalServerError, "Internal server error")
        }
    }
}

#[patch("/platforms/<id>", format = "json", data = "<body>")]
pub fn update(
    store: &State<Box<dyn Store>>,
    user: AuthUser,
    id: i64,
    body: Json<PlatformPatch>,
) -> ApiResponse {
    let platform = match store.platform_get(id) {
        Some(p) => p,
        None => return error(Status::NotFound, "Platform not found"),
    };
    if platform.user_id != user.id {
        return error(
            Status::Forbidden,
            "Unauthorized: Platform belongs to another user",
        );
    }

    if let Some(ref t) = body.platform_type {
        if PlatformType::parse(t).is_none() {
            return error(Status::BadRequest, "Unknown platform type");
        }
    }

    match store.platform_update(id, &body) {
        Some(updated) => ok(json!({ "platform": updated })),
        None => error(Status::NotFound, "Platform not found"),
    }
}

#[delete("/platforms/<id>")]
pub fn delete(
    store: &State<Box<dyn Store>>,
    user: AuthUser,
    id: i64,
) -> Result<Status, ApiResponse> {
    let platform = match store.platform_get(id) {
        Some(p) => p,
        None => return Err(error(Status::NotFound, "Platform not found")),
    };
    if platform.user_id != user.id {
        return Err(error(
            Status::Forbidden,
            "Unauthorized: Platform belongs to another user",
        ));
    }

    store.platform_delete(id);
    Ok(Status::NoContent)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list, create, update, delete]
}
