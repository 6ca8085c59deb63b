use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::json;

use crate::auth::AuthUser;
use crate::models::bookmark::{BookmarkForm, BookmarkPatch};
use crate::store::Store;

use super::{created, error, ok, ApiResponse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkCreate {
    pub title: Option<String>,
    pub url: Option<String>,
    pub platform_type: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[get("/bookmarks")]
pub fn list(store: &State<Box<dyn Store>>, user: AuthUser) -> ApiResponse {
    ok(json!({ "bookmarks": store.bookmark_list_by_user(user.id) }))
}

#[post("/bookmarks", format = "json", data = "<body>")]
pub fn create(
    store: &State<Box<dyn Store>>,
    user: AuthUser,
    body: Json<BookmarkCreate>,
) -> ApiResponse {
    fn filled(f: &Option<String>) -> Option<&str> {
        f.as_deref().filter(|s| !s.trim().is_empty())
    }
    let (title, url, platform_type) = match (
        filled(&body.title),
        filled(&body.url),
        filled(&body.platform_type),
    ) {
        (Some(t), Some(u), Some(p)) => (t, u, p),
        _ => return error(Status::BadRequest, "Invalid bookmark data"),
    };

    let form = BookmarkForm {
        user_id: user.id,
        title: title.to_string(),
        url: url.to_string(),
        platform_type: platform_type.to_string(),
        tags: body.tags.clone(),
    };

    match store.bookmark_create(&form) {
        Ok(bookmark) => created(json!({ "bookmark": bookmark })),
        Err(e) => {
            log::error!("Bookmark create failed: {}", e);
            error(Status::InternalServerError, "Internal server error")
        }
    }
}

#[patch("/bookmarks/<id>", format = "json", data = "<body>")]
pub fn update(
    store: &State<Box<dyn Store>>,
    user: AuthUser,
    id: i64,
    body: Json<BookmarkPatch>,
) -> ApiResponse {
    let bookmark = match store.bookmark_get(id) {
        Some(b) => b,
        None => return error(Status::NotFound, "Bookmark not found"),
    };
    if bookmark.user_id != user.id {
        return error(
            Status::Forbidden,
            "Unauthorized: Bookmark belongs to another user",
        );
    }

    match store.bookmark_update(id, &body) {
        Some(updated) => ok(json!({ "bookmark": updated })),
        None => error(Status::NotFound, "Bookmark not found"),
    }
}

#[delete("/bookmarks/<id>")]
pub fn delete(
    store: &State<Box<dyn Store>>,
    user: AuthUser,
    id: i64,
) -> Result<Status, ApiResponse> {
    let bookmark = match store.bookmark_get(id) {
        Some(b) => b,
        None => return Err(error(Status::NotFound, "Bookmark not found")),
    };
    if bookmark.user_id != user.id {
        return Err(error(
            Status::Forbidden,
            "Unauthorized: Bookmark belongs to another user",
        ));
    }

    store.bookmark_delete(id);
    Ok(Status::NoContent)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list, create, update, delete]
}
