use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde_json::{json, Value};

pub mod ai;
pub mod auth;
pub mod bookmarks;
pub mod dashboard;
pub mod platforms;

/// Every JSON handler responds with an explicit status + body pair.
pub type ApiResponse = Custom<Json<Value>>;

pub fn ok(body: Value) -> ApiResponse {
    Custom(Status::Ok, Json(body))
}

pub fn created(body: Value) -> ApiResponse {
    Custom(Status::Created, Json(body))
}

pub fn error(status: Status, message: &str) -> ApiResponse {
    Custom(status, Json(json!({ "message": message })))
}

/// Non-200 tag-suggestion responses still carry a `suggestions` field so
/// clients never need a separate error shape.
pub fn error_with_suggestions(
    status: Status,
    message: &str,
    suggestions: Vec<String>,
) -> ApiResponse {
    Custom(
        status,
        Json(json!({ "message": message, "suggestions": suggestions })),
    )
}
