use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde_json::json;

use crate::ai::{self, SuggestionOutcome, TagRequest};
use crate::auth::AuthUser;
use crate::config::Config;

use super::{error_with_suggestions, ok, ApiResponse};

/// Suggest tags for a bookmark. Every terminal state responds successfully
/// with a `suggestions` array; a provider failure is downgraded, never
/// propagated.
#[post("/ai/tag-suggestions", format = "json", data = "<body>")]
pub fn tag_suggestions(
    _user: AuthUser,
    config: &State<Config>,
    body: Json<TagRequest>,
) -> ApiResponse {
    match ai::suggest_tags(config, &body) {
        SuggestionOutcome::MissingContent => error_with_suggestions(
            Status::BadRequest,
            "Content information is required to generate tags",
            vec![],
        ),
        SuggestionOutcome::Unavailable(suggestions) => error_with_suggestions(
            Status::ServiceUnavailable,
            "AI tag suggestion service unavailable",
            suggestions,
        ),
        SuggestionOutcome::Suggested(suggestions) => ok(json!({ "suggestions": suggestions })),
        SuggestionOutcome::Degraded(suggestions) => ok(json!({
            "message": "Error generating AI tags",
            "suggestions": suggestions
        })),
    }
}

pub fn routes() -> Vec<rocket::Route> {
    routes![tag_suggestions]
}
