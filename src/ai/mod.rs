//! AI tag suggestions for bookmarks. Wraps the OpenAI chat-completions API
//! with a strict-then-lenient parse of its output and a deterministic
//! fallback policy: a provider failure is never fatal to the request.

pub mod openai;
pub mod prompts;

use serde::Deserialize;

use crate::config::Config;

// ── Types ─────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AiRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub text: String,
    pub model: String,
}

#[derive(Debug)]
pub struct AiError(pub String);

impl std::fmt::Display for AiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub platform_type: Option<String>,
    pub content: Option<String>,
}

/// Every terminal state of a tag-suggestion request. Each variant maps to
/// one HTTP response shape; all carry a suggestion list except
/// `MissingContent`, which responds with an empty one.
#[derive(Debug, PartialEq)]
pub enum SuggestionOutcome {
    /// None of title/url/content supplied.
    MissingContent,
    /// No provider credential configured; fixed fallback list.
    Unavailable(Vec<String>),
    /// Provider answered and the output parsed (or the empty-output
    /// substitution kicked in).
    Suggested(Vec<String>),
    /// Provider call failed; fallback list, still a successful response.
    Degraded(Vec<String>),
}

// ── Service ───────────────────────────────────────────

pub fn suggest_tags(config: &Config, req: &TagRequest) -> SuggestionOutcome {
    let filled = |field: &Option<String>| {
        field.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false)
    };
    let has_title = filled(&req.title);

    if !has_title && !filled(&req.url) && !filled(&req.content) {
        return SuggestionOutcome::MissingContent;
    }

    let Some(api_key) = config.openai_api_key.as_deref() else {
        return SuggestionOutcome::Unavailable(vec![
            "social".to_string(),
            "media".to_string(),
            "content".to_string(),
        ]);
    };

    let ai_req = AiRequest {
        system: prompts::tag_system(),
        prompt: prompts::suggest_tags(req),
        max_tokens: 150,
        temperature: 0.7,
    };

    match openai::call(config, api_key, &ai_req) {
        Ok(resp) => {
            let tags = parse_tags(&resp.text);
            if tags.is_empty() {
                SuggestionOutcome::Suggested(base_fallback(req.platform_type.as_deref()))
            } else {
                SuggestionOutcome::Suggested(tags)
            }
        }
        Err(e) => {
            log::warn!("OpenAI tag suggestion failed: {}", e);
            let mut tags = base_fallback(req.platform_type.as_deref());
            if has_title {
                tags.push("post".to_string());
            }
            SuggestionOutcome::Degraded(tags)
        }
    }
}

// ── Parsing ───────────────────────────────────────────

/// Parse provider output into clean tags. Tries a strict JSON array of
/// strings first; otherwise strips bracket/quote/brace characters and
/// splits on commas. Every surviving tag is lowercase alphanumeric.
pub fn parse_tags(text: &str) -> Vec<String> {
    if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(text) {
        return items
            .iter()
            .filter_map(|v| v.as_str())
            .map(sanitize_tag)
            .filter(|t| !t.is_empty())
            .collect();
    }

    text.replace(['[', ']', '"', '{', '}'], "")
        .split(',')
        .map(|t| sanitize_tag(t.trim()))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Strip every non-alphanumeric character and lowercase the rest.
fn sanitize_tag(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn base_fallback(platform_type: Option<&str>) -> Vec<String> {
    let mut tags = vec![
        "content".to_string(),
        "social".to_string(),
        "media".to_string(),
    ];
    if let Some(pt) = platform_type {
        let cleaned = sanitize_tag(pt);
        if !cleaned.is_empty() {
            tags.push(cleaned);
        }
    }
    tags
}
