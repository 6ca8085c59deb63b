use serde_json::{json, Value};

use super::{AiError, AiRequest, AiResponse};
use crate::config::Config;

pub fn call(config: &Config, api_key: &str, req: &AiRequest) -> Result<AiResponse, AiError> {
    let base_url = config.openai_base_url.trim_end_matches('/');
    let url = format!("{}/chat/completions", base_url);

    let body = json!({
        "model": config.openai_model,
        "messages": [
            {"role": "system", "content": req.system},
            {"role": "user", "content": req.prompt}
        ],
        "max_tokens": req.max_tokens,
        "temperature": req.temperature
    });

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(config.ai_timeout_secs))
        .build()
        .map_err(|e| AiError(format!("HTTP client error: {}", e)))?;

    let resp = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .map_err(|e| AiError(format!("OpenAI request failed: {}", e)))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().unwrap_or_default();
        return Err(AiError(format!("OpenAI returned {}: {}", status, text)));
    }

    let json: Value = resp
        .json()
        .map_err(|e| AiError(format!("OpenAI JSON parse error: {}", e)))?;

    let text = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .unwrap_or("")
        .to_string();

    Ok(AiResponse {
        text,
        model: config.openai_model.clone(),
    })
}
