use std::env;

/// Runtime configuration, read from the environment once at startup and
/// shared via Rocket managed state.
#[derive(Debug, Clone)]
pub struct Config {
    /// HS256 signing key for API tokens.
    pub jwt_secret: String,
    /// Absent key puts the tag-suggestion endpoint in its degraded mode.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    /// "memory", or a SQLite file path.
    pub database: String,
    /// Seed the demo dataset on boot.
    pub seed_demo: bool,
    /// Upper bound on the OpenAI call; the request degrades past it.
    pub ai_timeout_secs: u64,
    /// Bcrypt work factor. Tests lower this; DEFAULT_COST hashes can take
    /// tens of seconds in debug builds.
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Self {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Config {
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dashmetrics_secret_key".to_string()),
            openai_api_key,
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            database: env::var("DATABASE").unwrap_or_else(|_| "memory".to_string()),
            seed_demo: env::var("SEED_DEMO")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            ai_timeout_secs: env::var("AI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}
