use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Application configuration loaded from environment variables.
///
/// `groq_api_key` is optional here so `/health/` can report it; the LLM client
/// refuses to build without it, which aborts startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub model_name: String,
    pub groq_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            model_name: optional_env("MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            groq_api_url: optional_env("GROQ_API_URL")
                .unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn groq_configured(&self) -> bool {
        self.groq_api_key.is_some()
    }
}

/// Reads an env var, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// Config for tests; never reads the process environment.
    pub fn for_tests(groq_api_key: Option<&str>) -> Self {
        Config {
            groq_api_key: groq_api_key.map(String::from),
            model_name: DEFAULT_MODEL.to_string(),
            groq_api_url: DEFAULT_GROQ_API_URL.to_string(),
            port: 8000,
            rust_log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groq_configured_reflects_key_presence() {
        assert!(Config::for_tests(Some("gsk_test")).groq_configured());
        assert!(!Config::for_tests(None).groq_configured());
    }
}
