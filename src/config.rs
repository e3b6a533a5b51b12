use std::env;

use chrono::Duration;
use secrecy::SecretString;

pub const DEFAULT_QUIZ_TITLE: &str = "Untitled Quiz";

const MAX_TIMEOUT_SECS: u64 = (i64::MAX / 1000) as u64;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub generator_url: String,
    pub generator_api_key: Option<SecretString>,
    pub generator_timeout_secs: u64,
    pub default_quiz_title: String,
    pub cors_allowed_origin: String,
    pub session_idle_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            generator_url: env::var("GENERATOR_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            generator_api_key: env::var("GENERATOR_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            generator_timeout_secs: env::var("GENERATOR_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            default_quiz_title: env::var("DEFAULT_QUIZ_TITLE")
                .ok()
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_QUIZ_TITLE.to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "*".to_string()),
            session_idle_timeout_secs: env::var("SESSION_IDLE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1800),
        }
    }

    /// Endpoint of the external quiz generation service
    pub fn generate_quiz_endpoint(&self) -> String {
        format!("{}/generate-quiz", self.generator_url.trim_end_matches('/'))
    }

    /// How long a quiz session may sit untouched before it is evicted.
    pub fn session_idle_timeout(&self) -> Duration {
        let secs = self.session_idle_timeout_secs.min(MAX_TIMEOUT_SECS);
        Duration::seconds(secs as i64)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            generator_url: "http://localhost:8000/".to_string(),
            generator_api_key: None,
            generator_timeout_secs: 5,
            default_quiz_title: DEFAULT_QUIZ_TITLE.to_string(),
            cors_allowed_origin: "*".to_string(),
            session_idle_timeout_secs: 60,
        }
    }
}
