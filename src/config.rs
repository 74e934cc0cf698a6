use std::{env, time::Duration};

use secrecy::{ExposeSecret as _, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_AI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_AI_MODEL: &str = "gemini-pro-latest";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub ai_api_key: SecretString,
    pub ai_api_base: String,
    pub ai_model: String,
    pub ai_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_upload_bytes: usize,
    /// `None` allows every origin.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unparseable numbers fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            ai_api_key: SecretString::from(lookup("GOOGLE_API_KEY").unwrap_or_default()),
            ai_api_base: lookup("AI_API_BASE").unwrap_or_else(|| DEFAULT_AI_API_BASE.to_string()),
            ai_model: lookup("AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            ai_timeout_secs: lookup("AI_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_AI_TIMEOUT_SECS),
            web_server_host: lookup("WEB_SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            max_upload_bytes: lookup("MAX_UPLOAD_BYTES")
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|o| !o.trim().is_empty()),
        }
    }

    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai_timeout_secs)
    }

    /// Checks the settings the server cannot run without.
    pub fn validate(&self) -> AppResult<()> {
        if self.ai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::Configuration(
                "GOOGLE_API_KEY is not set. Set it to the completion service API key.".to_string(),
            ));
        }

        if self.ai_timeout_secs == 0 {
            return Err(AppError::Configuration(
                "AI_TIMEOUT_SECS must be greater than zero.".to_string(),
            ));
        }

        if self.max_upload_bytes == 0 {
            return Err(AppError::Configuration(
                "MAX_UPLOAD_BYTES must be greater than zero.".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            ai_api_key: SecretString::from("test_api_key".to_string()),
            ai_api_base: "http://127.0.0.1:9/v1".to_string(),
            ai_model: "test-model".to_string(),
            ai_timeout_secs: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            max_upload_bytes: 1024 * 1024,
            cors_allowed_origin: None,
        }
    }
}
