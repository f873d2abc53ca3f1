use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::catalog::DEFAULT_SHORTLIST_SIZE;
use crate::llm_client::LlmSettings;

const DEFAULT_INFERENCE_BASE_URL: &str = "https://inference.do-ai.run";
const DEFAULT_MODEL_ID: &str = "llama3.3-70b-instruct";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_access_key: String,
    pub model_id: String,
    pub inference_base_url: String,
    pub llm_timeout: Duration,
    pub shortlist_size: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let shortlist_size = parse_env("SHORTLIST_SIZE", DEFAULT_SHORTLIST_SIZE)?;
        if shortlist_size == 0 {
            bail!("SHORTLIST_SIZE must be at least 1");
        }

        Ok(Config {
            model_access_key: require_env("DO_MODEL_ACCESS_KEY")?,
            model_id: std::env::var("DO_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            inference_base_url: std::env::var("DO_INFERENCE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_INFERENCE_BASE_URL.to_string()),
            llm_timeout: Duration::from_secs(parse_env("LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS)?),
            shortlist_size,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            base_url: self.inference_base_url.clone(),
            api_key: self.model_access_key.clone(),
            model: self.model_id.clone(),
            timeout: self.llm_timeout,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names so parallel tests do not race.

    #[test]
    fn test_parse_env_default_when_unset() {
        let value: u16 = parse_env("KIT_PICKER_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("KIT_PICKER_TEST_TIMEOUT", " 45 ");
        let value: u64 = parse_env("KIT_PICKER_TEST_TIMEOUT", 30).unwrap();
        assert_eq!(value, 45);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("KIT_PICKER_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("KIT_PICKER_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("KIT_PICKER_TEST_BAD_PORT"));
    }

    #[test]
    fn test_require_env_rejects_blank() {
        std::env::set_var("KIT_PICKER_TEST_BLANK_KEY", "  ");
        assert!(require_env("KIT_PICKER_TEST_BLANK_KEY").is_err());
        assert!(require_env("KIT_PICKER_TEST_MISSING_KEY").is_err());
    }

    #[test]
    fn test_llm_settings_copies_connection_fields() {
        let config = Config {
            model_access_key: "key".to_string(),
            model_id: "model".to_string(),
            inference_base_url: "http://localhost:9000".to_string(),
            llm_timeout: Duration::from_secs(7),
            shortlist_size: 3,
            port: 8080,
            rust_log: "debug".to_string(),
        };
        let settings = config.llm_settings();
        assert_eq!(settings.base_url, "http://localhost:9000");
        assert_eq!(settings.api_key, "key");
        assert_eq!(settings.model, "model");
        assert_eq!(settings.timeout, Duration::from_secs(7));
    }
}
