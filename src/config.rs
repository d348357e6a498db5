use crate::prompt::{PromptConfig, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::provider::DEFAULT_BASE_URL;
use crate::quota::DEFAULT_DAILY_LIMIT;
use std::{env, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },

    #[error("failed to read prompt file {path}: {source}")]
    PromptFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub api_key: String,
    pub provider_base_url: String,
    pub prompt: PromptConfig,
    pub daily_limit: u32,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("ANTHROPIC_API_KEY")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("ANTHROPIC_API_KEY"))?;

        let mut prompt = PromptConfig {
            model: lookup("EPISODE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: parse_or(&lookup, "EPISODE_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            ..PromptConfig::default()
        };
        if let Some(path) = lookup("EPISODE_PROMPT_FILE") {
            let path = PathBuf::from(path);
            prompt = prompt
                .with_prompt_file(&path)
                .map_err(|source| ConfigError::PromptFile { path, source })?;
        }

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            port: parse_or(&lookup, "PORT", 8080)?,
            api_key,
            provider_base_url: lookup("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            prompt,
            daily_limit: parse_or(&lookup, "DAILY_LIMIT", DEFAULT_DAILY_LIMIT)?,
            log_format,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.daily_limit, 10);
        assert_eq!(config.provider_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.prompt, PromptConfig::default());
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ANTHROPIC_API_KEY")));
    }

    #[test]
    fn invalid_number_names_the_variable() {
        let err = ServerConfig::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("EPISODE_MAX_TOKENS", "lots"),
        ]))
        .unwrap_err();
        match err {
            ConfigError::Invalid { var, value } => {
                assert_eq!(var, "EPISODE_MAX_TOKENS");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn overrides_are_read() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("PORT", "3000"),
            ("ANTHROPIC_BASE_URL", "http://127.0.0.1:4000"),
            ("EPISODE_MODEL", "claude-test"),
            ("DAILY_LIMIT", "3"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.provider_base_url, "http://127.0.0.1:4000");
        assert_eq!(config.prompt.model, "claude-test");
        assert_eq!(config.daily_limit, 3);
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
