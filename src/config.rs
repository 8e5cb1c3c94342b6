use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Base name of the optional config file (`ptl.yaml`, `ptl.toml`, `ptl.json`, ...)
const DEFAULT_CONFIG_NAME: &str = "ptl";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Startup configuration, read once and shared read-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Bedrock region, the AWS default provider chain decides when unset
    #[serde(default)]
    pub aws_region: Option<String>,
    pub model_id: String,
    /// Comma separated list of allowed cross-origin callers
    #[serde(default)]
    pub cors_origin: Option<String>,
    /// Where the OpenAPI document is written at startup, empty to skip
    #[serde(default = "default_openapi_path")]
    pub openapi_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_openapi_path() -> String {
    "openapi.json".to_string()
}

impl Config {
    /// Load from `CONFIG_PATH` (or an optional `ptl.*` file) overlaid with the
    /// process environment (`MODEL_ID`, `AWS_REGION`, `CORS_ORIGIN`, `PORT`, ...).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(std::env::var("CONFIG_PATH").ok().as_deref(), None)
    }

    /// `env` replaces the process environment when given.
    pub fn load_from(
        config_path: Option<&str>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) => ::config::File::with_name(path).required(true),
            None => ::config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = ::config::Config::builder()
            .add_source(file)
            .add_source(::config::Environment::default().source(env))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_id.trim().is_empty() {
            return Err(ConfigError::Invalid("MODEL_ID must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_origin
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let config = Config::load_from(None, env(&[("MODEL_ID", "anthropic.claude-3-haiku-20240307-v1:0")])).unwrap();
        assert_eq!(config.model_id, "anthropic.claude-3-haiku-20240307-v1:0");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.aws_region, None);
        assert!(config.cors_origins().is_empty());
        assert_eq!(config.openapi_path, "openapi.json");
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::load_from(
            None,
            env(&[
                ("MODEL_ID", "anthropic.claude-3-5-sonnet-20240620-v1:0"),
                ("AWS_REGION", "ap-northeast-1"),
                ("PORT", "8080"),
                ("CORS_ORIGIN", "http://localhost:5173"),
            ]),
        )
        .unwrap();
        assert_eq!(config.aws_region.as_deref(), Some("ap-northeast-1"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins(), vec!["http://localhost:5173"]);
    }

    #[test]
    fn test_missing_model_id_fails() {
        assert!(Config::load_from(None, env(&[("PORT", "8080")])).is_err());
    }

    #[test]
    fn test_blank_model_id_fails() {
        let result = Config::load_from(None, env(&[("MODEL_ID", "  ")]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_cors_origin_list() {
        let config = Config::load_from(
            None,
            env(&[
                ("MODEL_ID", "model"),
                ("CORS_ORIGIN", "https://ptl.example.com, http://localhost:5173,,"),
            ]),
        )
        .unwrap();
        assert_eq!(
            config.cors_origins(),
            vec!["https://ptl.example.com", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_missing_explicit_config_file_fails() {
        let result = Config::load_from(Some("/nonexistent/ptl-config"), env(&[("MODEL_ID", "model")]));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
