//! Application configuration from YAML, `.env` and the environment

use crate::core::prompt::PromptTemplates;
use crate::llm::client::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the model name
pub const MODEL_ENV: &str = "BLOG_WRITER_MODEL";

/// Overrides the provider base URL
pub const BASE_URL_ENV: &str = "BLOG_WRITER_BASE_URL";

/// Overrides the sampling temperature
pub const TEMPERATURE_ENV: &str = "BLOG_WRITER_TEMPERATURE";

/// Default name of the variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Top-level configuration loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Completion provider settings
    pub provider: ProviderConfig,

    /// Prompt template overrides
    pub prompts: PromptTemplates,
}

/// Completion provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,

    /// Model identifier used for every stage
    pub model: String,

    /// Sampling temperature used for every stage
    pub temperature: f32,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values given on the command line, applied after the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Default location: `<config dir>/blog-writer/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("blog-writer").join("config.yaml"))
    }

    /// Load from `path`, or from the default location if it exists, or
    /// fall back to built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => {
                debug!("Loading config from {}", default.display());
                Self::from_file(default)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.provider.model = model;
        }
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.provider.base_url = base_url;
        }
        if let Some(raw) = lookup(TEMPERATURE_ENV).filter(|v| !v.trim().is_empty()) {
            self.provider.temperature = raw
                .trim()
                .parse()
                .with_context(|| format!("{} is not a number: {}", TEMPERATURE_ENV, raw))?;
        }
        Ok(())
    }

    /// Apply command-line overrides
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(model) = &overrides.model {
            self.provider.model = model.clone();
        }
        if let Some(temperature) = overrides.temperature {
            self.provider.temperature = temperature;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let provider = &self.provider;

        if provider.model.trim().is_empty() {
            anyhow::bail!("provider.model must not be empty");
        }
        if provider.base_url.trim().is_empty() {
            anyhow::bail!("provider.base_url must not be empty");
        }
        if !provider.base_url.starts_with("http://") && !provider.base_url.starts_with("https://") {
            anyhow::bail!(
                "provider.base_url must be an http(s) URL, got '{}'",
                provider.base_url
            );
        }
        if !(0.0..=2.0).contains(&provider.temperature) {
            anyhow::bail!(
                "provider.temperature must be between 0.0 and 2.0, got {}",
                provider.temperature
            );
        }
        if provider.timeout_secs == 0 {
            anyhow::bail!("provider.timeout_secs must be greater than 0");
        }
        if provider.api_key_env.trim().is_empty() {
            anyhow::bail!("provider.api_key_env must not be empty");
        }

        for (stage, var) in self.prompts.missing_placeholders() {
            warn!(
                "Prompt template for the {} stage does not reference {{{{ {} }}}}",
                stage, var
            );
        }

        Ok(())
    }

    /// Read the API key from the variable named by `provider.api_key_env`
    pub fn api_key<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&self.provider.api_key_env).filter(|key| !key.trim().is_empty())
    }

    /// Build the client configuration for the resolved provider settings
    pub fn client_config(&self, api_key: Option<String>) -> ClientConfig {
        let config = ClientConfig::new()
            .with_base_url(self.provider.base_url.clone())
            .with_model(self.provider.model.clone())
            .with_temperature(self.provider.temperature)
            .with_timeout(self.provider.timeout_secs);

        match api_key {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }
}

/// Look up a variable in the process environment
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
