//! JCDecaux client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the JCDecaux station API
#[derive(Clone, Serialize, Deserialize)]
pub struct JcDecauxConfig {
    /// Base URL for the JCDecaux API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key issued by the JCDecaux developer portal
    #[serde(default = "empty_secret", skip_serializing)]
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.jcdecaux.com".to_string()
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

const fn default_timeout_secs() -> u64 {
    10
}

impl std::fmt::Debug for JcDecauxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JcDecauxConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for JcDecauxConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: empty_secret(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl JcDecauxConfig {
    /// Default configuration with an API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Self::with_api_key("test-key")
        }
    }

    /// Whether an API key is set
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }

    /// Check the configuration for obvious mistakes
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("bikeshare.base_url must not be empty".to_string());
        }
        if !self.has_api_key() {
            return Err("bikeshare.api_key is required".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("bikeshare.timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
