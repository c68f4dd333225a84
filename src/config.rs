//! Client configuration
//!
//! [`ClientConfig`] can be built in code or loaded from layered settings:
//!
//! 1. `config/shortcut.{toml,yaml,json}` (optional)
//! 2. environment variables with the `SHORTCUT_` prefix, which win
//!
//! | Variable | Default |
//! |---|---|
//! | `SHORTCUT_API_TOKEN` | required |
//! | `SHORTCUT_BASE_URL` | `https://api.app.shortcut.com/api/v3` |
//! | `SHORTCUT_TIMEOUT_SECS` | `30` |
//! | `SHORTCUT_CONNECT_TIMEOUT_SECS` | `5` |
//! | `SHORTCUT_USER_AGENT` | `shortcut-api/<version>` |

use std::fmt;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShortcutError};

pub const DEFAULT_BASE_URL: &str = "https://api.app.shortcut.com/api/v3";
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

const SETTINGS_FILE: &str = "config/shortcut";
const ENV_PREFIX: &str = "SHORTCUT";

/// Immutable settings shared by every request a client makes
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_token: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for the public Shortcut API with default timeouts
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: api_token.into(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Loads `config/shortcut.*` and `SHORTCUT_*` variables.
    pub fn from_env() -> Result<Self> {
        Settings::load()?.try_into()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            return Err(ShortcutError::Config("Shortcut API token is empty".to_string()));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| ShortcutError::Config(format!("Invalid base URL `{}`: {}", self.base_url, e)))?;
        if self.timeout.is_zero() {
            return Err(ShortcutError::Config("Timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Raw layered settings, before defaults are applied
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub api_token: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(SETTINGS_FILE)
    }

    /// Same as [`Settings::load`] with a custom file stem
    pub fn load_from(file: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e: ConfigError| ShortcutError::Config(e.to_string()))?;

        Ok(settings)
    }
}

impl TryFrom<Settings> for ClientConfig {
    type Error = ShortcutError;

    fn try_from(settings: Settings) -> Result<Self> {
        let api_token = settings
            .api_token
            .ok_or_else(|| ShortcutError::Config("SHORTCUT_API_TOKEN is not set".to_string()))?;

        let mut config = ClientConfig::new(api_token);
        if let Some(base_url) = settings.base_url {
            config.base_url = base_url;
        }
        if let Some(secs) = settings.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = settings.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(user_agent) = settings.user_agent {
            config.user_agent = user_agent;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FILE: &str = "config/does-not-exist";

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("tok");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert!(config.user_agent.starts_with("shortcut-api/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = ClientConfig::new("  ").validate().unwrap_err();
        assert!(matches!(err, ShortcutError::Config(_)));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let err = ClientConfig::new("tok").with_base_url("not a url").validate().unwrap_err();
        assert!(matches!(err, ShortcutError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", ClientConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_settings_from_env() {
        temp_env::with_vars(
            [
                ("SHORTCUT_API_TOKEN", Some("env-token")),
                ("SHORTCUT_BASE_URL", Some("http://localhost:9999/api/v3")),
                ("SHORTCUT_TIMEOUT_SECS", Some("7")),
                ("SHORTCUT_CONNECT_TIMEOUT_SECS", None),
                ("SHORTCUT_USER_AGENT", None),
            ],
            || {
                let config: ClientConfig = Settings::load_from(NO_FILE).unwrap().try_into().unwrap();
                assert_eq!(config.api_token, "env-token");
                assert_eq!(config.base_url, "http://localhost:9999/api/v3");
                assert_eq!(config.timeout, Duration::from_secs(7));
                assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
                assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
            },
        );
    }

    #[test]
    fn test_settings_missing_token() {
        temp_env::with_vars_unset(["SHORTCUT_API_TOKEN"], || {
            let result: Result<ClientConfig> = Settings::load_from(NO_FILE).and_then(ClientConfig::try_from);
            assert!(matches!(result, Err(ShortcutError::Config(_))));
        });
    }
}
