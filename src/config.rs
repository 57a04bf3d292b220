use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;
use std::time::Duration;

use crate::client::ClientConfig;
use crate::error::ConfigError;
use crate::{API_BASE_URL, DEFAULT_FACTION};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StapiConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Root of the versioned API, e.g. `https://api.spacetraders.io/v2`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token for authenticated calls; falls back to the agent token file
    #[serde(default)]
    pub token: Option<String>,
    /// Faction new accounts start in
    #[serde(default = "default_faction")]
    pub faction: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    API_BASE_URL.to_string()
}

fn default_faction() -> String {
    DEFAULT_FACTION.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl StapiConfig {
    /// Load configuration from file. A missing file is an error; no default is written.
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(config_path).map_err(|e| {
            if e.kind() == IoErrorKind::NotFound {
                ConfigError::NotFound {
                    path: config_path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: config_path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        info!("Loading configuration from {}", config_path.display());

        let config: StapiConfig = toml::from_str(&config_str).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Invalid("api.base_url must not be empty".to_string()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                base_url
            )));
        }
        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "api.timeout_seconds must be greater than 0".to_string(),
            ));
        }
        if self.api.faction.trim().is_empty() {
            return Err(ConfigError::Invalid("api.faction must not be empty".to_string()));
        }
        if matches!(&self.api.token, Some(token) if token.trim().is_empty()) {
            return Err(ConfigError::Invalid("api.token must not be blank when set".to_string()));
        }

        debug!("Configuration validation passed");
        Ok(())
    }

    pub fn print_summary(&self) {
        debug!("Configuration Summary:");
        debug!("   API: {}", self.api.base_url);
        debug!("   Faction: {}", self.api.faction);
        debug!("   Timeout: {}s", self.api.timeout_seconds);
        debug!(
            "   Token: {}",
            if self.api.token.is_some() { "from config" } else { "not configured" }
        );
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api.base_url.trim())
            .with_timeout(Duration::from_secs(self.api.timeout_seconds));
        match &self.api.token {
            Some(token) => config.with_token(token.trim()),
            None => config,
        }
    }
}

/// Token from the config if present, otherwise from the agent token file.
pub fn resolve_bearer_token(config: &ClientConfig, token_file: &Path) -> Result<String, ConfigError> {
    if let Some(token) = &config.bearer_token {
        return Ok(token.clone());
    }
    load_agent_token(token_file)
}

pub fn load_agent_token(token_file: &Path) -> Result<String, ConfigError> {
    let token = match fs::read_to_string(token_file) {
        Ok(contents) => contents.trim().to_string(),
        Err(e) if e.kind() == IoErrorKind::NotFound => {
            return Err(ConfigError::MissingToken {
                path: token_file.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: token_file.to_path_buf(),
                source: e,
            });
        }
    };
    if token.is_empty() {
        return Err(ConfigError::MissingToken {
            path: token_file.to_path_buf(),
        });
    }
    Ok(token)
}

pub fn save_agent_token(token_file: &Path, token: &str) -> Result<(), ConfigError> {
    fs::write(token_file, format!("{}\n", token)).map_err(|e| ConfigError::Write {
        path: token_file.to_path_buf(),
        source: e,
    })?;
    info!("Token saved to {}", token_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_config() {
        let file = write_config(
            r#"
            [api]
            base_url = "http://localhost:8080/v2/"
            token = "secret"
            faction = "GALACTIC"
            timeout_seconds = 5
            "#,
        );
        let config = StapiConfig::load(file.path()).unwrap();
        assert_eq!(config.api.faction, "GALACTIC");

        let client_config = config.client_config();
        assert_eq!(client_config.base_url, "http://localhost:8080/v2/");
        assert_eq!(client_config.bearer_token.as_deref(), Some("secret"));
        assert_eq!(client_config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn fills_defaults() {
        let file = write_config("[api]\n");
        let config = StapiConfig::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, API_BASE_URL);
        assert_eq!(config.api.faction, "COSMIC");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.api.token, None);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = StapiConfig::load(&dir.path().join("stapictl.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("stapictl.toml"));
    }

    #[test]
    fn rejects_bad_values() {
        for contents in [
            "[api]\nbase_url = \"\"\n",
            "[api]\nbase_url = \"ftp://example.com\"\n",
            "[api]\ntimeout_seconds = 0\n",
            "[api]\ntoken = \"  \"\n",
        ] {
            let file = write_config(contents);
            let err = StapiConfig::load(file.path()).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{}", contents);
        }
    }

    #[test]
    fn rejects_unparseable_toml() {
        let file = write_config("[api\nbase_url = ");
        let err = StapiConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn token_falls_back_to_token_file() {
        let dir = TempDir::new().unwrap();
        let token_file = dir.path().join("AGENT_TOKEN");
        let config = ClientConfig::new("https://api.test/v2");

        let err = resolve_bearer_token(&config, &token_file).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken { .. }));

        save_agent_token(&token_file, "from-file").unwrap();
        assert_eq!(resolve_bearer_token(&config, &token_file).unwrap(), "from-file");

        let config = config.with_token("from-config");
        assert_eq!(resolve_bearer_token(&config, &token_file).unwrap(), "from-config");
    }

    #[test]
    fn blank_token_file_is_missing_token() {
        let dir = TempDir::new().unwrap();
        let token_file = dir.path().join("AGENT_TOKEN");
        fs::write(&token_file, "  \n").unwrap();
        assert!(matches!(
            load_agent_token(&token_file),
            Err(ConfigError::MissingToken { .. })
        ));
    }
}
