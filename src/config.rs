//! EmailJS configuration
//!
//! The three deployment identifiers are gathered once at startup and then
//! handed to [`crate::network::EmailJsClient::new`]. Nothing else in the crate
//! reads the process environment.
//!
//! Sources, lowest to highest precedence:
//! 1. `~/.contactform/config.yaml` (or the file named by `$CONTACTFORM_CONFIG`)
//! 2. `EMAILJS_*` environment variables

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_EMAILJS_API_URL};
use crate::error::ConfigError;

pub const ENV_CONFIG_PATH: &str = "CONTACTFORM_CONFIG";
pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const ENV_PRIVATE_KEY: &str = "EMAILJS_PRIVATE_KEY";
pub const ENV_API_URL: &str = "EMAILJS_API_URL";

/// Resolved settings for the EmailJS send call
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Optional access token for accounts with strict mode enabled
    pub private_key: Option<String>,
    pub api_url: String,
}

// Keys stay out of logs.
impl std::fmt::Debug for EmailJsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailJsConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &"<redacted>")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// On-disk shape; every field optional so env vars can fill the gaps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
    pub api_url: Option<String>,
}

impl EmailJsConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        EmailJsConfig {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            private_key: None,
            api_url: String::from(DEFAULT_EMAILJS_API_URL),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Load from the default config file and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(ENV_CONFIG_PATH)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let file = file_config(explicit, default_config_path())?;
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a file config with an environment lookup. Environment wins.
    pub fn from_sources<F>(file: Option<FileConfig>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();
        let pick = |env_key: &str, file_value: Option<String>| {
            env(env_key)
                .filter(|v| !v.trim().is_empty())
                .or(file_value.filter(|v| !v.trim().is_empty()))
        };

        let service_id = pick(ENV_SERVICE_ID, file.service_id).ok_or(ConfigError::Missing {
            key: "service_id",
            env: ENV_SERVICE_ID,
        })?;
        let template_id = pick(ENV_TEMPLATE_ID, file.template_id).ok_or(ConfigError::Missing {
            key: "template_id",
            env: ENV_TEMPLATE_ID,
        })?;
        let public_key = pick(ENV_PUBLIC_KEY, file.public_key).ok_or(ConfigError::Missing {
            key: "public_key",
            env: ENV_PUBLIC_KEY,
        })?;

        let api_url = pick(ENV_API_URL, file.api_url)
            .unwrap_or_else(|| String::from(DEFAULT_EMAILJS_API_URL));

        Ok(EmailJsConfig {
            service_id,
            template_id,
            public_key,
            private_key: pick(ENV_PRIVATE_KEY, file.private_key),
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

/// `~/.contactform/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Pick the config file to read. An explicit path must exist; the default
/// one is skipped when absent.
pub fn file_config(
    explicit: Option<PathBuf>,
    default: Option<PathBuf>,
) -> Result<Option<FileConfig>, ConfigError> {
    match (explicit, default) {
        (Some(path), _) => read_file_config(&path).map(Some),
        (None, Some(path)) if path.exists() => read_file_config(&path).map(Some),
        (None, _) => Ok(None),
    }
}

/// Parse a YAML config file
pub fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
