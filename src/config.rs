use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::model::persona::BackendProfile;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
const SECRETS_FILE_VAR: &str = "AOJ_SECRETS_FILE";
const DEFAULT_SECRETS_FILE: &str = "secrets.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY not found. Please set it in secrets.toml or the environment.")]
    MissingApiKey,
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{key} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { key: String, value: String },
}

/// Sampling parameters for one backend configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelProfile {
    pub model_id: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// The two backend configurations a proceeding is served with.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelProfiles {
    pub precise: ModelProfile,
    pub exploratory: ModelProfile,
}

impl Default for ModelProfiles {
    fn default() -> Self {
        Self {
            precise: ModelProfile {
                model_id: "llama-3.3-70b-versatile".into(),
                temperature: 0.15,
                max_output_tokens: 2048,
            },
            exploratory: ModelProfile {
                model_id: "llama-3.1-8b-instant".into(),
                temperature: 0.8,
                max_output_tokens: 1024,
            },
        }
    }
}

impl ModelProfiles {
    pub fn get(&self, profile: BackendProfile) -> &ModelProfile {
        match profile {
            BackendProfile::Precise => &self.precise,
            BackendProfile::Exploratory => &self.exploratory,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base: String,
    pub profiles: ModelProfiles,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Reads `secrets.toml` if it exists, then applies environment
    /// overrides. A file named by `AOJ_SECRETS_FILE` must exist.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var(SECRETS_FILE_VAR) {
            Ok(path) => read_secrets(Path::new(&path), true)?,
            Err(_) => read_secrets(Path::new(DEFAULT_SECRETS_FILE), false)?,
        };

        Self::from_sources(file.as_ref(), |key| std::env::var(key).ok())
    }

    /// Resolves settings with precedence defaults < file < environment.
    pub fn from_sources(
        file: Option<&HashMap<String, String>>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let lookup = |key: &str| {
            env(key)
                .or_else(|| file.and_then(|f| f.get(key).cloned()))
                .filter(|v| !v.trim().is_empty())
        };

        let api_key = lookup(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::with_api_key(api_key);

        if let Some(v) = lookup("AOJ_API_BASE") {
            config.api_base = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = lookup("AOJ_PRECISE_MODEL") {
            config.profiles.precise.model_id = v;
        }
        if let Some(v) = lookup("AOJ_EXPLORATORY_MODEL") {
            config.profiles.exploratory.model_id = v;
        }
        if let Some(v) = lookup("AOJ_REQUEST_TIMEOUT_SECS") {
            let secs = v.trim().parse::<u64>().map_err(|_| ConfigError::InvalidTimeout {
                key: "AOJ_REQUEST_TIMEOUT_SECS".into(),
                value: v.clone(),
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    fn with_api_key(api_key: String) -> Self {
        Self {
            api_key,
            api_base: "https://api.groq.com/openai/v1".into(),
            profiles: ModelProfiles::default(),
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// Loads a flat secrets table. A missing file is only an error when
/// `required`.
fn read_secrets(path: &Path, required: bool) -> Result<Option<HashMap<String, String>>, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::debug!(path = %path.display(), "no secrets file, using environment only");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    parse_secrets(&raw)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_secrets(raw: &str) -> Result<HashMap<String, String>, toml::de::Error> {
    toml::from_str::<HashMap<String, String>>(raw)
}
