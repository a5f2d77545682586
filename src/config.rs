use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://phonoverse.x10.bz";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub headers: HeaderConfig,
}

/// Static headers sent with every request. The defaults mimic the
/// browser app so the backend's bot filter lets requests through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default = "default_accept")]
    pub accept: String,
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_referer")]
    pub referer: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36".to_string()
}

fn default_content_type() -> String {
    "application/json".to_string()
}

fn default_accept() -> String {
    "*/*".to_string()
}

fn default_origin() -> String {
    "https://phonoverse.x10.bz".to_string()
}

fn default_referer() -> String {
    "https://phonoverse.x10.bz/app/".to_string()
}

impl ClientConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Pick the config to use. An explicit path must load; the implicit
    /// candidates are tried in order and skipped when missing or broken.
    pub fn resolve(explicit: Option<&str>, candidates: &[&str]) -> Result<Self> {
        if let Some(path) = explicit {
            let config = Self::load(path)
                .with_context(|| format!("Failed to load config from {}", path))?;
            info!("Loaded configuration from: {}", path);
            return Ok(config);
        }

        for path in candidates {
            if !Path::new(path).exists() {
                continue;
            }
            match Self::load(path) {
                Ok(config) => {
                    info!("Loaded configuration from: {}", path);
                    return Ok(config);
                }
                Err(e) => {
                    warn!("Ignoring config {}: {}", path, e);
                }
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load from a YAML file, or JSON when the extension says so
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: ClientConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: ClientConfig = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            headers: HeaderConfig::default(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            content_type: default_content_type(),
            accept: default_accept(),
            origin: default_origin(),
            referer: default_referer(),
        }
    }
}
