//! Service configuration.
//!
//! Configuration is loaded from (in order of precedence):
//! 1. Environment variables (`CONTACTS_*`)
//! 2. Config file (`contacts.toml`, or the path in `CONTACTS_CONFIG`)
//! 3. Default values

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "CONTACTS_";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_VAR: &str = "CONTACTS_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "contacts.toml";

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Listen host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of requests the contact store queues before callers wait.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Install a permissive CORS layer.
    #[serde(default = "default_cors")]
    pub cors: bool,

    /// Send the underlying store error text in 500 responses.
    #[serde(default)]
    pub expose_internal_errors: bool,

    /// Largest request body accepted, in bytes. Larger bodies are a 400.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_channel_capacity() -> usize {
    32
}

fn default_cors() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            channel_capacity: default_channel_capacity(),
            cors: default_cors(),
            expose_internal_errors: false,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from all sources.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment(Self::config_path()).extract()
    }

    /// The layered provider stack, with `path` as the TOML layer.
    ///
    /// A missing file is skipped.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ServiceConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
    }

    /// Returns the path to the config file.
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}
