//! Application configuration.

use std::path::PathBuf;

use crate::domain::SplitPolicy;
use crate::fare::FareConfig;
use crate::network::{InvalidPathKind, PathKind};

/// Environment variable naming the network file.
pub const NETWORK_VAR: &str = "SUBWAY_NETWORK";
/// Environment variable selecting `distance` or `duration` journeys.
pub const PATH_KIND_VAR: &str = "SUBWAY_PATH_KIND";
/// Environment variable selecting `overwrite` or `subtract` splits.
pub const SPLIT_POLICY_VAR: &str = "SUBWAY_SPLIT_POLICY";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    PathKind(#[from] InvalidPathKind),

    #[error("invalid split policy {0:?}: expected \"overwrite\" or \"subtract\"")]
    SplitPolicy(String),
}

/// Configuration for the command-line tool.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the JSON network file.
    pub network_path: PathBuf,

    /// What journeys are shortest by.
    pub path_kind: PathKind,

    /// How sections are split when loading lines.
    pub split_policy: SplitPolicy,

    /// Fare table.
    pub fare: FareConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network_path: PathBuf::from("network.json"),
            path_kind: PathKind::default(),
            split_policy: SplitPolicy::default(),
            fare: FareConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, using defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(NETWORK_VAR) {
            config.network_path = PathBuf::from(path);
        }
        if let Some(kind) = lookup(PATH_KIND_VAR) {
            config.path_kind = kind.parse()?;
        }
        if let Some(policy) = lookup(SPLIT_POLICY_VAR) {
            config.split_policy = parse_split_policy(&policy)?;
        }

        Ok(config)
    }
}

fn parse_split_policy(s: &str) -> Result<SplitPolicy, ConfigError> {
    match s.to_ascii_lowercase().as_str() {
        "overwrite" => Ok(SplitPolicy::Overwrite),
        "subtract" => Ok(SplitPolicy::Subtract),
        _ => Err(ConfigError::SplitPolicy(s.to_string())),
    }
}
