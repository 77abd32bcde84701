use crate::error::{CodecError, Result};
use crate::versions::Network;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

const CONFIG_PATH_KEY: &str = "B58CHECK_CONFIG";
const VERSION_KEY: &str = "B58CHECK_VERSION";
const NETWORK_KEY: &str = "B58CHECK_NETWORK";
const LOG_KEY: &str = "B58CHECK_LOG";

/// Values read from the TOML file and environment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Version byte used by `encode` when none is given
    pub default_version: u8,
    pub network: Network,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_version: 0,
            network: Network::Bitcoin,
            log_level: String::from("info"),
        }
    }
}

impl Settings {
    pub fn from_toml(contents: &str) -> Result<Settings> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_file(path: &Path) -> Result<Settings> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CodecError::Config(format!("{}: {e}", path.display())))?;
        Settings::from_toml(&contents)
    }

    /// Override fields from `lookup`, which maps env variable names to values.
    /// Each key is applied on its own; the rejected ones are returned.
    pub fn apply_env<F>(&mut self, lookup: F) -> Vec<CodecError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();
        if let Some(version) = lookup(VERSION_KEY) {
            match version.trim().parse() {
                Ok(parsed) => self.default_version = parsed,
                Err(_) => rejected.push(CodecError::Config(format!(
                    "{VERSION_KEY} must be 0-255, got {version}"
                ))),
            }
        }
        if let Some(network) = lookup(NETWORK_KEY) {
            match network.parse() {
                Ok(parsed) => self.network = parsed,
                Err(e) => rejected.push(CodecError::Config(format!("{NETWORK_KEY}: {e}"))),
            }
        }
        if let Some(level) = lookup(LOG_KEY) {
            self.log_level = level;
        }
        rejected
    }
}

pub struct Config {
    inner: RwLock<Settings>,
    // Sources skipped while loading, reported once a logger is up
    issues: Vec<CodecError>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Defaults, then `$B58CHECK_CONFIG` if set, then env overrides. Bad
    /// sources are skipped and kept in `issues()`; this usually runs before
    /// any logger exists, so the caller logs them.
    pub fn new() -> Config {
        Config::from_sources(env::var(CONFIG_PATH_KEY).ok(), |key| env::var(key).ok())
    }

    /// Like `new`, but an explicit file must load
    pub fn load(path: &Path) -> Result<Config> {
        let mut settings = Settings::from_file(path)?;
        let issues = settings.apply_env(|key| env::var(key).ok());
        Ok(Config::with_issues(settings, issues))
    }

    pub fn from_sources<F>(path: Option<String>, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let mut issues = Vec::new();
        if let Some(path) = path {
            match Settings::from_file(Path::new(&path)) {
                Ok(loaded) => settings = loaded,
                Err(e) => issues.push(e),
            }
        }
        issues.extend(settings.apply_env(lookup));
        Config::with_issues(settings, issues)
    }

    pub fn from_settings(settings: Settings) -> Config {
        Config::with_issues(settings, Vec::new())
    }

    fn with_issues(settings: Settings, issues: Vec<CodecError>) -> Config {
        Config {
            inner: RwLock::new(settings),
            issues,
        }
    }

    pub fn issues(&self) -> &[CodecError] {
        &self.issues
    }

    pub fn snapshot(&self) -> Settings {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn get_default_version(&self) -> u8 {
        self.snapshot().default_version
    }

    pub fn get_network(&self) -> Network {
        self.snapshot().network
    }

    pub fn get_log_level(&self) -> String {
        self.snapshot().log_level
    }

    pub fn set_default_version(&self, version: u8) {
        let mut inner = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        inner.default_version = version;
    }

    pub fn set_network(&self, network: Network) {
        let mut inner = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        inner.network = network;
    }
}
