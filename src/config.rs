use anyhow::{bail, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{env, io::ErrorKind, str::FromStr, time::Duration};

const DEFAULT_CONFIG_FILE_NAME: &str = "data-updater.yaml";
const CONFIG_FILE_ENV: &str = "DATA_UPDATER_CONFIG";

const DEFAULT_ADDRESS: &str = "0.0.0.0:8888";
const DEFAULT_ENDPOINT: &str = "/.netlify/functions/updateData";
const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_FILE_PATH: &str = "data.json";
const DEFAULT_COMMIT_MESSAGE: &str = "Update data.json via Netlify function";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

const ADMIN_PASSWORD_ENV: &str = "ADMIN_PASSWORD";
const GITHUB_PAT_ENV: &str = "GITHUB_PAT";
const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Process-wide settings, resolved once at startup.
///
/// Non-secret values come from an optional yaml file and can be overridden by
/// environment variables. Secrets are only ever read from the environment.
#[derive(Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_address")]
    pub address: String,
    #[serde(default = "Config::default_endpoint")]
    pub endpoint: String,
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    #[serde(default = "Config::default_file_path")]
    pub file_path: String,
    #[serde(default = "Config::default_commit_message")]
    pub commit_message: String,
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "Config::default_max_body_bytes")]
    pub max_body_bytes: usize,
    #[serde(default)]
    pub lenient_lookup: bool,
    #[serde(skip)]
    pub admin_password: String,
    #[serde(skip)]
    pub github_token: String,
}

impl Config {
    pub async fn load() -> Result<Config> {
        let path =
            env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE_NAME.to_owned());

        let config_string = match tokio::fs::read_to_string(&path).await {
            Ok(content) => Some(content),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => return Err(err).with_context(|| format!("Cannot read {}", path)),
        };

        Config::from_sources(config_string.as_deref(), |key| env::var(key).ok())
    }

    /// Builds the config from raw yaml (if any) and an environment lookup.
    pub fn from_sources<F>(yaml: Option<&str>, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match yaml {
            Some(yaml) if !yaml.trim().is_empty() => {
                serde_yaml::from_str::<Config>(yaml).context("Invalid config file")?
            }
            _ => serde_yaml::from_str::<Config>("{}")?,
        };

        if let Some(address) = env("ADDRESS") {
            config.address = address;
        }

        if let Some(api_url) = env("GITHUB_API_URL") {
            config.api_url = api_url;
        }

        if let Some(log_level) = env("LOG_LEVEL") {
            config.log_level = log_level;
        }

        config.admin_password = env(ADMIN_PASSWORD_ENV).unwrap_or_default();
        config.github_token = env(GITHUB_PAT_ENV)
            .or_else(|| env(GITHUB_TOKEN_ENV))
            .unwrap_or_default();

        config.validate()?;

        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .with_context(|| format!("Unknown log level '{}'", self.log_level))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.admin_password.is_empty() {
            bail!("{} must be set", ADMIN_PASSWORD_ENV);
        }

        if self.github_token.is_empty() {
            bail!("{} (or {}) must be set", GITHUB_PAT_ENV, GITHUB_TOKEN_ENV);
        }

        if !self.endpoint.starts_with('/') {
            bail!("endpoint must start with '/', got '{}'", self.endpoint);
        }

        if self.max_body_bytes == 0 {
            bail!("max_body_bytes must be greater than zero");
        }

        self.level_filter()?;

        Ok(())
    }

    fn default_address() -> String {
        DEFAULT_ADDRESS.to_owned()
    }

    fn default_endpoint() -> String {
        DEFAULT_ENDPOINT.to_owned()
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }

    fn default_file_path() -> String {
        DEFAULT_FILE_PATH.to_owned()
    }

    fn default_commit_message() -> String {
        DEFAULT_COMMIT_MESSAGE.to_owned()
    }

    fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_owned()
    }

    fn default_max_body_bytes() -> usize {
        DEFAULT_MAX_BODY_BYTES
    }
}
