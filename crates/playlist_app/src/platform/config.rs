//! Read-only application settings loaded from `./playlist_player.ron`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use player_logging::{player_info, player_warn, LogDestination, DEFAULT_LOG_FILE};
use playlist_engine::{
    AuthSettings, FetchSettings, DEFAULT_API_BASE_URL, DEFAULT_AUTHORIZE_ENDPOINT,
    DEFAULT_PAGE_FILENAME,
};
use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_FILENAME: &str = "playlist_player.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub(crate) enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub client_id: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub show_dialog: bool,
    pub authorize_endpoint: String,
    pub api_base_url: String,
    pub request_timeout_secs: Option<u64>,
    pub output_dir: PathBuf,
    pub page_filename: String,
    pub open_browser: bool,
    pub log: LogTarget,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            redirect_uri: String::new(),
            scopes: Vec::new(),
            show_dialog: true,
            authorize_endpoint: DEFAULT_AUTHORIZE_ENDPOINT.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            output_dir: PathBuf::from("output"),
            page_filename: DEFAULT_PAGE_FILENAME.to_string(),
            open_browser: true,
            log: LogTarget::File,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    pub fn auth_settings(&self) -> AuthSettings {
        AuthSettings {
            authorize_endpoint: self.authorize_endpoint.clone(),
            client_id: self.client_id.clone(),
            redirect_uri: self.redirect_uri.clone(),
            scopes: self.scopes.clone(),
            show_dialog: self.show_dialog,
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            api_base_url: self.api_base_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..FetchSettings::default()
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigSource {
    File(PathBuf),
    Defaults(PathBuf),
}

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Logs where the settings came from; call once logging is up.
    pub fn report(&self) {
        match &self.source {
            ConfigSource::File(path) => player_info!("Loaded settings from {:?}", path),
            ConfigSource::Defaults(path) => {
                player_warn!("No settings at {:?}; using defaults", path)
            }
        }
        if self.config.client_id.trim().is_empty() {
            player_warn!("client_id is empty; login will not be possible");
        }
    }
}

/// A missing file yields the defaults; an unreadable or malformed one is an error.
pub(crate) fn load_config(path: &Path) -> anyhow::Result<LoadedConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(LoadedConfig {
                config: AppConfig::default(),
                source: ConfigSource::Defaults(path.to_path_buf()),
            });
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read settings from {path:?}"));
        }
    };

    let config: AppConfig =
        ron::from_str(&content).with_context(|| format!("failed to parse settings in {path:?}"))?;
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path.to_path_buf()),
    })
}
