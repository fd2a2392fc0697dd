use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

use crate::console::{DEFAULT_STOP_AFTER_DURATION, DEFAULT_SUCCESS_TTL_SECS};

/// Environment variables override file values, e.g.
/// `MEETING_CONSOLE__BACKEND__BASE_URL=http://bots:3001`
pub const ENV_PREFIX: &str = "MEETING_CONSOLE";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub backend: BackendConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
    /// Allow cross-origin requests to the console
    pub cors: bool,
    /// Directory served under `/static`
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Root of the meeting bot API
    pub base_url: String,
    pub stop_after_duration: u64,
    /// No timeout when unset
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub success_banner_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "meeting-console".to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 5173,
            cors: true,
            static_dir: "static".to_string(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            stop_after_duration: DEFAULT_STOP_AFTER_DURATION,
            request_timeout_secs: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Meeting Bot Console".to_string(),
            success_banner_secs: DEFAULT_SUCCESS_TTL_SECS as u64,
        }
    }
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl UiConfig {
    pub fn success_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.success_banner_secs as i64)
    }
}

impl Config {
    /// Load `path` (extension optional, file may be absent) layered under
    /// `MEETING_CONSOLE__*` environment variables.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service.http.bind, self.service.http.port)
    }
}
