//! Standard configuration module.
//!
//! Everything has a default, so running without a config file is fine.

use serde_derive::Deserialize;
use std::time::Duration;
use lifx_proto::LightOptions;
use tspl_util::{ConfigExt, crate_name};

/// `tspl-ampel` configuration.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Root of the TfL Unified API.
    #[serde(default = "default_tfl_base_url")]
    pub tfl_base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    /// UDP port the light listens on.
    #[serde(default = "default_lifx_port")]
    pub lifx_port: u16,
    /// How long to wait for the light to answer each datagram.
    #[serde(default = "default_lifx_timeout_ms")]
    pub lifx_timeout_ms: u64,
    /// How many datagrams to send the light before giving up.
    #[serde(default = "default_lifx_attempts")]
    pub lifx_attempts: u32,
    /// One of 'off', 'error', 'warn', 'info', 'debug' or 'trace'.
    #[serde(default = "default_log_level")]
    pub log_level: String
}

fn default_tfl_base_url() -> String {
    "https://api.tfl.gov.uk".into()
}
fn default_user_agent() -> String {
    concat!("tspl-ampel/", env!("CARGO_PKG_VERSION")).into()
}
fn default_http_timeout_secs() -> u64 {
    30
}
fn default_lifx_port() -> u16 {
    lifx_proto::DEFAULT_PORT
}
fn default_lifx_timeout_ms() -> u64 {
    1000
}
fn default_lifx_attempts() -> u32 {
    3
}
fn default_log_level() -> String {
    "warn".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tfl_base_url: default_tfl_base_url(),
            user_agent: default_user_agent(),
            http_timeout_secs: default_http_timeout_secs(),
            lifx_port: default_lifx_port(),
            lifx_timeout_ms: default_lifx_timeout_ms(),
            lifx_attempts: default_lifx_attempts(),
            log_level: default_log_level()
        }
    }
}

impl Config {
    /// The configured log level, falling back to `Warn` if it doesn't parse.
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse()
            .unwrap_or(log::LevelFilter::Warn)
    }
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
    pub fn light_options(&self) -> LightOptions {
        LightOptions {
            port: self.lifx_port,
            timeout: Duration::from_millis(self.lifx_timeout_ms),
            attempts: self.lifx_attempts
        }
    }
}

impl ConfigExt for Config {
    fn crate_name() -> &'static str {
        crate_name!()
    }
}
