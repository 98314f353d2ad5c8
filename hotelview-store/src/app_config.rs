use serde::Deserialize;
use std::env;
use std::time::Duration;
use hotelview_core::booking::HOTEL_CATEGORY;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub booking: BookingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    #[serde(default = "default_delay_ms")]
    pub simulated_delay_ms: u64,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_delay_ms() -> u64 { 2000 }
fn default_category() -> String { HOTEL_CATEGORY.to_string() }

impl BookingConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_amenity_preview")]
    pub amenity_preview: usize,
}

fn default_page_size() -> usize { 9 }
fn default_amenity_preview() -> usize { 3 }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            amenity_preview: default_amenity_preview(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// JSON file holding the search result snapshot to serve
    pub snapshot_path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from("config", &run_mode)
    }

    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg. `HOTELVIEW__BOOKING__SIMULATED_DELAY_MS=500`
            .add_source(config::Environment::with_prefix("HOTELVIEW").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
