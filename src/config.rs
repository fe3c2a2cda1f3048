use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::constants::{
    DEFAULT_UTC_OFFSET_MINUTES, NOMINATIM_API_BASE, REQUEST_TIMEOUT_SECS, WTTR_API_BASE,
};
use crate::error::{Result, WeatherError};

/// Environment variables with this prefix override file settings,
/// e.g. `WTTR_REPORT_TIMEOUT_SECS=5`.
pub const ENV_PREFIX: &str = "WTTR_REPORT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// wttr.in base URL
    pub weather_url: String,

    /// Nominatim base URL
    pub geocode_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Offset used when rendering the current time, in minutes east of UTC
    pub utc_offset_minutes: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather_url: WTTR_API_BASE.to_string(),
            geocode_url: NOMINATIM_API_BASE.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl Config {
    /// Loads defaults, then `path` (if given), then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }
        builder = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(WeatherError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        self.utc_offset()?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn utc_offset(&self) -> Result<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                WeatherError::Config(format!(
                    "utc_offset_minutes out of range: {}",
                    self.utc_offset_minutes
                ))
            })
    }
}
