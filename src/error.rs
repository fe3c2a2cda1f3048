use thiserror::Error;

use crate::schema::Section;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Empty response body")]
    EmptyResponse,

    #[error("No weather data: section '{section}' is missing or empty")]
    NoWeatherData { section: Section },

    #[error("Missing field '{key}' in section '{section}'")]
    MissingField { section: Section, key: &'static str },

    #[error("Invalid observation time '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Observation time '{0}' is outside the supported calendar range")]
    TimestampOutOfRange(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<::config::ConfigError> for WeatherError {
    fn from(err: ::config::ConfigError) -> Self {
        WeatherError::Config(err.to_string())
    }
}
