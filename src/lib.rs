//! Current weather from wttr.in with reverse-geocoded location names.
//!
//! Extracts a fixed set of fields from the `format=j1` JSON response and
//! renders wind direction, weather codes, UV index, numbers and dates in
//! English or Korean.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod geocode;
pub mod models;
pub mod numeral;
pub mod parser;
pub mod schema;
pub mod service;
pub mod tables;

pub use crate::config::Config;
pub use crate::error::{Result, WeatherError};
pub use crate::geocode::Geocoder;
pub use crate::models::Place;
pub use crate::schema::{FieldId, FieldStore, Section};
pub use crate::service::{encode_location, Weather};
pub use crate::tables::Locale;
