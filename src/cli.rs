use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::formatters::{
    format_conditions, format_korean_temperature, format_korean_time, format_place,
};
use crate::geocode::Geocoder;
use crate::schema::FieldId;
use crate::service::Weather;
use crate::tables::Locale;

#[derive(Parser, Debug)]
#[command(name = "wttr-report")]
#[command(about = "Current weather and nearest-area report from wttr.in")]
#[command(version)]
pub struct Cli {
    /// Place name (Korean or English), or latitude and longitude as two
    /// arguments. Omit to use the current network location.
    #[arg(num_args = 0..=2, value_name = "LOCATION", allow_negative_numbers = true)]
    pub location: Vec<String>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Configuration file (TOML)")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Location string sent to wttr.in: "", a place name, or "lat,lon"
    pub fn location(&self) -> String {
        match self.location.as_slice() {
            [] => String::new(),
            [place] => place.clone(),
            [lat, lon, ..] => format!("{},{}", lat, lon),
        }
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let offset = config.utc_offset()?;

    let mut weather = Weather::from_config(&config)?;
    weather
        .update(&cli.location())
        .await
        .context("Failed to fetch weather data")?;

    println!("{}", format_conditions(weather.store(), Locale::En));
    println!("{}", format_conditions(weather.store(), Locale::Ko));

    match weather.coordinates() {
        Some((lat, lon)) => {
            let geocoder = Geocoder::with_base_url(config.geocode_url.as_str(), config.timeout())?;
            for (label, locale) in [("Korean", Locale::Ko), ("English", Locale::En)] {
                match geocoder.resolve(lat, lon, locale).await {
                    Ok(place) => println!("{} : {}", label, format_place(&place, locale)),
                    Err(e) => tracing::error!("Reverse geocoding failed: {}", e),
                }
            }
        }
        None => tracing::warn!("Nearest area has no usable coordinates"),
    }

    let feels_like = weather.get(FieldId::FeelsLike).unwrap_or_default();
    if let Some(temperature) = format_korean_temperature(feels_like) {
        println!("체감온도 : {}씨", temperature);
    }

    match weather.observed_at() {
        Ok(observed) => {
            println!("측정시간 : {}", format_korean_time(Some(&observed), offset))
        }
        Err(e) => tracing::warn!("{}", e),
    }
    println!("현재시간 : {}", format_korean_time(None, offset));

    Ok(())
}
