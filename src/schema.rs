//! Declarative list of the wttr.in fields we extract, and the store holding
//! their last parsed values.

use std::collections::HashSet;
use std::fmt;

use crate::constants::{FIELD_DEFAULT, FIELD_VALUE_CAP};

/// Top-level arrays of a wttr.in `format=j1` document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    CurrentCondition,
    NearestArea,
    Request,
    Weather,
}

impl Section {
    pub fn key(self) -> &'static str {
        match self {
            Section::CurrentCondition => "current_condition",
            Section::NearestArea => "nearest_area",
            Section::Request => "request",
            Section::Weather => "weather",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Stable identifiers for extracted fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    // current_condition
    FeelsLike,
    CloudCover,
    Humidity,
    ObsDateTime,
    Precipitation,
    Pressure,
    Temperature,
    UvIndex,
    Visibility,
    WeatherCode,
    WindDirection,
    WindSpeed,

    // nearest_area
    AreaName,
    Country,
    Latitude,
    Longitude,
}

/// Where the value sits inside a section record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `"key": "value"`
    Flat,
    /// `"key": [ { "value": "..." } ]`
    FirstValue,
}

#[derive(Debug, Clone)]
pub struct FieldDef {
    pub id: FieldId,
    pub section: Section,
    pub key: &'static str,
    pub shape: Shape,
    value: String,
}

impl FieldDef {
    pub fn new(id: FieldId, section: Section, key: &'static str, shape: Shape) -> Self {
        Self {
            id,
            section,
            key,
            shape,
            value: FIELD_DEFAULT.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        self.value = truncate_to_cap(value).to_string();
    }
}

/// Cuts `value` to at most [`FIELD_VALUE_CAP`] bytes without splitting a character
pub fn truncate_to_cap(value: &str) -> &str {
    if value.len() <= FIELD_VALUE_CAP {
        return value;
    }
    let mut end = FIELD_VALUE_CAP;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Ordered field definitions with their current values
#[derive(Debug, Clone)]
pub struct FieldStore {
    fields: Vec<FieldDef>,
}

impl FieldStore {
    /// # Panics
    ///
    /// Panics if two definitions share an identifier.
    pub fn new(fields: Vec<FieldDef>) -> Self {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            assert!(seen.insert(field.id), "duplicate field id {:?}", field.id);
        }
        Self { fields }
    }

    /// The fields read from a wttr.in `format=j1` response
    pub fn wttr() -> Self {
        use FieldId::*;
        use Section::{CurrentCondition, NearestArea};
        use Shape::{FirstValue, Flat};

        Self::new(vec![
            FieldDef::new(FeelsLike, CurrentCondition, "FeelsLikeC", Flat),
            FieldDef::new(CloudCover, CurrentCondition, "cloudcover", Flat),
            FieldDef::new(Humidity, CurrentCondition, "humidity", Flat),
            FieldDef::new(ObsDateTime, CurrentCondition, "localObsDateTime", Flat),
            FieldDef::new(Precipitation, CurrentCondition, "precipMM", Flat),
            FieldDef::new(Pressure, CurrentCondition, "pressure", Flat),
            FieldDef::new(Temperature, CurrentCondition, "temp_C", Flat),
            FieldDef::new(UvIndex, CurrentCondition, "uvIndex", Flat),
            FieldDef::new(Visibility, CurrentCondition, "visibility", Flat),
            FieldDef::new(WeatherCode, CurrentCondition, "weatherCode", Flat),
            FieldDef::new(WindDirection, CurrentCondition, "winddirDegree", Flat),
            FieldDef::new(WindSpeed, CurrentCondition, "windspeedKmph", Flat),
            FieldDef::new(Latitude, NearestArea, "latitude", Flat),
            FieldDef::new(Longitude, NearestArea, "longitude", Flat),
            FieldDef::new(AreaName, NearestArea, "areaName", FirstValue),
            FieldDef::new(Country, NearestArea, "country", FirstValue),
        ])
    }

    /// Returns `None` only when `id` is not part of this schema
    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(FieldDef::value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut FieldDef> {
        self.fields.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
