//! Fills a [`FieldStore`] from a wttr.in JSON document.
//!
//! Parsing is all-or-nothing: values are staged while walking the document
//! and written to the store only after every field was found, so a failed
//! parse leaves the previous values in place.

use serde_json::Value;

use crate::error::{Result, WeatherError};
use crate::schema::{FieldDef, FieldStore, Shape};

/// Parses a raw response body and fills `store`
pub fn parse_str(body: &str, store: &mut FieldStore) -> Result<()> {
    let document: Value = serde_json::from_str(body)?;
    parse(&document, store)
}

/// Fills `store` from an already deserialized document
pub fn parse(document: &Value, store: &mut FieldStore) -> Result<()> {
    let staged = store
        .iter()
        .map(|field| extract(document, field).map(str::to_owned))
        .collect::<Result<Vec<_>>>()?;

    for (field, value) in store.iter_mut().zip(staged) {
        field.set_value(&value);
        tracing::debug!("{} : {}, {}", field.section, field.key, field.value());
    }
    Ok(())
}

fn extract<'a>(document: &'a Value, field: &FieldDef) -> Result<&'a str> {
    let record = document
        .get(field.section.key())
        .and_then(Value::as_array)
        .and_then(|records| records.first())
        .ok_or(WeatherError::NoWeatherData {
            section: field.section,
        })?;

    let missing = || WeatherError::MissingField {
        section: field.section,
        key: field.key,
    };

    let value = match field.shape {
        Shape::Flat => record.get(field.key),
        Shape::FirstValue => record
            .get(field.key)
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .and_then(|item| item.get("value")),
    };

    value.and_then(Value::as_str).ok_or_else(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldId, Section};
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "current_condition": [{
                "FeelsLikeC": "29",
                "FeelsLikeF": "85",
                "cloudcover": "75",
                "humidity": "71",
                "localObsDateTime": "2025-05-20 12:14 PM",
                "observation_time": "03:14 AM",
                "precipInches": "0.0",
                "precipMM": "0.0",
                "pressure": "1010",
                "pressureInches": "30",
                "temp_C": "27",
                "temp_F": "80",
                "uvIndex": "6",
                "visibility": "16",
                "visibilityMiles": "9",
                "weatherCode": "116",
                "weatherDesc": [{ "value": "Partly cloudy" }],
                "weatherIconUrl": [{ "value": "" }],
                "winddir16Point": "SSW",
                "winddirDegree": "209",
                "windspeedKmph": "15",
                "windspeedMiles": "10"
            }],
            "nearest_area": [{
                "areaName": [{ "value": "Seryudong" }],
                "country": [{ "value": "South Korea" }],
                "latitude": "37.266",
                "longitude": "127.048",
                "population": "0",
                "region": [{ "value": "" }],
                "weatherUrl": [{ "value": "" }]
            }]
        })
    }

    #[test]
    fn test_parse_sample() {
        let mut store = FieldStore::wttr();
        parse(&sample(), &mut store).unwrap();

        assert_eq!(store.get(FieldId::Temperature), Some("27"));
        assert_eq!(store.get(FieldId::FeelsLike), Some("29"));
        assert_eq!(store.get(FieldId::WeatherCode), Some("116"));
        assert_eq!(store.get(FieldId::WindDirection), Some("209"));
        assert_eq!(store.get(FieldId::ObsDateTime), Some("2025-05-20 12:14 PM"));
        assert_eq!(store.get(FieldId::AreaName), Some("Seryudong"));
        assert_eq!(store.get(FieldId::Country), Some("South Korea"));
        assert_eq!(store.get(FieldId::Latitude), Some("37.266"));
        assert_eq!(store.get(FieldId::Longitude), Some("127.048"));
    }

    #[test]
    fn test_missing_section_leaves_store_untouched() {
        let mut document = sample();
        document.as_object_mut().unwrap().remove("nearest_area");

        let mut store = FieldStore::wttr();
        let err = parse(&document, &mut store).unwrap_err();

        assert!(matches!(
            err,
            WeatherError::NoWeatherData {
                section: Section::NearestArea
            }
        ));
        assert!(store.iter().all(|field| field.value() == "0"));
    }

    #[test]
    fn test_empty_section_is_no_data() {
        let mut document = sample();
        document["current_condition"] = json!([]);

        let mut store = FieldStore::wttr();
        assert!(matches!(
            parse(&document, &mut store),
            Err(WeatherError::NoWeatherData {
                section: Section::CurrentCondition
            })
        ));
    }

    #[test]
    fn test_failed_parse_keeps_previous_values() {
        let mut store = FieldStore::wttr();
        parse(&sample(), &mut store).unwrap();

        let mut document = sample();
        document["current_condition"][0]["temp_C"] = json!("30");
        document["nearest_area"][0]["country"] = json!([]);

        let err = parse(&document, &mut store).unwrap_err();
        assert!(matches!(
            err,
            WeatherError::MissingField { key: "country", .. }
        ));
        assert_eq!(store.get(FieldId::Temperature), Some("27"));
    }

    #[test]
    fn test_non_string_value_is_missing() {
        let mut document = sample();
        document["current_condition"][0]["humidity"] = json!(71);

        let mut store = FieldStore::wttr();
        assert!(matches!(
            parse(&document, &mut store),
            Err(WeatherError::MissingField { key: "humidity", .. })
        ));
    }

    #[test]
    fn test_long_values_are_truncated() {
        let mut document = sample();
        document["nearest_area"][0]["areaName"] =
            json!([{ "value": "Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch" }]);

        let mut store = FieldStore::wttr();
        parse(&document, &mut store).unwrap();
        assert_eq!(
            store.get(FieldId::AreaName),
            Some("Llanfairpwllgwyngyllgogerychwyr")
        );
    }

    #[test]
    fn test_parse_str_rejects_malformed_body() {
        let mut store = FieldStore::wttr();
        assert!(matches!(
            parse_str("<html>Unknown location</html>", &mut store),
            Err(WeatherError::Malformed(_))
        ));
    }
}
