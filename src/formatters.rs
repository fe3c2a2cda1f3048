use chrono::{FixedOffset, NaiveDateTime};

use crate::models::Place;
use crate::numeral::{int_to_korean, localized_field, now_at, DayField};
use crate::schema::{FieldId, FieldStore};
use crate::tables::{lookup_compass, lookup_uv_band, lookup_weather_code, Locale};

fn field(store: &FieldStore, id: FieldId) -> &str {
    store.get(id).unwrap_or("-")
}

fn wind_direction(raw: &str, locale: Locale) -> String {
    match raw.trim().parse::<f64>() {
        Ok(degree) if degree.is_finite() => {
            format!("{} ({}\u{00b0})", lookup_compass(degree, locale), raw)
        }
        _ => raw.to_string(),
    }
}

fn uv_index(raw: &str, locale: Locale) -> String {
    match raw.trim().parse::<i32>() {
        Ok(index) => format!("{} ({})", raw, lookup_uv_band(index, locale)),
        Err(_) => raw.to_string(),
    }
}

/// Formats the current conditions held in `store` into a human-readable string
pub fn format_conditions(store: &FieldStore, locale: Locale) -> String {
    let label = |en, ko| locale.pick(en, ko);

    let mut output = format!("{}:\n", label("Current Conditions", "현재 날씨"));
    let lines = [
        (
            label("Conditions", "날씨"),
            lookup_weather_code(field(store, FieldId::WeatherCode), locale).to_string(),
        ),
        (
            label("Temperature", "온도"),
            format!("{}\u{00b0}C", field(store, FieldId::Temperature)),
        ),
        (
            label("Feels like", "체감온도"),
            format!("{}\u{00b0}C", field(store, FieldId::FeelsLike)),
        ),
        (
            label("Humidity", "습도"),
            format!("{}%", field(store, FieldId::Humidity)),
        ),
        (
            label("Wind", "바람"),
            format!(
                "{} km/h {}",
                field(store, FieldId::WindSpeed),
                wind_direction(field(store, FieldId::WindDirection), locale)
            ),
        ),
        (
            label("Precipitation", "강수량"),
            format!("{} mm", field(store, FieldId::Precipitation)),
        ),
        (
            label("Pressure", "기압"),
            format!("{} hPa", field(store, FieldId::Pressure)),
        ),
        (
            label("Cloud cover", "운량"),
            format!("{}%", field(store, FieldId::CloudCover)),
        ),
        (
            label("Visibility", "시정"),
            format!("{} km", field(store, FieldId::Visibility)),
        ),
        (
            label("UV Index", "자외선 지수"),
            uv_index(field(store, FieldId::UvIndex), locale),
        ),
        (
            label("Area", "지역"),
            format!(
                "{}, {}",
                field(store, FieldId::AreaName),
                field(store, FieldId::Country)
            ),
        ),
        (
            label("Coordinates", "좌표"),
            format!(
                "{}, {}",
                field(store, FieldId::Latitude),
                field(store, FieldId::Longitude)
            ),
        ),
        (
            label("Observed", "관측 시각"),
            field(store, FieldId::ObsDateTime).to_string(),
        ),
    ];

    for (name, value) in lines {
        output.push_str(&format!("  {}: {}\n", name, value));
    }
    output
}

/// Formats a geocoded place, skipping empty parts
pub fn format_place(place: &Place, locale: Locale) -> String {
    if place.is_empty() {
        return locale.pick("(no data)", "(정보 없음)").to_string();
    }

    [&place.city, &place.state, &place.country]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a whole-degree temperature in Korean, e.g. "-3" → "영하 삼도".
/// Returns `None` when `raw` is not an integer.
pub fn format_korean_temperature(raw: &str) -> Option<String> {
    let value: i64 = raw.trim().parse().ok()?;
    let magnitude = u32::try_from(value.unsigned_abs()).ok()?;
    let prefix = if value < 0 { "영하 " } else { "" };
    Some(format!("{}{}도", prefix, int_to_korean(magnitude)))
}

/// Formats a timestamp as a Korean date line,
/// e.g. "이천이십오년 오월 이십일 화요일 오후 열두시 십사분".
///
/// Without a timestamp the current time at `offset` is used. The clock is read
/// once so every field comes from the same instant.
pub fn format_korean_time(timestamp: Option<&NaiveDateTime>, offset: FixedOffset) -> String {
    let t = timestamp
        .copied()
        .unwrap_or_else(|| now_at(offset).naive_local());
    let part = |field| localized_field(field, Some(&t), offset);

    format!(
        "{}년 {}월 {}일 {}요일 {} {}시 {}분",
        part(DayField::Year),
        part(DayField::Month),
        part(DayField::Day),
        part(DayField::Weekday),
        part(DayField::AmPm),
        part(DayField::Hour),
        part(DayField::Minute),
    )
}
