//! Korean numeral and calendar-field rendering.

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::error::{Result, WeatherError};

/// wttr.in `localObsDateTime` format, e.g. "2025-05-20 12:14 PM"
pub const OBS_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M %p";

const DIGITS: [&str; 10] = ["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];
const PLACES: [&str; 4] = ["", "십", "백", "천"];
const GROUPS: [&str; 3] = ["", "만", "억"];

// Native Korean hour words, used when reading a clock
const HOURS: [&str; 13] = [
    "영", "한", "두", "세", "네", "다섯", "여섯", "일곱", "여덟", "아홉", "열", "열한", "열두",
];
const WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Calendar field selector for [`date_to_korean`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayField {
    AmPm,
    Second,
    Minute,
    Hour,
    Weekday,
    Day,
    Month,
    Year,
}

/// Writes `n` as Sino-Korean numerals, e.g. 12345 → "만이천삼백사십오".
///
/// "일" is dropped in front of a place word (10 → "십", 100 → "백",
/// 10000 → "만") but kept in the ones place (1 → "일", 11 → "십일").
pub fn int_to_korean(n: u32) -> String {
    if n == 0 {
        return DIGITS[0].to_string();
    }

    let mut groups = Vec::with_capacity(GROUPS.len());
    let mut rest = n;
    while rest > 0 {
        groups.push(rest % 10_000);
        rest /= 10_000;
    }

    let mut output = String::new();
    for (unit, &group) in groups.iter().enumerate().rev() {
        match group {
            0 => continue,
            1 if unit == 1 => {}
            _ => output.push_str(&group_to_korean(group)),
        }
        output.push_str(GROUPS[unit]);
    }
    output
}

fn group_to_korean(group: u32) -> String {
    let mut output = String::new();
    for place in (0..PLACES.len()).rev() {
        let digit = (group / 10u32.pow(place as u32) % 10) as usize;
        if digit == 0 {
            continue;
        }
        if digit != 1 || place == 0 {
            output.push_str(DIGITS[digit]);
        }
        output.push_str(PLACES[place]);
    }
    output
}

/// Renders one calendar field of `t` in Korean
pub fn date_to_korean<T: Datelike + Timelike>(field: DayField, t: &T) -> String {
    match field {
        DayField::AmPm => {
            let word = if t.hour() < 12 { "오전" } else { "오후" };
            word.to_string()
        }
        DayField::Second => int_to_korean(t.second()),
        DayField::Minute => int_to_korean(t.minute()),
        DayField::Hour => {
            let hour = if t.hour() == 12 { 12 } else { t.hour() % 12 };
            HOURS[hour as usize].to_string()
        }
        DayField::Weekday => {
            WEEKDAYS[t.weekday().num_days_from_sunday() as usize].to_string()
        }
        DayField::Day => int_to_korean(t.day()),
        DayField::Month => int_to_korean(t.month()),
        DayField::Year => int_to_korean(u32::try_from(t.year()).unwrap_or_default()),
    }
}

/// Current wall-clock time at a fixed UTC offset
pub fn now_at(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Renders a field of `timestamp`, or of the current time at `offset` when no
/// timestamp is given.
pub fn localized_field(
    field: DayField,
    timestamp: Option<&NaiveDateTime>,
    offset: FixedOffset,
) -> String {
    match timestamp {
        Some(t) => date_to_korean(field, t),
        None => date_to_korean(field, &now_at(offset)),
    }
}

/// Parses a wttr.in observation time such as "2025-05-20 12:14 PM".
///
/// A day past the end of its month rolls into the next month, so
/// "2025-02-30" reads as March 2nd.
pub fn parse_obs_timestamp(value: &str) -> Result<NaiveDateTime> {
    let invalid = |source: chrono::ParseError| WeatherError::InvalidTimestamp {
        value: value.to_string(),
        source,
    };

    let mut parsed = Parsed::new();
    format::parse(&mut parsed, value.trim(), StrftimeItems::new(OBS_TIMESTAMP_FORMAT))
        .map_err(invalid)?;
    let time = parsed.to_naive_time().map_err(invalid)?;

    let date = match (parsed.year(), parsed.month(), parsed.day()) {
        (Some(year), Some(month), Some(day)) => NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first| first.checked_add_days(Days::new(u64::from(day) - 1))),
        _ => None,
    }
    .ok_or_else(|| WeatherError::TimestampOutOfRange(value.to_string()))?;

    Ok(date.and_time(time))
}
