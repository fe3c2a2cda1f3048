//! Static code tables: compass points, wttr.in weather codes and UV bands,
//! each labelled in English and Korean.

/// Output language for table lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    /// Language tag sent as `accept-language`
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    /// Chooses between an English and a Korean label
    pub fn pick(self, en: &'static str, ko: &'static str) -> &'static str {
        match self {
            Locale::En => en,
            Locale::Ko => ko,
        }
    }
}

const COMPASS: [(&str, &str); 16] = [
    ("N", "북"),
    ("NNE", "북북동"),
    ("NE", "북동"),
    ("ENE", "동북동"),
    ("E", "동"),
    ("ESE", "동남동"),
    ("SE", "남동"),
    ("SSE", "남남동"),
    ("S", "남"),
    ("SSW", "남남서"),
    ("SW", "남서"),
    ("WSW", "서남서"),
    ("W", "서"),
    ("WNW", "서북서"),
    ("NW", "북서"),
    ("NNW", "북북서"),
];

/// Bucket a heading into one of 16 arcs of 22.5°, centred on the compass points.
///
/// Headings outside `[0, 360)` wrap, so 360° and -22.5° land where 0° and
/// 337.5° do.
pub fn compass_index(degree: f64) -> usize {
    let normalized = degree.rem_euclid(360.0);
    ((normalized + 11.25) / 22.5).floor() as usize % COMPASS.len()
}

/// Converts a wind heading in degrees to a compass point label
pub fn lookup_compass(degree: f64, locale: Locale) -> &'static str {
    let (en, ko) = COMPASS[compass_index(degree)];
    locale.pick(en, ko)
}

/// Every documented wttr.in (WorldWeatherOnline) condition code.
pub const WEATHER_CODES: [(&str, &str, &str); 48] = [
    ("113", "Clear", "맑음"),
    ("116", "Partly Cloudy", "부분적으로 흐림"),
    ("119", "Cloudy", "흐림"),
    ("122", "Overcast", "매우 흐림"),
    ("143", "Mist", "안개"),
    ("176", "Patchy rain", "가벼운 비"),
    ("179", "Patchy snow", "가벼운 눈비"),
    ("182", "Patchy sleet", "가벼운 비와 눈"),
    ("185", "Patchy freezing drizzle", "얕은 비"),
    ("200", "Thundery outbreaks", "천둥"),
    ("227", "Blowing snow", "가벼운 눈"),
    ("230", "Blizzard", "강한 눈"),
    ("248", "Fog", "안개"),
    ("260", "Freezing fog", "서리 낀 안개"),
    ("263", "Patchy light drizzle", "가벼운 이슬비"),
    ("266", "Light drizzle", "약한 이슬비"),
    ("281", "Freezing drizzle", "얕은 이슬비"),
    ("284", "Heavy freezing drizzle", "강한 이슬비"),
    ("293", "Patchy light rain", "가벼운 비"),
    ("296", "Light rain", "약한 비"),
    ("299", "Moderate rain at times", "가벼운 비"),
    ("302", "Moderate rain", "강한 비"),
    ("305", "Heavy rain at times", "소나기"),
    ("308", "Heavy rain", "강한 소나기"),
    ("311", "Light freezing rain", "가벼운 비와 눈"),
    ("314", "Moderate or Heavy freezing rain", "강한 비와 눈"),
    ("317", "Light sleet", "비와 진눈깨비"),
    ("320", "Moderate or Heavy sleet", "가벼운 진눈깨비"),
    ("323", "Patchy light snow", "가벼운 눈"),
    ("326", "Light snow", "가끔 눈"),
    ("329", "Patchy moderate snow", "많은 눈"),
    ("332", "Moderate snow", "강한 눈"),
    ("335", "Patchy heavy snow", "눈보라"),
    ("338", "Heavy snow", "강한 눈보라"),
    ("350", "Ice pellets", "우박"),
    ("353", "Light rain shower", "약한 소나기"),
    ("356", "Moderate or heavy rain shower", "강한 소나기"),
    ("359", "Torrential rain shower", "매우 강한 소나기"),
    ("362", "Light sleet showers", "소나기와 눈"),
    ("365", "Moderate or heavy sleet showers", "강한 소나기와 눈"),
    ("368", "Light snow showers", "가끔 눈"),
    ("371", "Moderate or heavy snow showers", "강한 눈"),
    ("374", "Light showers of ice pellets", "눈 소나기"),
    ("377", "Showers of ice pellets", "진눈깨비"),
    ("386", "Patchy light rain with thunder", "약한 천둥"),
    ("389", "Moderate or heavy rain with thunder", "천둥과 비"),
    ("392", "Patchy light snow with thunder", "천둥과 눈"),
    ("395", "Moderate or heavy snow with thunder", "강한 천둥과 눈"),
];

/// Converts a wttr.in weather code to a description; unknown codes never error
pub fn lookup_weather_code(code: &str, locale: Locale) -> &'static str {
    let code = code.trim();
    WEATHER_CODES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|&(_, en, ko)| locale.pick(en, ko))
        .unwrap_or_else(|| locale.pick("Unknown", "알 수 없음"))
}

/// UV index hazard band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvBand {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvBand {
    /// Negative indices are treated as Low rather than falling into Extreme.
    pub fn from_index(index: i32) -> Self {
        match index {
            i32::MIN..=2 => Self::Low,
            3..=5 => Self::Moderate,
            6..=7 => Self::High,
            8..=10 => Self::VeryHigh,
            _ => Self::Extreme,
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Low => locale.pick("Low", "낮음"),
            Self::Moderate => locale.pick("Moderate", "보통"),
            Self::High => locale.pick("High", "높음"),
            Self::VeryHigh => locale.pick("Very High", "매우 높음"),
            Self::Extreme => locale.pick("Extreme", "매우 위험함"),
        }
    }
}

/// Converts a UV index to its hazard band label
pub fn lookup_uv_band(index: i32, locale: Locale) -> &'static str {
    UvBand::from_index(index).label(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_cardinal_points() {
        assert_eq!(lookup_compass(0.0, Locale::En), "N");
        assert_eq!(lookup_compass(90.0, Locale::En), "E");
        assert_eq!(lookup_compass(180.0, Locale::En), "S");
        assert_eq!(lookup_compass(270.0, Locale::En), "W");
        assert_eq!(lookup_compass(270.0, Locale::Ko), "서");
    }

    #[test]
    fn test_compass_wraps_at_full_circle() {
        assert_eq!(lookup_compass(360.0, Locale::En), "N");
        assert_eq!(lookup_compass(348.75, Locale::En), "N");
        assert_eq!(lookup_compass(348.74, Locale::En), "NNW");
        assert_eq!(lookup_compass(-10.0, Locale::En), "N");
        assert_eq!(lookup_compass(720.0 + 45.0, Locale::En), "NE");
    }

    #[test]
    fn test_compass_bucket_boundaries() {
        assert_eq!(lookup_compass(11.24, Locale::En), "N");
        assert_eq!(lookup_compass(11.25, Locale::En), "NNE");
        assert_eq!(lookup_compass(11.26, Locale::En), "NNE");
        assert_eq!(lookup_compass(33.74, Locale::En), "NNE");
        assert_eq!(lookup_compass(33.75, Locale::En), "NE");
    }

    #[test]
    fn test_compass_every_degree_has_a_bucket() {
        for tenth in 0..3600 {
            let index = compass_index(f64::from(tenth) / 10.0);
            assert!(index < 16, "degree {} mapped to {}", tenth, index);
        }
    }

    #[test]
    fn test_sample_wind_direction() {
        assert_eq!(lookup_compass(209.0, Locale::En), "SSW");
        assert_eq!(lookup_compass(209.0, Locale::Ko), "남남서");
    }

    #[test]
    fn test_weather_codes_are_all_mapped() {
        let documented = [
            "113", "116", "119", "122", "143", "176", "179", "182", "185", "200", "227", "230",
            "248", "260", "263", "266", "281", "284", "293", "296", "299", "302", "305", "308",
            "311", "314", "317", "320", "323", "326", "329", "332", "335", "338", "350", "353",
            "356", "359", "362", "365", "368", "371", "374", "377", "386", "389", "392", "395",
        ];
        assert_eq!(documented.len(), 48);
        for code in documented {
            assert_ne!(lookup_weather_code(code, Locale::En), "Unknown", "code {}", code);
            assert_ne!(lookup_weather_code(code, Locale::Ko), "알 수 없음", "code {}", code);
        }
    }

    #[test]
    fn test_weather_code_unknown() {
        assert_eq!(lookup_weather_code("999", Locale::En), "Unknown");
        assert_eq!(lookup_weather_code("999", Locale::Ko), "알 수 없음");
        assert_eq!(lookup_weather_code("", Locale::En), "Unknown");
    }

    #[test]
    fn test_weather_code_partly_cloudy() {
        assert_eq!(lookup_weather_code("116", Locale::En), "Partly Cloudy");
        assert_eq!(lookup_weather_code("116", Locale::Ko), "부분적으로 흐림");
    }

    #[test]
    fn test_uv_bands() {
        let expected = [
            (0, "Low"),
            (2, "Low"),
            (3, "Moderate"),
            (5, "Moderate"),
            (6, "High"),
            (7, "High"),
            (8, "Very High"),
            (10, "Very High"),
            (11, "Extreme"),
        ];
        for (index, label) in expected {
            assert_eq!(lookup_uv_band(index, Locale::En), label, "uv {}", index);
        }
    }

    #[test]
    fn test_uv_negative_is_low() {
        assert_eq!(UvBand::from_index(-1), UvBand::Low);
        assert_eq!(lookup_uv_band(-5, Locale::Ko), "낮음");
    }
}
