/// User agent string for weather requests
pub const USER_AGENT: &str = "wttr-report/0.1.0";

/// User agent string for reverse geocoding requests (Nominatim requires one)
pub const GEOCODER_USER_AGENT: &str = "wttr-report-geocoder/0.1.0";

/// wttr.in base URL
pub const WTTR_API_BASE: &str = "http://wttr.in";

/// Nominatim (OpenStreetMap) base URL
pub const NOMINATIM_API_BASE: &str = "https://nominatim.openstreetmap.org";

/// Per-request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Zoom level passed to Nominatim; 10 resolves to city granularity
pub const GEOCODE_ZOOM: u8 = 10;

/// Stored field values never exceed this many bytes
pub const FIELD_VALUE_CAP: usize = 31;

/// Value a field holds before the first successful parse
pub const FIELD_DEFAULT: &str = "0";

/// Korea Standard Time, in minutes east of UTC
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 9 * 60;
