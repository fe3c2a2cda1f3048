use serde::Deserialize;

// ============================================================================
// Nominatim reverse geocoding models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ReverseResponse {
    pub address: Option<Address>,
    pub display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// First present of city, town, village, county
    pub fn locality(&self) -> Option<&str> {
        [&self.city, &self.town, &self.village, &self.county]
            .into_iter()
            .find_map(|candidate| candidate.as_deref())
    }
}

// ============================================================================
// Resolved place
// ============================================================================

/// City, region and country names in one language. Empty strings mean the
/// geocoder had nothing for that coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Place {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl From<Address> for Place {
    fn from(address: Address) -> Self {
        Self {
            city: address.locality().unwrap_or_default().to_string(),
            state: address.state.unwrap_or_default(),
            country: address.country.unwrap_or_default(),
        }
    }
}

impl Place {
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.state.is_empty() && self.country.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locality_prefers_town_over_village() {
        let address = Address {
            town: Some("Suwon".to_string()),
            village: Some("Seryu".to_string()),
            country: Some("South Korea".to_string()),
            ..Default::default()
        };
        assert_eq!(address.locality(), Some("Suwon"));
    }

    #[test]
    fn test_locality_falls_back_to_county() {
        let address = Address {
            county: Some("Yangpyeong-gun".to_string()),
            ..Default::default()
        };
        assert_eq!(address.locality(), Some("Yangpyeong-gun"));
    }

    #[test]
    fn test_place_from_empty_address() {
        let place = Place::from(Address::default());
        assert!(place.is_empty());
    }

    #[test]
    fn test_deserialize_without_address() {
        let response: ReverseResponse =
            serde_json::from_str(r#"{"error":"Unable to geocode"}"#).unwrap();
        assert!(response.address.is_none());
    }
}
