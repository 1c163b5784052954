//! Search location targeting.
//!
//! SerpApi accepts a free-text `location` such as `"Kolkata, West Bengal, India"`.
//! This module composes that string from a state and city of the built-in
//! India catalogue, and maps the supported country names onto `gl` codes.

mod catalogue;

pub use catalogue::{COUNTRIES, INDIA_STATES_CITIES};

use crate::error_handling::InputError;

const ALL_INDIA: &str = "All India";
const ALL_CITIES: &str = "All Cities";
const INDIA: &str = "India";

/// Composes a location string from an optional state and city.
///
/// - no state: `"India"` (a state of `"All India"` is the same)
/// - state only (or city `"All Cities"`): `"<State>, India"`
/// - state and city: `"<City>, <State>, India"`
///
/// States are matched case-insensitively against the catalogue and reported
/// with their canonical spelling. Cities outside the catalogue are accepted as
/// custom cities and title-cased.
///
/// # Errors
///
/// `InputError::UnknownState` for a state not in the catalogue,
/// `InputError::CityWithoutState` for a city given without a state.
pub fn compose_india_location(
    state: Option<&str>,
    city: Option<&str>,
) -> Result<String, InputError> {
    let state = state.map(str::trim).filter(|s| !s.is_empty());
    let city = city
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CITIES));

    let state = match state {
        None => {
            return match city {
                Some(_) => Err(InputError::CityWithoutState),
                None => Ok(INDIA.to_string()),
            };
        }
        Some(s) if s.eq_ignore_ascii_case(ALL_INDIA) => {
            return match city {
                Some(_) => Err(InputError::CityWithoutState),
                None => Ok(INDIA.to_string()),
            };
        }
        Some(s) => s,
    };

    let (state_name, cities) = INDIA_STATES_CITIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(state))
        .ok_or_else(|| InputError::UnknownState(state.to_string()))?;

    match city {
        None => Ok(format!("{state_name}, {INDIA}")),
        Some(city) => {
            let city_name = cities
                .iter()
                .find(|known| known.eq_ignore_ascii_case(city))
                .map(|known| known.to_string())
                .unwrap_or_else(|| title_case(city));
            Ok(format!("{city_name}, {state_name}, {INDIA}"))
        }
    }
}

/// Resolves a country given as a name (`"United States"`) or a code (`"us"`)
/// to its lower-case `gl` code.
pub fn country_code(country: &str) -> String {
    let country = country.trim();
    COUNTRIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(country))
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| country.to_lowercase())
}

/// Location used when none is given: the country's display name, if known.
pub fn default_location(country_code: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|(_, code)| code.eq_ignore_ascii_case(country_code))
        .map(|(name, _)| *name)
}

fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_state_is_all_india() {
        assert_eq!(compose_india_location(None, None).unwrap(), "India");
        assert_eq!(
            compose_india_location(Some("All India"), None).unwrap(),
            "India"
        );
    }

    #[test]
    fn test_state_only() {
        assert_eq!(
            compose_india_location(Some("west bengal"), None).unwrap(),
            "West Bengal, India"
        );
        assert_eq!(
            compose_india_location(Some("Goa"), Some("All Cities")).unwrap(),
            "Goa, India"
        );
    }

    #[test]
    fn test_state_and_catalogue_city() {
        assert_eq!(
            compose_india_location(Some("West Bengal"), Some("kolkata")).unwrap(),
            "Kolkata, West Bengal, India"
        );
    }

    #[test]
    fn test_custom_city_is_title_cased() {
        assert_eq!(
            compose_india_location(Some("Karnataka"), Some("  udupi town ")).unwrap(),
            "Udupi Town, Karnataka, India"
        );
    }

    #[test]
    fn test_unknown_state_rejected() {
        assert_eq!(
            compose_india_location(Some("Atlantis"), None),
            Err(InputError::UnknownState("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_city_without_state_rejected() {
        assert_eq!(
            compose_india_location(None, Some("Pune")),
            Err(InputError::CityWithoutState)
        );
    }

    #[test]
    fn test_country_code_from_name_or_code() {
        assert_eq!(country_code("India"), "in");
        assert_eq!(country_code("united kingdom"), "uk");
        assert_eq!(country_code("US"), "us");
        assert_eq!(country_code("de"), "de");
    }

    #[test]
    fn test_default_location() {
        assert_eq!(default_location("in"), Some("India"));
        assert_eq!(default_location("AU"), Some("Australia"));
        assert_eq!(default_location("de"), None);
    }

    #[test]
    fn test_catalogue_cities_are_non_empty() {
        for (state, cities) in INDIA_STATES_CITIES {
            assert!(!cities.is_empty(), "{state} has no cities");
        }
    }
}
