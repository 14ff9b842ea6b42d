//! Raw payload record types for the REST Countries API.
//!
//! These types mirror the JSON shape of the upstream responses and exist only
//! at the decode boundary; everything past the worker's normalization step
//! works with [`crate::domain::Country`] instead. Keeping the two apart means
//! upstream schema quirks (nested objects, optional arrays) never leak into
//! the state machine.
//!
//! All optional upstream fields use `#[serde(default)]` so a record that
//! omits them deserializes cleanly rather than failing the whole payload.

use serde::{Deserialize, Serialize};

/// One country record as returned by the upstream API.
///
/// The list endpoint is asked for exactly the summary fields; the detail
/// endpoint additionally returns `capital` and `coatOfArms`, which default to
/// empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCountry {
    pub name: RawName,
    pub cca3: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub flags: RawFlags,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default, rename = "coatOfArms")]
    pub coat_of_arms: RawCoatOfArms,
}

/// Nested name object of a raw record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Flag image references of a raw record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFlags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub alt: String,
}

/// Coat-of-arms image references of a raw record.
///
/// The upstream serves `{}` for countries without one, so every field
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCoatOfArms {
    #[serde(default)]
    pub png: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_list_record() {
        let payload = r#"[{
            "name": {"common": "France", "official": "French Republic"},
            "cca3": "FRA",
            "region": "Europe",
            "population": 67391582,
            "area": 551695.0,
            "flags": {"png": "https://flagcdn.com/w320/fr.png", "alt": "The flag of France"}
        }]"#;

        let records: Vec<RawCountry> = serde_json::from_str(payload).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.common, "France");
        assert_eq!(records[0].cca3, "FRA");
        assert_eq!(records[0].population, 67_391_582);
        assert!(records[0].capital.is_empty());
        assert_eq!(records[0].coat_of_arms.png, None);
    }

    #[test]
    fn deserializes_a_detail_record_with_optionals() {
        let payload = r#"{
            "name": {"common": "France", "official": "French Republic"},
            "cca3": "FRA",
            "region": "Europe",
            "population": 67391582,
            "area": 551695.0,
            "flags": {"png": "https://flagcdn.com/w320/fr.png", "alt": "The flag of France"},
            "capital": ["Paris"],
            "coatOfArms": {"png": "https://mainfacts.com/media/images/coats_of_arms/fr.png"}
        }"#;

        let record: RawCountry = serde_json::from_str(payload).unwrap();
        assert_eq!(record.capital, vec!["Paris".to_string()]);
        assert!(record.coat_of_arms.png.is_some());
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let payload = r#"{"name": {"common": "Atlantis"}, "cca3": "ATL"}"#;

        let record: RawCountry = serde_json::from_str(payload).unwrap();
        assert_eq!(record.region, "");
        assert_eq!(record.population, 0);
        assert_eq!(record.flags.png, "");
    }
}
