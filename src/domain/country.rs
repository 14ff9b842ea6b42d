//! Country domain model and record normalization.
//!
//! This module defines the core `Country` type used across the list table, the
//! comparison overlay, and the detail view, plus the normalization step that
//! turns raw API records into it. Normalization is one-to-one and
//! order-preserving: no record is ever dropped or merged, and missing optional
//! source fields become `None` rather than failures.

use crate::api::models::RawCountry;
use crate::domain::metric::GdpEstimator;
use serde::{Deserialize, Serialize};

/// Common and official names of a country, as published by the data source.
///
/// Names are display data only. Membership and equality checks always go
/// through [`Country::code`], since names are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    /// Everyday short name, e.g. "France".
    pub common: String,
    /// Formal long name, e.g. "French Republic".
    pub official: String,
}

/// One nation, normalized from the upstream record.
///
/// The struct is serde-serializable because decoded country lists cross the
/// plugin/worker IPC boundary as JSON.
///
/// # Fields
///
/// - `code` is the stable 3-letter identity key; all selection and lookup
///   logic compares by it and nothing else.
/// - `gdp_estimate` is a synthetic figure derived at normalization time; it
///   exists for the comparison view and carries no authority.
/// - `capital` and `coat_of_arms_png` are only present on records fetched via
///   the detail endpoint; the list endpoint does not include them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    /// 3-letter country code (cca3), unique across the fetched list.
    pub code: String,
    pub region: String,
    pub population: u64,
    /// Surface area in square kilometers, never negative.
    pub area: f64,
    pub flag_png: String,
    pub flag_alt: String,
    /// Derived economic figure, see [`crate::domain::metric`].
    pub gdp_estimate: u64,
    pub capital: Option<String>,
    pub coat_of_arms_png: Option<String>,
}

impl Country {
    /// Normalizes one raw record into a `Country`.
    ///
    /// Identity and display fields are copied verbatim. The capital list
    /// collapses to its first entry, a missing coat-of-arms image stays
    /// absent, and a negative area (the source uses placeholder values for a
    /// few territories) clamps to zero. The derived GDP figure is produced by
    /// the supplied estimator.
    ///
    /// # Parameters
    ///
    /// * `raw` - Record as deserialized from the API payload
    /// * `estimator` - Generator for the derived GDP figure
    #[must_use]
    pub fn from_raw(raw: RawCountry, estimator: &mut dyn GdpEstimator) -> Self {
        let gdp_estimate = estimator.estimate(raw.population);
        Self {
            name: CountryName {
                common: raw.name.common,
                official: raw.name.official,
            },
            code: raw.cca3,
            region: raw.region,
            population: raw.population,
            area: raw.area.max(0.0),
            flag_png: raw.flags.png,
            flag_alt: raw.flags.alt,
            gdp_estimate,
            capital: raw.capital.into_iter().next(),
            coat_of_arms_png: raw.coat_of_arms.png,
        }
    }

    /// Returns true when the country matches a lowercased search needle.
    ///
    /// A country matches iff the needle is a substring of the lowercased
    /// common name, the lowercased code, or the lowercased region. The empty
    /// needle matches everything.
    ///
    /// # Parameters
    ///
    /// * `needle_lower` - Search term, already lowercased by the caller
    #[must_use]
    pub fn matches(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.name.common.to_lowercase().contains(needle_lower)
            || self.code.to_lowercase().contains(needle_lower)
            || self.region.to_lowercase().contains(needle_lower)
    }
}

/// Normalizes a full raw payload into the internal country list.
///
/// The output has exactly the same length and order as the input. Records
/// with missing optional fields normalize without error; only a malformed
/// payload (rejected earlier, at deserialization) can fail, so this function
/// itself is infallible.
///
/// # Parameters
///
/// * `raws` - Deserialized records in source order
/// * `estimator` - Generator for the derived GDP figure, applied per record
#[must_use]
pub fn normalize_countries(
    raws: Vec<RawCountry>,
    estimator: &mut dyn GdpEstimator,
) -> Vec<Country> {
    raws.into_iter()
        .map(|raw| Country::from_raw(raw, estimator))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{RawCoatOfArms, RawFlags, RawName};
    use crate::domain::metric::FixedGdpEstimator;

    fn raw(common: &str, cca3: &str) -> RawCountry {
        RawCountry {
            name: RawName {
                common: common.to_string(),
                official: format!("Republic of {common}"),
            },
            cca3: cca3.to_string(),
            region: "Europe".to_string(),
            population: 10,
            area: 100.0,
            flags: RawFlags {
                png: "https://example.test/flag.png".to_string(),
                alt: "a flag".to_string(),
            },
            capital: vec![],
            coat_of_arms: RawCoatOfArms::default(),
        }
    }

    #[test]
    fn normalization_is_one_to_one_and_order_preserving() {
        let raws = vec![raw("France", "FRA"), raw("Germany", "DEU"), raw("Spain", "ESP")];
        let mut estimator = FixedGdpEstimator(0);

        let countries = normalize_countries(raws, &mut estimator);

        assert_eq!(countries.len(), 3);
        let codes: Vec<&str> = countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["FRA", "DEU", "ESP"]);
    }

    #[test]
    fn missing_optional_fields_become_absent() {
        let mut estimator = FixedGdpEstimator(0);
        let country = Country::from_raw(raw("France", "FRA"), &mut estimator);

        assert_eq!(country.capital, None);
        assert_eq!(country.coat_of_arms_png, None);
    }

    #[test]
    fn capital_collapses_to_first_entry() {
        let mut record = raw("South Africa", "ZAF");
        record.capital = vec!["Pretoria".to_string(), "Cape Town".to_string()];
        let mut estimator = FixedGdpEstimator(0);

        let country = Country::from_raw(record, &mut estimator);

        assert_eq!(country.capital.as_deref(), Some("Pretoria"));
    }

    #[test]
    fn negative_area_clamps_to_zero() {
        let mut record = raw("Nowhere", "NWH");
        record.area = -1.0;
        let mut estimator = FixedGdpEstimator(0);

        let country = Country::from_raw(record, &mut estimator);

        assert_eq!(country.area, 0.0);
    }

    #[test]
    fn matches_by_name_code_and_region_case_insensitively() {
        let mut estimator = FixedGdpEstimator(0);
        let country = Country::from_raw(raw("France", "FRA"), &mut estimator);

        assert!(country.matches(""));
        assert!(country.matches("fran"));
        assert!(country.matches("fra"));
        assert!(country.matches("eur"));
        assert!(!country.matches("asia"));
    }
}
