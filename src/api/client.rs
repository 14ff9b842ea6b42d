//! Request construction for the REST Countries API.
//!
//! [`RestCountriesApi`] is an explicitly constructed value (base URL from
//! plugin configuration) that the shim owns and threads through each screen
//! mount. It never performs I/O itself: it produces [`ApiRequest`]
//! descriptors, and the Zellij host executes them.
//!
//! # Endpoints
//!
//! - List: `{base}/all?fields=name,cca3,region,population,area,flags`
//! - Detail: `{base}/name/{escaped}?fullText=true`, where `{escaped}` is the
//!   URL-escaped common name carried by the navigation request

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Summary fields requested for the list screen.
///
/// The upstream rejects an unfiltered `/all` query, and the list table only
/// ever renders these fields anyway.
const LIST_FIELDS: &str = "name,cca3,region,population,area,flags";

/// A fully-formed upstream request, ready for the host's web-request shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Absolute request URL.
    pub url: String,
}

/// Request factory for the country data source.
///
/// # Example
///
/// ```rust
/// use zatlas::api::RestCountriesApi;
///
/// let api = RestCountriesApi::new(None);
/// let request = api.country_list();
/// assert!(request.url.ends_with("fields=name,cca3,region,population,area,flags"));
/// ```
#[derive(Debug, Clone)]
pub struct RestCountriesApi {
    base_url: String,
}

impl RestCountriesApi {
    /// Creates a request factory for the given base URL.
    ///
    /// `None` selects [`DEFAULT_BASE_URL`]. A trailing slash on the supplied
    /// base is tolerated and stripped.
    #[must_use]
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    /// Builds the request for the full country list.
    #[must_use]
    pub fn country_list(&self) -> ApiRequest {
        ApiRequest {
            url: format!("{}/all?fields={LIST_FIELDS}", self.base_url),
        }
    }

    /// Builds the exact-name detail lookup request.
    ///
    /// # Parameters
    ///
    /// * `escaped_name` - URL-escaped common name, as carried by the
    ///   navigation request
    #[must_use]
    pub fn country_by_name(&self, escaped_name: &str) -> ApiRequest {
        ApiRequest {
            url: format!("{}/name/{escaped_name}?fullText=true", self.base_url),
        }
    }
}

impl Default for RestCountriesApi {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Escapes a country name for use as a URL path segment.
///
/// Unreserved characters (RFC 3986: alphanumerics plus `-._~`) pass through;
/// everything else is percent-encoded byte-wise, so multi-byte UTF-8 names
/// like "Côte d'Ivoire" escape correctly.
#[must_use]
pub fn percent_encode(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                escaped.push(byte as char);
            }
            _ => escaped.push_str(&format!("%{byte:02X}")),
        }
    }
    escaped
}

/// Reverses [`percent_encode`] for display purposes.
///
/// Malformed escape sequences are kept verbatim rather than rejected; the
/// result is only ever shown to the user.
#[must_use]
pub fn percent_decode(escaped: &str) -> String {
    let bytes = escaped.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
            ) {
                decoded.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(decoded).unwrap_or_else(|_| escaped.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_request_names_the_summary_fields() {
        let api = RestCountriesApi::new(None);
        assert_eq!(
            api.country_list().url,
            "https://restcountries.com/v3.1/all?fields=name,cca3,region,population,area,flags"
        );
    }

    #[test]
    fn detail_request_uses_full_text_lookup() {
        let api = RestCountriesApi::new(Some("https://mirror.test/v3.1/".to_string()));
        assert_eq!(
            api.country_by_name("France").url,
            "https://mirror.test/v3.1/name/France?fullText=true"
        );
    }

    #[test]
    fn encoding_round_trips_names_with_spaces_and_accents() {
        for name in ["France", "United Kingdom", "Côte d'Ivoire", "São Tomé and Príncipe"] {
            let escaped = percent_encode(name);
            assert!(!escaped.contains(' '));
            assert_eq!(percent_decode(&escaped), name);
        }
    }

    #[test]
    fn encoding_escapes_reserved_characters() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("a/b"), "a%2Fb");
    }

    #[test]
    fn decoding_keeps_malformed_sequences_verbatim() {
        assert_eq!(percent_decode("50%"), "50%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }
}
