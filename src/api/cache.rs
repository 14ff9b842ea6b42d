//! Response cache for completed upstream requests.
//!
//! [`ResponseCache`] is an explicitly constructed value owned by the plugin
//! pane and injected into each screen's fetch path; there is no process-wide
//! cache. The shim consults it before issuing a web request and replays a
//! stored response instead of going back to the network, which makes
//! navigating back to the list instant. Entries are keyed by request URL, so
//! a screen only ever replays its own requests, and screen state itself is
//! never cached: a remounted screen always starts from its loading phase.

use std::collections::HashMap;

/// A completed upstream response, as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Response store keyed by request URL, scoped to one plugin pane.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, CachedResponse>,
}

impl ResponseCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a successful response under its request URL.
    ///
    /// Only 2xx responses are retained; failures must stay replayable by a
    /// remount, which is the user's retry path.
    pub fn store(&mut self, url: &str, status: u16, body: &[u8]) {
        if (200..300).contains(&status) {
            self.entries.insert(
                url.to_string(),
                CachedResponse {
                    status,
                    body: body.to_vec(),
                },
            );
        }
    }

    /// Looks up a previously stored response for the URL.
    #[must_use]
    pub fn lookup(&self, url: &str) -> Option<&CachedResponse> {
        self.entries.get(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_replays_successful_responses() {
        let mut cache = ResponseCache::new();
        cache.store("https://example.test/all", 200, b"[]");

        let hit = cache.lookup("https://example.test/all").unwrap();
        assert_eq!(hit.status, 200);
        assert_eq!(hit.body, b"[]");
    }

    #[test]
    fn does_not_store_failures() {
        let mut cache = ResponseCache::new();
        cache.store("https://example.test/all", 500, b"boom");

        assert!(cache.lookup("https://example.test/all").is_none());
    }

    #[test]
    fn a_fresh_cache_is_empty() {
        let cache = ResponseCache::new();
        assert!(cache.lookup("https://example.test/all").is_none());
    }
}
