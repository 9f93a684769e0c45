use super::coordinate::Coordinate;
use parking_lot::Mutex;
use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    coordinate: Coordinate,
    expires_at: Instant,
}

/// In-memory geocode cache keyed by the exact query string.
///
/// Entries expire lazily: a read at or past `expires_at` drops the entry
/// and reports a miss. Safe to share behind an `Arc`.
#[derive(Debug)]
pub struct GeoCache {
    ttl: Duration,
    geocodes: Mutex<HashMap<String, CacheEntry>>,
}

impl Default for GeoCache {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }
}

impl GeoCache {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            geocodes: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get_geocode(&self, query: &str) -> Option<Coordinate> {
        let mut geocodes = self.geocodes.lock();
        let entry = *geocodes.get(query)?;
        if Instant::now() < entry.expires_at {
            return Some(entry.coordinate);
        }
        log::debug!("[CACHE EXPIRED] {}", query);
        geocodes.remove(query);
        None
    }

    pub fn insert_geocode(&self, query: &str, coordinate: Coordinate) {
        let entry = CacheEntry {
            coordinate,
            expires_at: Instant::now() + self.ttl,
        };
        self.geocodes.lock().insert(query.to_string(), entry);
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut geocodes = self.geocodes.lock();
        let before = geocodes.len();
        geocodes.retain(|_, entry| now < entry.expires_at);
        before - geocodes.len()
    }

    pub fn len(&self) -> usize {
        self.geocodes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn paris() -> Coordinate {
        Coordinate::new(48.8566, 2.3522).unwrap()
    }

    #[test]
    fn hit_within_ttl() {
        let cache = GeoCache::default();
        assert_eq!(cache.ttl(), DEFAULT_TTL);
        cache.insert_geocode("Paris", paris());
        assert_eq!(cache.get_geocode("Paris"), Some(paris()));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let cache = GeoCache::default();
        cache.insert_geocode("Paris", paris());
        assert_eq!(cache.get_geocode("paris"), None);
        assert_eq!(cache.get_geocode("Paris "), None);
    }

    #[test]
    fn expired_entry_is_dropped_on_read() {
        let cache = GeoCache::with_ttl(Duration::from_millis(20));
        cache.insert_geocode("Paris", paris());
        thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.get_geocode("Paris"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn purge_removes_only_stale_entries() {
        let cache = GeoCache::with_ttl(Duration::from_millis(20));
        cache.insert_geocode("Paris", paris());
        thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.purge_expired(), 1);
        assert!(cache.is_empty());

        let long_lived = GeoCache::default();
        long_lived.insert_geocode("Paris", paris());
        assert_eq!(long_lived.purge_expired(), 0);
        assert_eq!(long_lived.len(), 1);
    }
}
