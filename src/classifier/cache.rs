use crate::models::CandidateResult;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct CacheEntry {
    result: CandidateResult,
    stored_at: Instant,
}

/// Capacity- and TTL-bounded cache for classifier responses
///
/// Shared across concurrent requests behind a single mutex. Entries expire
/// after the TTL; once the capacity is reached the oldest entry is evicted
/// before a new one is stored.
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    capacity: usize,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity,
            ttl,
        }
    }

    /// Cache key for a classification call
    ///
    /// Candidate labels are sorted so the key does not depend on the order
    /// the engine happened to collect them in.
    pub fn key(description: &str, candidate_labels: &[String]) -> String {
        let mut sorted: Vec<&str> = candidate_labels.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        format!("{}_{}", description, sorted.join(","))
    }

    pub fn get(&self, key: &str) -> Option<CandidateResult> {
        let mut entries = self.entries.lock().ok()?;

        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() <= self.ttl => Some(entry.result.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, key: String, result: CandidateResult) {
        if self.capacity == 0 {
            return;
        }

        let Ok(mut entries) = self.entries.lock() else {
            return;
        };

        let ttl = self.ttl;
        entries.retain(|_, entry| entry.stored_at.elapsed() <= ttl);

        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            CacheEntry {
                result,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: &str) -> CandidateResult {
        CandidateResult {
            labels: vec![label.to_string()],
            scores: vec![0.9],
        }
    }

    #[test]
    fn test_key_is_order_independent() {
        let a = ResponseCache::key(
            "banner ad",
            &["filter/vehicle/juke".to_string(), "language/finnish".to_string()],
        );
        let b = ResponseCache::key(
            "banner ad",
            &["language/finnish".to_string(), "filter/vehicle/juke".to_string()],
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_includes_description() {
        let labels = vec!["language/finnish".to_string()];
        assert_ne!(
            ResponseCache::key("banner ad", &labels),
            ResponseCache::key("print ad", &labels)
        );
    }

    #[test]
    fn test_get_returns_inserted_result() {
        let cache = ResponseCache::new(4, Duration::from_secs(60));
        cache.insert("k".to_string(), result("language/finnish"));

        assert_eq!(cache.get("k"), Some(result("language/finnish")));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn test_expired_entries_are_dropped() {
        let cache = ResponseCache::new(4, Duration::from_millis(10));
        cache.insert("k".to_string(), result("language/finnish"));

        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let cache = ResponseCache::new(2, Duration::from_secs(60));
        cache.insert("first".to_string(), result("a"));
        std::thread::sleep(Duration::from_millis(5));
        cache.insert("second".to_string(), result("b"));
        std::thread::sleep(Duration::from_millis(5));
        cache.insert("third".to_string(), result("c"));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("first"), None);
        assert_eq!(cache.get("second"), Some(result("b")));
        assert_eq!(cache.get("third"), Some(result("c")));
    }

    #[test]
    fn test_reinserting_existing_key_does_not_evict() {
        let cache = ResponseCache::new(2, Duration::from_secs(60));
        cache.insert("first".to_string(), result("a"));
        cache.insert("second".to_string(), result("b"));
        cache.insert("second".to_string(), result("b2"));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("first"), Some(result("a")));
        assert_eq!(cache.get("second"), Some(result("b2")));
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let cache = ResponseCache::new(0, Duration::from_secs(60));
        cache.insert("k".to_string(), result("a"));
        assert!(cache.is_empty());
    }
}
