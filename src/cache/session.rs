//! Process-scoped session store
//!
//! All `SessionCache` instances share one map for the lifetime of the process,
//! laid out as namespace → word → inflection set. Two caches opened with the
//! same `key` option see each other's entries.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::debug;

use super::{namespace_from, CacheOptions, InflectionCache};
use crate::InflectionSet;

type SessionState = HashMap<String, HashMap<String, InflectionSet>>;

static SESSION: Lazy<Mutex<SessionState>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Cache backed by process session state
#[derive(Debug, Clone)]
pub struct SessionCache {
    namespace: String,
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new(&CacheOptions::new())
    }
}

impl SessionCache {
    /// Creates a session cache; the `key` option selects the namespace
    pub fn new(options: &CacheOptions) -> Self {
        Self {
            namespace: namespace_from(options),
        }
    }

    /// Namespace this cache reads and writes
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl InflectionCache for SessionCache {
    fn connect(&mut self) -> bool {
        true
    }

    fn get(&self, key: &str) -> Option<InflectionSet> {
        let session = match SESSION.lock() {
            Ok(session) => session,
            Err(_) => {
                debug!(namespace = %self.namespace, "Session store poisoned, treating as miss");
                return None;
            }
        };
        session.get(&self.namespace)?.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &InflectionSet) -> bool {
        let Ok(mut session) = SESSION.lock() else {
            return false;
        };
        session
            .entry(self.namespace.clone())
            .or_default()
            .insert(key.to_string(), value.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The session map is shared by every test in the process, so each test
    // uses its own namespace.
    fn cache(namespace: &str) -> SessionCache {
        let mut options = CacheOptions::new();
        options.insert("key".to_string(), namespace.to_string());
        SessionCache::new(&options)
    }

    fn forms(words: &[&str]) -> InflectionSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_default_namespace() {
        assert_eq!(SessionCache::default().namespace(), super::super::DEFAULT_NAMESPACE);
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let cache = cache("session_missing_key");
        assert!(cache.get("ничего").is_none());
    }

    #[test]
    fn test_set_then_get_preserves_order() {
        let mut cache = cache("session_round_trip");
        let value = forms(&["книга", "книги", "книге", "книгу", "книгой", "книге"]);
        assert!(cache.connect());
        assert!(cache.set("книга", &value));
        assert_eq!(cache.get("книга"), Some(value));
    }

    #[test]
    fn test_empty_set_is_distinct_from_missing() {
        let mut cache = cache("session_empty_value");
        assert!(cache.set("пусто", &InflectionSet::new()));
        assert_eq!(cache.get("пусто"), Some(InflectionSet::new()));
    }

    #[test]
    fn test_set_overwrites_existing_entry() {
        let mut cache = cache("session_overwrite");
        cache.set("окно", &forms(&["first"]));
        cache.set("окно", &forms(&["second"]));
        assert_eq!(cache.get("окно"), Some(forms(&["second"])));
    }

    #[test]
    fn test_namespaces_are_isolated_but_shared_across_instances() {
        let mut writer = cache("session_ns_a");
        writer.set("лес", &forms(&["лес"]));

        let reader_same = cache("session_ns_a");
        let reader_other = cache("session_ns_b");
        assert_eq!(reader_same.get("лес"), Some(forms(&["лес"])));
        assert!(reader_other.get("лес").is_none());
    }
}
