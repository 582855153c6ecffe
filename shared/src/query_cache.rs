//! Keyed response cache behind every page fetch.
//!
//! Keys are request paths. Invalidation works on path prefixes at segment
//! boundaries, so invalidating `/api/admin` also marks `/api/admin/users`
//! stale but leaves `/api/administrators` alone.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
struct CacheEntry {
    value: Value,
    fetched_at_ms: f64,
    stale: bool,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryCache {
    entries: HashMap<String, CacheEntry>,
}

pub fn key_matches(prefix: &str, key: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match key.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|e| &e.value)
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get_raw(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                log::debug!("cached {} does not match requested type: {}", key, e);
                None
            }
        }
    }

    /// Fresh entries are served without refetching.
    pub fn is_fresh(&self, key: &str, now_ms: f64, stale_after_ms: f64) -> bool {
        self.entries
            .get(key)
            .map_or(false, |e| !e.stale && now_ms - e.fetched_at_ms < stale_after_ms)
    }

    pub fn set_raw(&mut self, key: &str, value: Value, now_ms: f64) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                fetched_at_ms: now_ms,
                stale: false,
            },
        );
    }

    /// Edits a cached object in place, keeping its freshness. Returns false
    /// when nothing is cached under `key`.
    pub fn update_raw<F>(&mut self, key: &str, edit: F) -> bool
    where
        F: FnOnce(&mut Value),
    {
        match self.entries.get_mut(key) {
            Some(entry) => {
                edit(&mut entry.value);
                true
            }
            None => false,
        }
    }

    /// Marks every key under `prefix` stale and returns them.
    pub fn invalidate(&mut self, prefix: &str) -> Vec<String> {
        let mut hit: Vec<String> = self
            .entries
            .iter_mut()
            .filter(|(k, _)| key_matches(prefix, k))
            .map(|(k, e)| {
                e.stale = true;
                k.clone()
            })
            .collect();
        hit.sort();
        log::debug!("invalidated {} ({} entries)", prefix, hit.len());
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use serde_json::json;

    #[test]
    fn prefix_matching_respects_segments() {
        assert!(key_matches("/api/admin", "/api/admin"));
        assert!(key_matches("/api/admin/", "/api/admin/users"));
        assert!(key_matches("/api/withdrawals", "/api/withdrawals?page=2"));
        assert!(!key_matches("/api/admin", "/api/administrators"));
        assert!(!key_matches("/api/admin/users", "/api/admin"));
    }

    #[test]
    fn freshness_and_invalidation() {
        let mut cache = QueryCache::new();
        cache.set_raw("/api/admin/users", json!([]), 1000.0);
        cache.set_raw("/api/admin/stats", json!({}), 1000.0);
        cache.set_raw("/api/auth/user", json!({"id": "1"}), 1000.0);

        assert!(cache.is_fresh("/api/admin/users", 5000.0, 30_000.0));
        assert!(!cache.is_fresh("/api/admin/users", 40_000.0, 30_000.0));
        assert!(!cache.is_fresh("/api/missing", 1000.0, 30_000.0));

        let hit = cache.invalidate("/api/admin");
        assert_eq!(hit, vec!["/api/admin/stats".to_string(), "/api/admin/users".to_string()]);
        assert!(!cache.is_fresh("/api/admin/users", 1001.0, 30_000.0));
        assert!(cache.is_fresh("/api/auth/user", 1001.0, 30_000.0));
        // stale entries still serve while a refetch runs
        assert!(cache.get_raw("/api/admin/users").is_some());
    }

    #[test]
    fn typed_round_trip_and_in_place_edit() {
        let mut cache = QueryCache::new();
        let user = User { id: "7".into(), balance: 10.0, ..Default::default() };
        cache.set_raw("/api/auth/user", serde_json::to_value(&user).unwrap(), 0.0);

        let merged = cache.update_raw("/api/auth/user", |v| {
            v["balance"] = json!(260.0);
            v["adsWatchedToday"] = json!(3);
        });
        assert!(merged);
        let cached: User = cache.get("/api/auth/user").unwrap();
        assert_eq!(cached.balance, 260.0);
        assert_eq!(cached.ads_watched_today, 3);
        assert!(!cache.update_raw("/api/nothing", |_| {}));
    }

    #[test]
    fn mismatched_type_yields_none() {
        let mut cache = QueryCache::new();
        cache.set_raw("/api/app-stats", json!("oops"), 0.0);
        assert!(cache.get::<User>("/api/app-stats").is_none());
    }
}
