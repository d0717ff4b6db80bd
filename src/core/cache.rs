use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;

/// In-memory TTL cache for upstream JSON payloads.
///
/// When full, an expired entry is evicted first, otherwise the entry closest
/// to expiry.
#[derive(Clone)]
pub struct CacheManager {
    enabled: bool,
    capacity: usize,
    store: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

impl CacheManager {
    pub fn new(enabled: bool, capacity: u64) -> Self {
        Self {
            enabled: enabled && capacity > 0,
            capacity: capacity as usize,
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn disabled() -> Self {
        Self::new(false, 0)
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        if !self.enabled {
            return None;
        }

        {
            let guard = self.store.read().await;
            match guard.get(key) {
                Some(entry) if Instant::now() <= entry.expires_at => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        self.store.write().await.remove(key);
        None
    }

    pub async fn insert(&self, key: String, value: Value, ttl_seconds: u64) {
        if !self.enabled || ttl_seconds == 0 {
            return;
        }

        let now = Instant::now();
        let expires_at = now + Duration::from_secs(ttl_seconds);
        let mut guard = self.store.write().await;

        if guard.len() >= self.capacity && !guard.contains_key(&key) {
            let victim = guard
                .iter()
                .find(|(_, entry)| entry.expires_at <= now)
                .or_else(|| guard.iter().min_by_key(|(_, entry)| entry.expires_at))
                .map(|(k, _)| k.clone());
            if let Some(victim) = victim {
                guard.remove(&victim);
            }
        }

        guard.insert(key, CacheEntry { value, expires_at });
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn disabled_cache_never_stores() {
        let cache = CacheManager::disabled();
        cache.insert("bills".to_string(), json!({"bills": []}), 60).await;

        assert!(cache.get("bills").await.is_none());
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn returns_stored_value_until_expiry() {
        let cache = CacheManager::new(true, 4);
        cache.insert("bills".to_string(), json!({"count": 1}), 60).await;

        assert_eq!(cache.get("bills").await, Some(json!({"count": 1})));
    }

    #[tokio::test]
    async fn zero_ttl_is_not_cached() {
        let cache = CacheManager::new(true, 4);
        cache.insert("bills".to_string(), json!(1), 0).await;

        assert!(cache.get("bills").await.is_none());
    }

    #[tokio::test]
    async fn evicts_when_capacity_reached() {
        let cache = CacheManager::new(true, 2);
        cache.insert("a".to_string(), json!(1), 10).await;
        cache.insert("b".to_string(), json!(2), 60).await;
        cache.insert("c".to_string(), json!(3), 60).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get("a").await.is_none());
        assert_eq!(cache.get("c").await, Some(json!(3)));
    }
}
