/*
 * cache.rs
 *
 * mwcompat - Read-only access to MediaWiki compatibility data
 * Copyright (C) 2020 Ammon Smith
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt::Debug;
use std::time::{Duration, Instant};

/// A key-value store for integer results.
///
/// Implementations only need `get`, `set` and `delete`. Callers never
/// hold a lock across a miss, so two readers may both recompute a value.
pub trait Cache: Debug {
    fn get(&self, key: &str) -> Option<i64>;

    /// Stores a value. A `ttl` of `None` never expires.
    fn set(&self, key: &str, value: i64, ttl: Option<Duration>);

    fn delete(&self, key: &str);
}

#[derive(Debug, Copy, Clone)]
struct CacheEntry {
    value: i64,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    #[inline]
    fn is_expired(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }
}

/// Process-local cache, the default for `Server`.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    #[inline]
    pub fn new() -> Self {
        MemoryCache::default()
    }

    /// Number of stored entries, including any that expired but were not read yet.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        debug!("Clearing memory cache");

        self.entries.lock().clear();
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<i64> {
        let mut guard = self.entries.lock();
        let entry = *guard.get(key)?;

        if entry.is_expired(Instant::now()) {
            trace!("Cache entry '{}' expired", key);

            guard.remove(key);
            return None;
        }

        Some(entry.value)
    }

    fn set(&self, key: &str, value: i64, ttl: Option<Duration>) {
        trace!("Setting cache entry '{}' to {} (ttl {:?})", key, value, ttl);

        let entry = CacheEntry {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };

        self.entries.lock().insert(str!(key), entry);
    }

    fn delete(&self, key: &str) {
        trace!("Deleting cache entry '{}'", key);

        self.entries.lock().remove(key);
    }
}

#[test]
fn test_memory_cache() {
    let cache = MemoryCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.get("missing"), None);

    cache.set("forever", 12, None);
    cache.set("later", 3, Some(Duration::from_secs(300)));
    assert_eq!(cache.get("forever"), Some(12));
    assert_eq!(cache.get("later"), Some(3));
    assert_eq!(cache.len(), 2);

    cache.set("forever", 13, None);
    assert_eq!(cache.get("forever"), Some(13));

    cache.delete("later");
    assert_eq!(cache.get("later"), None);
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_memory_cache_expiry() {
    let cache = MemoryCache::new();

    cache.set("gone", 1, Some(Duration::from_secs(0)));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("gone"), None);
    assert_eq!(cache.len(), 0);
}
