//! Optional bounded geocoding cache
//!
//! Disabled by default (`geocoder.cache_size = 0`): every lookup then hits
//! the live service so the UI reflects current availability. With a nonzero
//! capacity, `Resolved` outcomes are kept in a bounded FIFO for the life of
//! the process. Nothing is persisted across sessions.

use crate::geo::{Geocoder, ResolutionOutcome, ResolvedLocation};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tracing::debug;

/// A geocoder wrapper with a bounded in-memory cache
#[derive(Debug)]
pub struct CachedGeocoder<G> {
    inner: G,
    capacity: usize,
    store: Mutex<CacheStore>,
}

#[derive(Debug, Default)]
struct CacheStore {
    entries: HashMap<String, ResolvedLocation>,
    order: VecDeque<String>,
}

impl<G> CachedGeocoder<G> {
    /// Wrap a geocoder; `capacity` 0 disables caching entirely
    pub fn new(inner: G, capacity: usize) -> Self {
        Self {
            inner,
            capacity,
            store: Mutex::new(CacheStore::default()),
        }
    }

    fn lookup_cached(&self, query: &str) -> Option<ResolvedLocation> {
        if self.capacity == 0 {
            return None;
        }
        let store = self.store.lock().expect("cache lock poisoned");
        store.entries.get(query).cloned()
    }

    fn insert(&self, query: &str, location: &ResolvedLocation) {
        if self.capacity == 0 {
            return;
        }
        let mut store = self.store.lock().expect("cache lock poisoned");
        if store.entries.contains_key(query) {
            return;
        }
        if store.order.len() >= self.capacity {
            if let Some(oldest) = store.order.pop_front() {
                store.entries.remove(&oldest);
            }
        }
        store.order.push_back(query.to_string());
        store.entries.insert(query.to_string(), location.clone());
    }
}

impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    async fn resolve(&self, query: &str) -> ResolutionOutcome {
        let query = query.trim();
        if let Some(hit) = self.lookup_cached(query) {
            debug!(query, "geocoding cache hit");
            return ResolutionOutcome::Resolved(hit);
        }

        let outcome = self.inner.resolve(query).await;
        if let ResolutionOutcome::Resolved(location) = &outcome {
            self.insert(query, location);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and resolves everything to a fixed point
    struct CountingGeocoder {
        calls: AtomicUsize,
    }

    impl CountingGeocoder {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Geocoder for CountingGeocoder {
        async fn resolve(&self, query: &str) -> ResolutionOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if query == "nowhere" {
                ResolutionOutcome::NotFound
            } else {
                ResolutionOutcome::Resolved(ResolvedLocation::new(1.0, 2.0))
            }
        }
    }

    #[tokio::test]
    async fn test_zero_capacity_always_calls_through() {
        let cached = CachedGeocoder::new(CountingGeocoder::new(), 0);
        cached.resolve("Paris").await;
        cached.resolve("Paris").await;
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_resolved_outcomes_are_cached() {
        let cached = CachedGeocoder::new(CountingGeocoder::new(), 4);
        cached.resolve("Paris").await;
        cached.resolve("Paris").await;
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_not_found_is_not_cached() {
        let cached = CachedGeocoder::new(CountingGeocoder::new(), 4);
        cached.resolve("nowhere").await;
        cached.resolve("nowhere").await;
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fifo_eviction() {
        let cached = CachedGeocoder::new(CountingGeocoder::new(), 2);
        cached.resolve("a").await;
        cached.resolve("b").await;
        cached.resolve("c").await; // evicts "a"
        cached.resolve("a").await;
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 4);
    }
}
