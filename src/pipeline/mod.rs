//! The location-resolution-and-distance pipeline
//!
//! Drives the end-to-end flow: two raw queries in, two resolved locations,
//! marker updates, and a distance out. Resolution is sequenced start-first
//! so a failed start query costs no further work, and every cycle carries a
//! token so a superseded cycle can never apply a stale outcome.

pub mod search;

use crate::distance;
use crate::error::{Error, Result};
use crate::geo::{Geocoder, ResolvedLocation};
use crate::marker::{MapSurface, Marker, MarkerRegistry, MarkerSlot};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

pub use search::SearchController;

/// Great-circle distance between the two resolved endpoints
///
/// Derived per cycle, never persisted; recomputed on every successful
/// resolution pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub kilometers: f64,
}

/// States of one calculation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleState {
    ResolvingStart,
    ResolvingEnd,
    Computed,
    Failed,
}

/// Drives calculation cycles and owns the marker registry
///
/// Single writer: all registry mutation goes through this type, under its
/// own lock. A new calculate call supersedes any in-flight one; the old
/// cycle's outcome is discarded before it can touch the registry.
pub struct Orchestrator<G: Geocoder, S: MapSurface> {
    geocoder: G,
    registry: Mutex<MarkerRegistry<S>>,
    cycle: AtomicU64,
}

impl<G: Geocoder, S: MapSurface> Orchestrator<G, S> {
    /// Create an orchestrator over a geocoder and a map surface
    pub fn new(geocoder: G, surface: S) -> Self {
        Self {
            geocoder,
            registry: Mutex::new(MarkerRegistry::new(surface)),
            cycle: AtomicU64::new(0),
        }
    }

    /// Resolve both queries and compute the distance between them
    ///
    /// On success the `Start` and `End` markers hold the two resolved
    /// locations. On any failure both slots are left empty, never
    /// half-populated.
    pub async fn calculate(&self, start_query: &str, end_query: &str) -> Result<DistanceResult> {
        let start_query = start_query.trim();
        let end_query = end_query.trim();
        if start_query.is_empty() || end_query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let cycle = self.cycle.fetch_add(1, Ordering::SeqCst) + 1;
        self.transition(cycle, CycleState::ResolvingStart);

        // Stale visual state must not persist through a new, possibly
        // failing, request
        {
            let mut registry = self.registry.lock().await;
            registry.clear(MarkerSlot::Start);
            registry.clear(MarkerSlot::End);
        }

        let start = self
            .geocoder
            .resolve(start_query)
            .await
            .into_result(start_query)
            .map_err(|e| self.fail(cycle, e))?;
        self.ensure_current(cycle)?;

        self.transition(cycle, CycleState::ResolvingEnd);
        let end = self
            .geocoder
            .resolve(end_query)
            .await
            .into_result(end_query)
            .map_err(|e| self.fail(cycle, e))?;

        let kilometers = distance::haversine_km(&start, &end);

        {
            let mut registry = self.registry.lock().await;
            // Re-check under the lock so a stale cycle cannot slip a
            // mutation past a newer one
            if self.cycle.load(Ordering::SeqCst) != cycle {
                return Err(self.fail(cycle, Error::Superseded));
            }
            let start_label = label_for(&start, start_query);
            let end_label = label_for(&end, end_query);
            registry.set(MarkerSlot::Start, start, Some(start_label));
            registry.set(MarkerSlot::End, end, Some(end_label));
        }

        self.transition(cycle, CycleState::Computed);
        Ok(DistanceResult { kilometers })
    }

    /// Snapshot of the live markers, for rendering
    pub async fn markers(&self) -> Vec<Marker> {
        self.registry.lock().await.markers()
    }

    /// The marker currently in a slot, if any
    pub async fn marker(&self, slot: MarkerSlot) -> Option<Marker> {
        self.registry.lock().await.get(slot).cloned()
    }

    /// Place the search-context marker
    ///
    /// Presentation hook for the search flow's caller; independent of the
    /// calculation cycle and its Start/End slots.
    pub async fn mark_search_context(&self, position: ResolvedLocation) {
        let label = position.display_name.clone();
        self.registry
            .lock()
            .await
            .set(MarkerSlot::SearchContext, position, label);
    }

    /// Remove the search-context marker
    pub async fn clear_search_context(&self) {
        self.registry.lock().await.clear(MarkerSlot::SearchContext);
    }

    fn ensure_current(&self, cycle: u64) -> Result<()> {
        if self.cycle.load(Ordering::SeqCst) == cycle {
            Ok(())
        } else {
            Err(self.fail(cycle, Error::Superseded))
        }
    }

    fn transition(&self, cycle: u64, state: CycleState) {
        debug!(cycle, ?state, "calculation cycle");
    }

    fn fail(&self, cycle: u64, error: Error) -> Error {
        self.transition(cycle, CycleState::Failed);
        error
    }
}

fn label_for(location: &ResolvedLocation, query: &str) -> String {
    location
        .display_name
        .clone()
        .unwrap_or_else(|| query.to_string())
}
