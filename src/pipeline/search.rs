//! One-shot coordinate lookup
//!
//! Resolves a single query for display. No marker side effects; presenting
//! the coordinates (or the not-found text) is the caller's job.

use crate::geo::{Geocoder, ResolutionOutcome};

/// The search flow, independent of any calculation cycle
pub struct SearchController<G: Geocoder> {
    geocoder: G,
}

impl<G: Geocoder> SearchController<G> {
    /// Create a search controller over a geocoder
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// Resolve one query to coordinates
    pub async fn search(&self, query: &str) -> ResolutionOutcome {
        self.geocoder.resolve(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::ResolvedLocation;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedGeocoder {
        calls: AtomicUsize,
    }

    impl Geocoder for FixedGeocoder {
        async fn resolve(&self, query: &str) -> ResolutionOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if query.trim().is_empty() || query == "nowhere" {
                ResolutionOutcome::NotFound
            } else {
                ResolutionOutcome::Resolved(ResolvedLocation::named(48.8566, 2.3522, query))
            }
        }
    }

    #[tokio::test]
    async fn test_search_resolves() {
        let controller = SearchController::new(FixedGeocoder {
            calls: AtomicUsize::new(0),
        });

        match controller.search("Paris").await {
            ResolutionOutcome::Resolved(location) => {
                assert_eq!(location.latitude, 48.8566);
                assert_eq!(location.display_name.as_deref(), Some("Paris"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_not_found() {
        let controller = SearchController::new(FixedGeocoder {
            calls: AtomicUsize::new(0),
        });
        assert_eq!(
            controller.search("nowhere").await,
            ResolutionOutcome::NotFound
        );
        assert_eq!(controller.geocoder.calls.load(Ordering::SeqCst), 1);
    }
}
