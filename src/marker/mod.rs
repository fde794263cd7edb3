//! Marker ownership and lifecycle
//!
//! The registry is the single owner of the markers shown on the map
//! surface. Each logical slot holds at most one live marker; setting a slot
//! evicts its previous occupant before the replacement is added, so the
//! surface never shows two markers for one slot and never keeps a dangling
//! one after eviction.

use crate::geo::ResolvedLocation;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Logical role a marker occupies, independent of the physical marker
/// object that fills it over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSlot {
    /// Start point of a distance calculation
    Start,
    /// End point of a distance calculation
    End,
    /// Context marker for a one-shot search
    SearchContext,
}

impl std::fmt::Display for MarkerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
            Self::SearchContext => write!(f, "search_context"),
        }
    }
}

/// Opaque handle to a marker on the map surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerHandle(pub u64);

/// A visual point annotation tied to one resolved location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub slot: MarkerSlot,
    pub position: ResolvedLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// The map-rendering collaborator
///
/// The registry drives this with paired remove/add instructions; tile
/// loading, pan/zoom and the viewport live entirely behind it.
pub trait MapSurface: Send {
    /// Place a marker, returning a handle for later removal
    fn add_marker(&mut self, marker: &Marker) -> MarkerHandle;

    /// Remove a previously added marker
    fn remove_marker(&mut self, handle: MarkerHandle);
}

/// A surface that only logs instructions
///
/// Used when the visible map lives elsewhere (the web frontend re-renders
/// from registry state) or nowhere (the CLI).
#[derive(Debug, Default)]
pub struct TraceSurface {
    next_handle: u64,
}

impl MapSurface for TraceSurface {
    fn add_marker(&mut self, marker: &Marker) -> MarkerHandle {
        self.next_handle += 1;
        debug!(slot = %marker.slot, lat = marker.position.latitude, lon = marker.position.longitude, "add marker");
        MarkerHandle(self.next_handle)
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        debug!(handle = handle.0, "remove marker");
    }
}

/// Owns the set of currently displayed markers, one per occupied slot
#[derive(Debug)]
pub struct MarkerRegistry<S: MapSurface> {
    surface: S,
    slots: Vec<(MarkerHandle, Marker)>,
}

impl<S: MapSurface> MarkerRegistry<S> {
    /// Create an empty registry over a map surface
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            slots: Vec::new(),
        }
    }

    /// Register a marker for a slot, evicting any previous occupant first
    pub fn set(
        &mut self,
        slot: MarkerSlot,
        position: ResolvedLocation,
        label: Option<String>,
    ) -> MarkerHandle {
        self.clear(slot);
        let marker = Marker {
            slot,
            position,
            label,
        };
        let handle = self.surface.add_marker(&marker);
        self.slots.push((handle, marker));
        handle
    }

    /// Evict a slot's marker without replacement
    ///
    /// No instruction reaches the surface if the slot was already empty.
    pub fn clear(&mut self, slot: MarkerSlot) {
        if let Some(index) = self.slots.iter().position(|(_, m)| m.slot == slot) {
            let (handle, _) = self.slots.remove(index);
            self.surface.remove_marker(handle);
        }
    }

    /// The marker currently occupying a slot, if any
    pub fn get(&self, slot: MarkerSlot) -> Option<&Marker> {
        self.slots
            .iter()
            .find(|(_, m)| m.slot == slot)
            .map(|(_, m)| m)
    }

    /// All live markers, for rendering
    pub fn markers(&self) -> Vec<Marker> {
        self.slots.iter().map(|(_, m)| m.clone()).collect()
    }

    /// Number of live markers
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no markers are registered
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::test_surface::{Instruction, RecordingSurface};
    use super::*;

    fn position() -> ResolvedLocation {
        ResolvedLocation::new(40.7128, -74.0060)
    }

    #[test]
    fn test_set_then_get() {
        let mut registry = MarkerRegistry::new(RecordingSurface::default());
        registry.set(MarkerSlot::Start, position(), Some("NYC".into()));

        let marker = registry.get(MarkerSlot::Start).unwrap();
        assert_eq!(marker.position, position());
        assert_eq!(marker.label.as_deref(), Some("NYC"));
        assert!(registry.get(MarkerSlot::End).is_none());
    }

    #[test]
    fn test_set_replaces_not_accumulates() {
        let mut registry = MarkerRegistry::new(RecordingSurface::default());
        let first = registry.set(MarkerSlot::Start, position(), None);
        let second = registry.set(MarkerSlot::Start, ResolvedLocation::new(1.0, 2.0), None);

        assert_ne!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.surface.log,
            vec![
                Instruction::Add(MarkerSlot::Start, first),
                Instruction::Remove(first),
                Instruction::Add(MarkerSlot::Start, second),
            ]
        );
    }

    #[test]
    fn test_clear_empty_slot_emits_nothing() {
        let mut registry = MarkerRegistry::new(RecordingSurface::default());
        registry.clear(MarkerSlot::End);
        assert!(registry.surface.log.is_empty());
    }

    #[test]
    fn test_clear_evicts() {
        let mut registry = MarkerRegistry::new(RecordingSurface::default());
        let handle = registry.set(MarkerSlot::SearchContext, position(), None);
        registry.clear(MarkerSlot::SearchContext);

        assert!(registry.is_empty());
        assert_eq!(registry.surface.log.last(), Some(&Instruction::Remove(handle)));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut registry = MarkerRegistry::new(RecordingSurface::default());
        registry.set(MarkerSlot::Start, position(), None);
        registry.set(MarkerSlot::End, ResolvedLocation::new(34.0522, -118.2437), None);
        registry.set(MarkerSlot::SearchContext, ResolvedLocation::new(0.0, 0.0), None);

        registry.clear(MarkerSlot::Start);
        assert_eq!(registry.len(), 2);
        assert!(registry.get(MarkerSlot::End).is_some());
        assert!(registry.get(MarkerSlot::SearchContext).is_some());
    }
}
