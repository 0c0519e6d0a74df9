//! Independent drag-and-drop zones sharing one page.

use crate::state::DragEvent;
use crate::tracker::{DragTracker, Outcome, TrackerConfig};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A set of isolated trackers keyed by zone.
///
/// Events routed to one zone never touch another zone's state.
#[derive(Debug, Clone)]
pub struct DropZones<Z, D, P> {
    zones: HashMap<Z, DragTracker<D, P>>,
}

impl<Z, D, P> Default for DropZones<Z, D, P> {
    fn default() -> Self {
        Self {
            zones: HashMap::new(),
        }
    }
}

impl<Z, D, P> DropZones<Z, D, P>
where
    Z: Eq + Hash + Debug,
    D: Clone + PartialEq + Debug,
    P: Clone + PartialEq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone, replacing any existing tracker for it.
    pub fn insert(&mut self, zone: Z, config: TrackerConfig) {
        self.zones.insert(zone, DragTracker::new(config));
    }

    /// Unregister a zone, returning its tracker.
    pub fn remove(&mut self, zone: &Z) -> Option<DragTracker<D, P>> {
        self.zones.remove(zone)
    }

    pub fn get(&self, zone: &Z) -> Option<&DragTracker<D, P>> {
        self.zones.get(zone)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Route an event to a zone. Returns `None` if the zone is unknown.
    pub fn handle(&mut self, zone: &Z, event: DragEvent<D, P>) -> Option<Outcome<D, P>> {
        match self.zones.get_mut(zone) {
            Some(tracker) => Some(tracker.handle(event)),
            None => {
                log::warn!("{} for unknown drop zone {:?}", event.name(), zone);
                None
            }
        }
    }

    /// Zones with a drag in progress.
    pub fn active(&self) -> impl Iterator<Item = &Z> {
        self.zones
            .iter()
            .filter(|(_, tracker)| tracker.is_dragging())
            .map(|(zone, _)| zone)
    }

    /// Return every zone to idle.
    pub fn reset_all(&mut self) {
        for tracker in self.zones.values_mut() {
            tracker.reset();
        }
    }
}
