//! Owning wrapper around the drag state machine.

use crate::machine::transition;
use crate::position::Position;
use crate::state::{DragEvent, DragState, Transfer};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Tracker configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Treat a drag end over a known drop target as a drop.
    #[serde(default)]
    pub sticky: bool,
}

impl TrackerConfig {
    /// Configuration with sticky drops enabled.
    pub fn sticky() -> Self {
        Self { sticky: true }
    }
}

/// Result of feeding one event to a tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<D, P> {
    /// Completed drop, if the event finished one.
    pub transfer: Option<Transfer<D, P>>,
    /// Whether the state differs from before the event.
    pub changed: bool,
    /// Whether the event was a drag start. Callers that render a native
    /// drag image hook in here.
    pub started: bool,
}

/// Holds the drag state for one drag-and-drop zone.
#[derive(Debug, Clone)]
pub struct DragTracker<D, P> {
    state: DragState<D, P>,
    config: TrackerConfig,
}

impl<D, P> Default for DragTracker<D, P> {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl<D, P> DragTracker<D, P> {
    /// Create an idle tracker.
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            state: DragState::Idle,
            config,
        }
    }

    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    pub fn state(&self) -> &DragState<D, P> {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn drag_id(&self) -> Option<&D> {
        self.state.drag_id()
    }

    pub fn drop_id(&self) -> Option<&P> {
        self.state.drop_id()
    }

    pub fn position(&self) -> Option<&Position> {
        self.state.position()
    }

    /// Abandon any drag in progress without emitting a transfer.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}

impl<D, P> DragTracker<D, P>
where
    D: Clone + PartialEq + Debug,
    P: Clone + PartialEq + Debug,
{
    /// Check if the drag is currently over the given drop target.
    pub fn is_over(&self, drop_id: &P) -> bool {
        self.state.is_over(drop_id)
    }

    /// Feed an event through the state machine.
    pub fn handle(&mut self, event: DragEvent<D, P>) -> Outcome<D, P> {
        log::trace!("drag event {:?} in {:?}", event, self.state);

        let started = event.is_start();
        let previous = self.state.clone();
        let current = std::mem::take(&mut self.state);
        let (next, transfer) = transition(event, current, self.config.sticky);
        let changed = next != previous;
        if changed {
            log::debug!("drag state {:?} -> {:?}", previous, next);
        }
        self.state = next;

        if let Some(ref transfer) = transfer {
            log::info!("dropped {:?} on {:?}", transfer.drag_id, transfer.drop_id);
        }

        Outcome {
            transfer,
            changed,
            started,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos() -> Position {
        Position::new(100.0, 50.0, 10.0, 10.0)
    }

    #[test]
    fn test_tracks_lifecycle() {
        let mut tracker: DragTracker<u32, String> = DragTracker::default();
        assert!(!tracker.is_dragging());

        let outcome = tracker.handle(DragEvent::DragStart { drag_id: 1 });
        assert!(outcome.started);
        assert!(outcome.changed);
        assert_eq!(tracker.drag_id(), Some(&1));

        tracker.handle(DragEvent::DragEnter { drop_id: "A".to_string() });
        assert!(tracker.is_over(&"A".to_string()));
        assert!(tracker.position().is_none());

        let outcome = tracker.handle(DragEvent::Drop { drop_id: "A".to_string(), position: pos() });
        assert!(!outcome.started);
        assert_eq!(
            outcome.transfer,
            Some(Transfer { drag_id: 1, drop_id: "A".to_string(), position: Some(pos()) })
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_redundant_drag_over_unchanged() {
        let mut tracker: DragTracker<u32, &str> = DragTracker::default();
        tracker.handle(DragEvent::DragStart { drag_id: 1 });

        let outcome = tracker.handle(DragEvent::DragOver { drop_id: "A", position: pos() });
        assert!(outcome.changed);

        let outcome = tracker.handle(DragEvent::DragOver { drop_id: "A", position: pos() });
        assert!(!outcome.changed);
        assert!(outcome.transfer.is_none());
    }

    #[test]
    fn test_sticky_config() {
        let mut tracker: DragTracker<u32, &str> = DragTracker::new(TrackerConfig::sticky());
        tracker.handle(DragEvent::DragStart { drag_id: 1 });
        tracker.handle(DragEvent::DragOver { drop_id: "A", position: pos() });

        let outcome = tracker.handle(DragEvent::DragEnd);
        assert_eq!(
            outcome.transfer,
            Some(Transfer { drag_id: 1, drop_id: "A", position: Some(pos()) })
        );
    }

    #[test]
    fn test_reset() {
        let mut tracker: DragTracker<u32, &str> = DragTracker::new(TrackerConfig::sticky());
        tracker.handle(DragEvent::DragStart { drag_id: 1 });
        tracker.handle(DragEvent::DragEnter { drop_id: "A" });

        tracker.reset();
        assert_eq!(tracker.state(), &DragState::Idle);

        let outcome = tracker.handle(DragEvent::DragEnd);
        assert!(outcome.transfer.is_none());
        assert!(!outcome.changed);
    }
}
