//! Recorded event traces that can be replayed through a tracker.
//!
//! A script is JSON of the form:
//! ```json
//! {
//!   "sticky": false,
//!   "events": [
//!     { "type": "drag_start", "drag_id": "card-1" },
//!     { "type": "drag_enter", "drop_id": "todo" },
//!     { "type": "drop", "drop_id": "todo", "position": { "width": 100, "height": 50, "x": 10, "y": 10 } }
//!   ]
//! }
//! ```

use crate::state::{DragEvent, DragState, Transfer};
use crate::tracker::{DragTracker, TrackerConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::path::Path;
use thiserror::Error;

/// Script loading errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for script operations.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// A recorded sequence of drag events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script<D, P> {
    #[serde(default)]
    pub sticky: bool,
    pub events: Vec<DragEvent<D, P>>,
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report<D, P> {
    /// Transfers in the order they completed.
    pub transfers: Vec<Transfer<D, P>>,
    /// State after the last event.
    pub final_state: DragState<D, P>,
    /// Number of events that changed the state.
    pub changed: usize,
}

impl<D, P> Script<D, P>
where
    D: DeserializeOwned,
    P: DeserializeOwned,
{
    /// Parse a script from JSON text.
    pub fn from_json(json: &str) -> ScriptResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a script from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ScriptResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl<D, P> Script<D, P>
where
    D: Clone + PartialEq + Debug,
    P: Clone + PartialEq + Debug,
{
    /// Replay the events through a fresh tracker.
    pub fn run(&self) -> Report<D, P> {
        let mut tracker = DragTracker::new(TrackerConfig { sticky: self.sticky });
        let mut transfers = Vec::new();
        let mut changed = 0;

        for event in &self.events {
            let outcome = tracker.handle(event.clone());
            if outcome.changed {
                changed += 1;
            }
            transfers.extend(outcome.transfer);
        }

        Report {
            transfers,
            final_state: tracker.state().clone(),
            changed,
        }
    }
}
