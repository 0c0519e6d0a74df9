//! Drag-and-drop Core Library
//!
//! Platform-agnostic state tracking for HTML5-native drag-and-drop. The
//! browser delivers `dragenter`/`dragleave`/`dragover`/`drop` asynchronously
//! and without ordering guarantees between neighbouring elements; the state
//! machine here reconciles those events into a single lifecycle
//! (idle, dragging, dragged over, dropped).

pub mod machine;
pub mod position;
pub mod script;
pub mod state;
pub mod tracker;
pub mod zones;

pub use machine::{transition, update, update_sticky};
pub use position::{Axis, Half, Position};
pub use script::{Report, Script, ScriptError, ScriptResult};
pub use state::{DragEvent, DragState, Transfer};
pub use tracker::{DragTracker, Outcome, TrackerConfig};
pub use zones::DropZones;
