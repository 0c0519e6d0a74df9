//! Drag-and-drop DOM Bindings
//!
//! Translates native HTML5 drag events into `dragdrop_core` events. The
//! measurement code is platform independent; the listener bindings are only
//! available on wasm32.

pub mod metrics;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use metrics::{ContentBox, parse_px};

#[cfg(target_arch = "wasm32")]
pub use dom::{DragImage, Draggable, Droppable, SharedTracker, init_logging, position_of};
