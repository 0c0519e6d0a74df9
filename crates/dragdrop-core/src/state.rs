//! Drag state, incoming events and completed transfers.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Lifecycle of a single drag operation.
///
/// `D` identifies the dragged item and `P` the drop target. Both are opaque
/// and only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState<D, P> {
    /// Nothing is being dragged.
    Idle,
    /// An item is being dragged but is not over a drop target.
    Dragging { drag_id: D },
    /// An item is being dragged over a drop target.
    DraggedOver {
        drag_id: D,
        drop_id: P,
        /// Last reported pointer position. `None` until the first drag-over.
        position: Option<Position>,
    },
}

impl<D, P> Default for DragState<D, P> {
    fn default() -> Self {
        DragState::Idle
    }
}

impl<D, P> DragState<D, P> {
    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    /// Identifier of the item being dragged.
    pub fn drag_id(&self) -> Option<&D> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { drag_id } | DragState::DraggedOver { drag_id, .. } => Some(drag_id),
        }
    }

    /// Identifier of the drop target currently dragged over.
    pub fn drop_id(&self) -> Option<&P> {
        match self {
            DragState::DraggedOver { drop_id, .. } => Some(drop_id),
            _ => None,
        }
    }

    /// Last known pointer position over the current drop target.
    pub fn position(&self) -> Option<&Position> {
        match self {
            DragState::DraggedOver { position, .. } => position.as_ref(),
            _ => None,
        }
    }
}

impl<D, P: PartialEq> DragState<D, P> {
    /// Check if the drag is currently over the given drop target.
    pub fn is_over(&self, drop_id: &P) -> bool {
        self.drop_id() == Some(drop_id)
    }
}

/// Drag/drop events translated from the DOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent<D, P> {
    /// `dragstart` on a draggable element.
    DragStart { drag_id: D },
    /// `dragend` on the dragged element.
    DragEnd,
    /// `dragenter` on a drop target.
    DragEnter { drop_id: P },
    /// `dragleave` on a drop target.
    DragLeave { drop_id: P },
    /// `dragover` on a drop target.
    DragOver { drop_id: P, position: Position },
    /// `drop` on a drop target.
    Drop { drop_id: P, position: Position },
}

impl<D, P> DragEvent<D, P> {
    /// Short event name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            DragEvent::DragStart { .. } => "dragstart",
            DragEvent::DragEnd => "dragend",
            DragEvent::DragEnter { .. } => "dragenter",
            DragEvent::DragLeave { .. } => "dragleave",
            DragEvent::DragOver { .. } => "dragover",
            DragEvent::Drop { .. } => "drop",
        }
    }

    /// Check if this is a drag start.
    pub fn is_start(&self) -> bool {
        matches!(self, DragEvent::DragStart { .. })
    }
}

/// A completed drop of `drag_id` onto `drop_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer<D, P> {
    pub drag_id: D,
    pub drop_id: P,
    /// Pointer position at the drop. `None` for a sticky drop that only
    /// ever saw a `dragenter`.
    pub position: Option<Position>,
}
