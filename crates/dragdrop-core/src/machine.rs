//! Pure transition function for the drag state machine.
//!
//! Browsers do not order `dragenter`/`dragleave` between adjacent elements:
//! the leave for the element just vacated can arrive after the enter for its
//! neighbour. Leaves are therefore only honored when they match the tracked
//! drop target, and drag-overs that repeat the current target and position
//! are dropped so the embedder does not re-render for nothing.
//!
//! Events that do not apply to the current state are no-ops. The machine
//! never fails.

use crate::state::{DragEvent, DragState, Transfer};

/// Apply `event` to `state`, discarding the drop target on drag end.
pub fn update<D, P: PartialEq>(
    event: DragEvent<D, P>,
    state: DragState<D, P>,
) -> (DragState<D, P>, Option<Transfer<D, P>>) {
    transition(event, state, false)
}

/// Apply `event` to `state`, treating a drag end over a known drop target as
/// an implicit drop.
///
/// Useful when the pointer is released outside any recognised drop target
/// but was last seen over one.
pub fn update_sticky<D, P: PartialEq>(
    event: DragEvent<D, P>,
    state: DragState<D, P>,
) -> (DragState<D, P>, Option<Transfer<D, P>>) {
    transition(event, state, true)
}

/// Compute the next state and the completed transfer, if any.
///
/// In sticky mode `dragleave` is ignored so the last target survives until
/// `dragend`, which then emits it as a transfer.
pub fn transition<D, P: PartialEq>(
    event: DragEvent<D, P>,
    state: DragState<D, P>,
    sticky: bool,
) -> (DragState<D, P>, Option<Transfer<D, P>>) {
    match (event, state) {
        (DragEvent::DragStart { drag_id }, _) => (DragState::Dragging { drag_id }, None),

        (DragEvent::DragEnd, DragState::DraggedOver { drag_id, drop_id, position }) if sticky => (
            DragState::Idle,
            Some(Transfer { drag_id, drop_id, position }),
        ),
        (DragEvent::DragEnd, _) => (DragState::Idle, None),

        (DragEvent::DragEnter { drop_id }, DragState::Dragging { drag_id }) => (
            DragState::DraggedOver { drag_id, drop_id, position: None },
            None,
        ),
        (DragEvent::DragEnter { drop_id }, DragState::DraggedOver { drag_id, position, .. }) => {
            (DragState::DraggedOver { drag_id, drop_id, position }, None)
        }

        (DragEvent::DragLeave { drop_id: left }, DragState::DraggedOver { drag_id, drop_id, position })
            if !sticky =>
        {
            if left == drop_id {
                (DragState::Dragging { drag_id }, None)
            } else {
                // Stale leave for a target we already moved off
                (DragState::DraggedOver { drag_id, drop_id, position }, None)
            }
        }

        (DragEvent::DragOver { drop_id, position }, DragState::Dragging { drag_id }) => (
            DragState::DraggedOver { drag_id, drop_id, position: Some(position) },
            None,
        ),
        (
            DragEvent::DragOver { drop_id, position },
            DragState::DraggedOver { drag_id, drop_id: current, position: last },
        ) => {
            if drop_id == current && last.as_ref() == Some(&position) {
                (DragState::DraggedOver { drag_id, drop_id: current, position: last }, None)
            } else {
                (DragState::DraggedOver { drag_id, drop_id, position: Some(position) }, None)
            }
        }

        (
            DragEvent::Drop { drop_id, position },
            DragState::Dragging { drag_id } | DragState::DraggedOver { drag_id, .. },
        ) => (
            DragState::Idle,
            Some(Transfer { drag_id, drop_id, position: Some(position) }),
        ),

        (_, state) => (state, None),
    }
}
