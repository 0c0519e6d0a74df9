//! DOM listener bindings for draggable elements and drop targets.

use crate::metrics::{ContentBox, parse_px};
use dragdrop_core::{DragEvent, DragState, DragTracker, Outcome, Position, TrackerConfig};
use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, EventTarget};

/// Install the panic hook and route `log` output to the browser console.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
}

/// Measure the event's current target and the pointer offset within it.
pub fn position_of(event: &web_sys::DragEvent) -> Option<Position> {
    let target = event.current_target()?.dyn_into::<Element>().ok()?;
    let style = web_sys::window()?.get_computed_style(&target).ok().flatten();
    let padding = |name: &str| {
        style
            .as_ref()
            .and_then(|s| s.get_property_value(name).ok())
            .map(|v| parse_px(&v))
            .unwrap_or(0.0)
    };

    let metrics = ContentBox {
        client_width: target.client_width() as f64,
        client_height: target.client_height() as f64,
        padding_left: padding("padding-left"),
        padding_right: padding("padding-right"),
        padding_top: padding("padding-top"),
        padding_bottom: padding("padding-bottom"),
        offset_x: event.offset_x() as f64,
        offset_y: event.offset_y() as f64,
    };
    Some(metrics.position())
}

type OutcomeCallback<D, P> = dyn Fn(&DragState<D, P>, &Outcome<D, P>);

/// A tracker shared between the listeners of one drag-and-drop zone.
///
/// The callback runs after every event with the new state, outside any
/// borrow of the tracker, so it may dispatch further events.
pub struct SharedTracker<D, P> {
    tracker: Rc<RefCell<DragTracker<D, P>>>,
    on_outcome: Rc<OutcomeCallback<D, P>>,
}

impl<D, P> Clone for SharedTracker<D, P> {
    fn clone(&self) -> Self {
        Self {
            tracker: Rc::clone(&self.tracker),
            on_outcome: Rc::clone(&self.on_outcome),
        }
    }
}

impl<D, P> SharedTracker<D, P>
where
    D: Clone + PartialEq + Debug + 'static,
    P: Clone + PartialEq + Debug + 'static,
{
    pub fn new(
        config: TrackerConfig,
        on_outcome: impl Fn(&DragState<D, P>, &Outcome<D, P>) + 'static,
    ) -> Self {
        Self {
            tracker: Rc::new(RefCell::new(DragTracker::new(config))),
            on_outcome: Rc::new(on_outcome),
        }
    }

    /// Feed an event to the tracker and notify the callback.
    pub fn dispatch(&self, event: DragEvent<D, P>) -> Outcome<D, P> {
        let outcome = self.tracker.borrow_mut().handle(event);
        let state = self.tracker.borrow().state().clone();
        (self.on_outcome)(&state, &outcome);
        outcome
    }

    pub fn state(&self) -> DragState<D, P> {
        self.tracker.borrow().state().clone()
    }
}

/// Image shown under the pointer while dragging, instead of the browser's
/// default snapshot of the dragged element.
#[derive(Debug, Clone)]
pub struct DragImage {
    pub element: Element,
    pub x: i32,
    pub y: i32,
}

/// An event listener that is removed when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web_sys::DragEvent)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(web_sys::DragEvent) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(web_sys::DragEvent)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.kind, e);
        }
    }
}

/// Listeners making an element draggable. Dropping this unbinds them.
pub struct Draggable {
    element: Element,
    _listeners: Vec<Listener>,
}

impl Draggable {
    /// Mark `element` draggable and report its drags as `drag_id`.
    pub fn bind<D, P>(
        element: &Element,
        drag_id: D,
        tracker: &SharedTracker<D, P>,
        image: Option<DragImage>,
    ) -> Result<Self, JsValue>
    where
        D: Clone + PartialEq + Debug + 'static,
        P: Clone + PartialEq + Debug + 'static,
    {
        element.set_attribute("draggable", "true")?;
        let target: &EventTarget = element.as_ref();

        let start = {
            let tracker = tracker.clone();
            Listener::attach(target, "dragstart", move |event| {
                let outcome = tracker.dispatch(DragEvent::DragStart {
                    drag_id: drag_id.clone(),
                });
                let Some(data) = event.data_transfer() else {
                    return;
                };
                // Firefox will not start a drag without a payload
                if let Err(e) = data.set_data("text/plain", "") {
                    log::debug!("dragstart set_data failed: {:?}", e);
                }
                if outcome.started {
                    if let Some(ref image) = image {
                        data.set_drag_image(&image.element, image.x, image.y);
                    }
                }
            })?
        };

        let end = {
            let tracker = tracker.clone();
            Listener::attach(target, "dragend", move |_| {
                tracker.dispatch(DragEvent::DragEnd);
            })?
        };

        Ok(Self {
            element: element.clone(),
            _listeners: vec![start, end],
        })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

/// Listeners making an element a drop target. Dropping this unbinds them.
pub struct Droppable {
    element: Element,
    _listeners: Vec<Listener>,
}

impl Droppable {
    /// Mark `element` as a drop target identified by `drop_id`.
    pub fn bind<D, P>(element: &Element, drop_id: P, tracker: &SharedTracker<D, P>) -> Result<Self, JsValue>
    where
        D: Clone + PartialEq + Debug + 'static,
        P: Clone + PartialEq + Debug + 'static,
    {
        let target: &EventTarget = element.as_ref();

        let enter = {
            let tracker = tracker.clone();
            let drop_id = drop_id.clone();
            Listener::attach(target, "dragenter", move |event| {
                event.prevent_default();
                tracker.dispatch(DragEvent::DragEnter {
                    drop_id: drop_id.clone(),
                });
            })?
        };

        let leave = {
            let tracker = tracker.clone();
            let drop_id = drop_id.clone();
            Listener::attach(target, "dragleave", move |_| {
                tracker.dispatch(DragEvent::DragLeave {
                    drop_id: drop_id.clone(),
                });
            })?
        };

        // The browser only allows a drop if dragover is cancelled
        let over = {
            let tracker = tracker.clone();
            let drop_id = drop_id.clone();
            Listener::attach(target, "dragover", move |event| {
                event.prevent_default();
                if let Some(position) = position_of(&event) {
                    tracker.dispatch(DragEvent::DragOver {
                        drop_id: drop_id.clone(),
                        position,
                    });
                }
            })?
        };

        let dropped = {
            let tracker = tracker.clone();
            Listener::attach(target, "drop", move |event| {
                event.prevent_default();
                let position = position_of(&event).unwrap_or_default();
                tracker.dispatch(DragEvent::Drop {
                    drop_id: drop_id.clone(),
                    position,
                });
            })?
        };

        Ok(Self {
            element: element.clone(),
            _listeners: vec![enter, leave, over, dropped],
        })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}
