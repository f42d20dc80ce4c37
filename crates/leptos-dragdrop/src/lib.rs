//! Leptos DragDrop Utilities
//!
//! Sortable drag-and-drop for Leptos using mouse and keyboard events.
//! DOM events become `GestureInput`s for a reorder controller; the state it
//! returns is mirrored into signals for drag visuals.
//! The controller owns the movement threshold that tells a click from a drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub use recipe_order::{Direction, DragState, DropTarget, GestureInput, Point, Rect};

/// Attribute carrying an item id on every droppable element
pub const SORTABLE_ID_ATTR: &str = "data-sortable-id";

/// How long the click that follows a drop is swallowed
const CLICK_SUPPRESS_MS: i32 = 100;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub over_id_read: ReadSignal<Option<String>>,
    pub over_id_write: WriteSignal<Option<String>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Mouse button held since a mousedown on an item
    pub pressed_read: ReadSignal<bool>,
    pub pressed_write: WriteSignal<bool>,
    /// Applies one input to the controller and returns its new state
    handler: Callback<GestureInput, DragState>,
}

pub fn create_dnd_signals(handler: Callback<GestureInput, DragState>) -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (over_id_read, over_id_write) = signal(None::<String>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pressed_read, pressed_write) = signal(false);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pressed_read,
        pressed_write,
        handler,
    }
}

impl DndSignals {
    /// Feed one input through the controller and mirror the result
    pub fn apply(&self, input: GestureInput) {
        let state = self.handler.run(input);
        self.sync(&state);
    }

    /// Mirror controller state into the visual signals
    pub fn sync(&self, state: &DragState) {
        let was_dragging = self.dragging_id_read.get_untracked().is_some();
        match state {
            DragState::Dragging { active, over } => {
                if self.dragging_id_read.get_untracked().as_ref() != Some(active) {
                    self.dragging_id_write.set(Some(active.clone()));
                }
                if self.over_id_read.get_untracked() != *over {
                    self.over_id_write.set(over.clone());
                }
            }
            DragState::Idle | DragState::Pending { .. } => {
                if was_dragging {
                    end_drag(self);
                }
            }
        }
    }

    /// True while the click following a drop should be ignored
    pub fn suppress_click(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Measure every droppable element currently rendered
pub fn measure_targets() -> Vec<DropTarget> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(&format!("[{}]", SORTABLE_ID_ATTR)) else {
        return Vec::new();
    };

    let mut targets = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        if let Some(id) = el.get_attribute(SORTABLE_ID_ATTR) {
            let r = el.get_bounding_client_rect();
            targets.push(DropTarget::new(id, Rect::new(r.left(), r.top(), r.width(), r.height())));
        }
    }
    targets
}

fn pointer(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Create mousedown handler for draggable items
/// Records a pending drag at the pointer position
pub fn make_on_mousedown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pressed_write.set(true);
        dnd.apply(GestureInput::Press { id: item_id.clone(), at: pointer(&ev) });
    }
}

/// Create keydown handler for an item's drag handle
///
/// Space/Enter picks the item up and drops it again, arrows move the drop
/// target one position. Escape is handled globally.
pub fn make_on_handle_keydown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static {
    move |ev: web_sys::KeyboardEvent| {
        let dragging = dnd.dragging_id_read.get_untracked().is_some();
        let input = match ev.key().as_str() {
            " " | "Enter" if dragging => GestureInput::Drop,
            " " | "Enter" => GestureInput::Pick { id: item_id.clone() },
            "ArrowLeft" | "ArrowUp" if dragging => GestureInput::Step(Direction::Backward),
            "ArrowRight" | "ArrowDown" if dragging => GestureInput::Step(Direction::Forward),
            _ => return,
        };
        ev.prevent_default();
        ev.stop_propagation();
        dnd.apply(input);
    }
}

/// Bind document/window listeners for pointer moves, drops and cancellation
///
/// Escape, window blur and the pointer leaving the document all cancel.
pub fn bind_global_listeners(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !dnd.pressed_read.get_untracked() {
            return;
        }
        // Button released outside the window; the mouseup never reached us
        if ev.buttons() & 1 == 0 {
            dnd.pressed_write.set(false);
            dnd.apply(GestureInput::Cancel);
            return;
        }
        // The activating move collides too, so measure while pressed
        dnd.apply(GestureInput::Move { at: pointer(&ev), targets: measure_targets() });
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if dnd.pressed_read.get_untracked() {
            dnd.pressed_write.set(false);
            // Click event will fire naturally on the element
            dnd.apply(GestureInput::Release);
        }
    });

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.dragging_id_read.get_untracked().is_some() {
            ev.prevent_default();
            dnd.pressed_write.set(false);
            dnd.apply(GestureInput::Cancel);
        }
    });

    let on_leave = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if dnd.pressed_read.get_untracked() {
            dnd.pressed_write.set(false);
            dnd.apply(GestureInput::Cancel);
        }
    });

    let on_blur = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        dnd.pressed_write.set(false);
        dnd.apply(GestureInput::Cancel);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
            if let Some(root) = doc.document_element() {
                let _ = root.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
            }
        }
        let _ = win.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
    on_keydown.forget();
    on_leave.forget();
    on_blur.forget();
}
