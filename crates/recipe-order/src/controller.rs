//! Interactive Reorder Controller
//!
//! Drag gesture state machine for one scope. Pointer and keyboard sensors
//! feed it [`GestureInput`]s; a completed, non-trivial drop relocates one
//! item, writes the new order once, and notifies subscribers.
//!
//! The order is only ever replaced wholesale after the drop, so readers see
//! either the pre-drag or the settled sequence.

use crate::entity::Entity;
use crate::geometry::{closest_center, DropTarget, Point};
use crate::order::{ids_of, move_element};
use crate::persistence::OrderPersistence;
use crate::reconcile::reconcile;
use crate::storage::KeyValueStorage;

/// Current gesture state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer pressed on an item, activation distance not yet crossed
    Pending { id: String, origin: Point },
    /// Drag active; `over` is the item currently under the drag, if any
    Dragging { active: String, over: Option<String> },
}

/// Keyboard step through the order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Input events reported by the presentation boundary
#[derive(Debug, Clone, PartialEq)]
pub enum GestureInput {
    /// Pointer down on an item
    Press { id: String, at: Point },
    /// Pointer moved; `targets` are the droppable rectangles of this scope
    Move { at: Point, targets: Vec<DropTarget> },
    /// Pointer up
    Release,
    /// Keyboard activation on an item
    Pick { id: String },
    /// Keyboard move of the drop target
    Step(Direction),
    /// Keyboard drop
    Drop,
    /// Escape, focus loss, pointer leaving the document
    Cancel,
}

/// Notification carrying the full settled order after a committed reorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderChanged {
    pub ids: Vec<String>,
}

type Listener = Box<dyn FnMut(&OrderChanged)>;

pub struct ReorderController<T, S> {
    items: Vec<T>,
    state: DragState,
    persistence: OrderPersistence<S>,
    activation_distance: f64,
    /// Whether the current drag was started by the pointer
    pointer_drag: bool,
    listeners: Vec<Listener>,
}

impl<T: Entity, S: KeyValueStorage> ReorderController<T, S> {
    /// Restore the saved order for `items` and start idle
    pub fn load(items: &[T], persistence: OrderPersistence<S>, activation_distance: f64) -> Self {
        let saved = persistence.load();
        let items = reconcile(items, saved.as_deref());
        Self {
            items,
            state: DragState::Idle,
            persistence,
            activation_distance,
            pointer_drag: false,
            listeners: Vec::new(),
        }
    }

    /// Items in display order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn ids(&self) -> Vec<String> {
        ids_of(&self.items)
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn storage_key(&self) -> &str {
        self.persistence.key()
    }

    /// Register an observer for committed reorders
    pub fn subscribe(&mut self, listener: impl FnMut(&OrderChanged) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply one input. Returns the change when the input committed a reorder.
    pub fn handle(&mut self, input: GestureInput) -> Option<OrderChanged> {
        let state = std::mem::take(&mut self.state);
        let (next, change) = self.transition(state, input);
        log::trace!("[DND] state -> {:?}", next);
        self.state = next;
        change
    }

    fn transition(&mut self, state: DragState, input: GestureInput) -> (DragState, Option<OrderChanged>) {
        match (state, input) {
            (_, GestureInput::Cancel) => {
                log::debug!("[DND] Gesture cancelled");
                (DragState::Idle, None)
            }

            (DragState::Idle, GestureInput::Press { id, at }) if self.contains(&id) => {
                (DragState::Pending { id, origin: at }, None)
            }
            (DragState::Idle, GestureInput::Pick { id }) if self.contains(&id) => {
                log::debug!("[DND] Keyboard drag start: {}", id);
                self.pointer_drag = false;
                let over = Some(id.clone());
                (DragState::Dragging { active: id, over }, None)
            }

            (DragState::Pending { id, origin }, GestureInput::Move { at, targets }) => {
                if origin.distance_to(at) > self.activation_distance {
                    log::debug!("[DND] Pointer drag start: {}", id);
                    self.pointer_drag = true;
                    // The activating move already collides; unmeasured targets keep the item itself
                    let over = if targets.is_empty() {
                        Some(id.clone())
                    } else {
                        self.collide(at, &targets)
                    };
                    (DragState::Dragging { active: id, over }, None)
                } else {
                    (DragState::Pending { id, origin }, None)
                }
            }
            // Below the threshold this was a click
            (DragState::Pending { .. }, GestureInput::Release) => (DragState::Idle, None),

            (DragState::Dragging { active, .. }, GestureInput::Move { at, targets }) if self.pointer_drag => {
                let over = self.collide(at, &targets);
                (DragState::Dragging { active, over }, None)
            }
            (DragState::Dragging { active, over }, GestureInput::Step(direction)) => {
                let over = self.step(&active, over.as_deref(), direction);
                (DragState::Dragging { active, over }, None)
            }
            // A keyboard drag only ends by keyboard; stray mouse input leaves it alone
            (DragState::Dragging { active, over }, GestureInput::Release) if !self.pointer_drag => {
                (DragState::Dragging { active, over }, None)
            }
            (DragState::Dragging { active, over }, GestureInput::Release | GestureInput::Drop) => {
                let change = self.settle(&active, over.as_deref());
                (DragState::Idle, change)
            }

            (state, input) => {
                log::trace!("[DND] Ignoring {:?} in {:?}", input, state);
                (state, None)
            }
        }
    }

    /// Nearest droppable of this scope to the pointer
    fn collide(&self, at: Point, targets: &[DropTarget]) -> Option<String> {
        closest_center(at, targets.iter().filter(|t| self.contains(&t.id))).map(|t| t.id.clone())
    }

    fn step(&self, active: &str, over: Option<&str>, direction: Direction) -> Option<String> {
        let current = over
            .and_then(|id| self.index_of(id))
            .or_else(|| self.index_of(active))?;
        let next = match direction {
            Direction::Backward => current.saturating_sub(1),
            Direction::Forward => (current + 1).min(self.items.len().saturating_sub(1)),
        };
        self.items.get(next).map(|item| item.id().to_string())
    }

    fn settle(&mut self, active: &str, over: Option<&str>) -> Option<OrderChanged> {
        let over = over?;
        if over == active {
            log::debug!("[DND] Dropped {} on itself", active);
            return None;
        }
        let from = self.index_of(active)?;
        let to = self.index_of(over)?;

        self.items = move_element(&self.items, from, to);
        let change = OrderChanged { ids: self.ids() };
        log::debug!("[DND] Moved {} from {} to {}", active, from, to);

        self.persistence.save(&change.ids);
        for listener in self.listeners.iter_mut() {
            listener(&change);
        }
        Some(change)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}
