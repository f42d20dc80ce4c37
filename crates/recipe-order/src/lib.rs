//! Recipe Order Core
//!
//! Platform-independent ordering logic for the meal planner catalog:
//! reconciliation of a saved order with the current catalog, fail-soft
//! persistence, and the drag-reorder state machine.
//! Nothing here touches the DOM; the browser glue lives in `leptos-dragdrop`.

mod catalog;
mod config;
mod controller;
mod entity;
mod error;
mod geometry;
mod order;
mod persistence;
mod reconcile;
mod selection;
mod storage;

pub use catalog::{OrderView, ScopedCatalog};
pub use config::{CatalogConfig, ViewMode, CONFIG_STORAGE_KEY, DEFAULT_STORAGE_KEY};
pub use controller::{Direction, DragState, GestureInput, OrderChanged, ReorderController};
pub use entity::{Entity, OrderScope, Scoped};
pub use error::{StorageError, StorageResult};
pub use geometry::{closest_center, DropTarget, Point, Rect};
pub use order::{ids_of, move_element};
pub use persistence::{scoped_key, OrderPersistence};
pub use reconcile::reconcile;
pub use selection::{CloseTicket, Selection};
pub use storage::{KeyValueStorage, MemoryStorage};
