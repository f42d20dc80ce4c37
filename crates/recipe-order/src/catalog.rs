//! Scoped Catalog
//!
//! One reorder pipeline, several presentation modes: a global order for the
//! flat grid plus an independent order per scope for the tabbed view.
//! Each order has its own storage key, so reordering one never touches another.
//! Drags never cross scopes.

use std::collections::BTreeMap;

use crate::config::CatalogConfig;
use crate::controller::ReorderController;
use crate::entity::{OrderScope, Scoped};
use crate::persistence::{scoped_key, OrderPersistence};
use crate::storage::KeyValueStorage;

/// Which order a view renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderView<S> {
    Global,
    Scope(S),
}

pub struct ScopedCatalog<T: Scoped, S> {
    global: ReorderController<T, S>,
    scopes: BTreeMap<T::Scope, ReorderController<T, S>>,
}

impl<T: Scoped, S: KeyValueStorage + Clone> ScopedCatalog<T, S> {
    /// Partition `items` and restore every order from `storage`
    pub fn load(items: &[T], storage: S, config: &CatalogConfig) -> Self {
        let distance = config.activation_distance_px;
        let global = ReorderController::load(
            items,
            OrderPersistence::new(storage.clone(), config.storage_key.clone()),
            distance,
        );

        let mut partitions: BTreeMap<T::Scope, Vec<T>> = BTreeMap::new();
        for item in items {
            partitions.entry(item.scope()).or_default().push(item.clone());
        }

        let scopes = partitions
            .into_iter()
            .map(|(scope, members)| {
                let key = scoped_key(&config.storage_key, scope.key_segment());
                let persistence = OrderPersistence::new(storage.clone(), key);
                (scope, ReorderController::load(&members, persistence, distance))
            })
            .collect();

        Self { global, scopes }
    }
}

impl<T: Scoped, S: KeyValueStorage> ScopedCatalog<T, S> {
    /// Scopes that have at least one item, in scope order
    pub fn scopes(&self) -> impl Iterator<Item = T::Scope> + '_ {
        self.scopes.keys().copied()
    }

    pub fn controller(&self, view: OrderView<T::Scope>) -> Option<&ReorderController<T, S>> {
        match view {
            OrderView::Global => Some(&self.global),
            OrderView::Scope(scope) => self.scopes.get(&scope),
        }
    }

    pub fn controller_mut(&mut self, view: OrderView<T::Scope>) -> Option<&mut ReorderController<T, S>> {
        match view {
            OrderView::Global => Some(&mut self.global),
            OrderView::Scope(scope) => self.scopes.get_mut(&scope),
        }
    }

    /// Items of `view` in display order; empty for a scope with no items
    pub fn items(&self, view: OrderView<T::Scope>) -> &[T] {
        self.controller(view).map(|ctl| ctl.items()).unwrap_or(&[])
    }

    /// Scope owning `id`
    pub fn scope_of(&self, id: &str) -> Option<T::Scope> {
        self.global.items().iter().find(|item| item.id() == id).map(|item| item.scope())
    }

    pub fn len(&self) -> usize {
        self.global.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.global.items().is_empty()
    }
}
