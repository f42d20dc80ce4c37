//! Entity Traits
//!
//! The core only knows items through their identity and, for the
//! categorized views, the scope they belong to. Every other field is payload.

use std::fmt;

/// Anything with a permanent unique string identifier
pub trait Entity: Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// A partition owning an independent order (e.g. a meal type)
pub trait OrderScope: Copy + Ord + fmt::Debug {
    /// Stable segment used to derive the scope's storage key
    fn key_segment(&self) -> &'static str;
}

/// Entity that belongs to exactly one scope for the whole session
pub trait Scoped: Entity {
    type Scope: OrderScope;

    fn scope(&self) -> Self::Scope;
}
