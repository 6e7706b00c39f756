//! Action binding table
//!
//! Maps (action, trigger phase) to the character entry point it drives. Built
//! once when input is set up; dispatch is a single lookup.

use crate::input::{InputAction, TriggerEvent};
use ahash::AHashMap;

/// Entry point an input is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Jump,
    StopJumping,
    Move,
    Look,
    Sprint,
    Dodge,
    AttackPrimary,
    AttackSecondary,
}

#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    bindings: AHashMap<(InputAction, TriggerEvent), Binding>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The character's shipped bindings
    ///
    /// Sprint listens to both press and release so the release restores the
    /// walk speed.
    pub fn standard() -> Self {
        use InputAction as A;
        use TriggerEvent as T;

        let mut table = Self::new();
        table.bind(A::Jump, T::Started, Binding::Jump);
        table.bind(A::Jump, T::Completed, Binding::StopJumping);
        table.bind(A::Move, T::Triggered, Binding::Move);
        table.bind(A::Look, T::Triggered, Binding::Look);
        table.bind(A::AttackPrimary, T::Triggered, Binding::AttackPrimary);
        table.bind(A::AttackSecondary, T::Triggered, Binding::AttackSecondary);
        table.bind(A::Sprint, T::Started, Binding::Sprint);
        table.bind(A::Sprint, T::Completed, Binding::Sprint);
        table.bind(A::Dodge, T::Triggered, Binding::Dodge);
        table
    }

    /// Register a binding, replacing any previous one for the same key
    pub fn bind(&mut self, action: InputAction, trigger: TriggerEvent, binding: Binding) {
        self.bindings.insert((action, trigger), binding);
    }

    pub fn unbind(&mut self, action: InputAction, trigger: TriggerEvent) -> Option<Binding> {
        self.bindings.remove(&(action, trigger))
    }

    pub fn lookup(&self, action: InputAction, trigger: TriggerEvent) -> Option<Binding> {
        self.bindings.get(&(action, trigger)).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
