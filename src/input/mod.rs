//! Player input events as they arrive from the engine's input layer
//!
//! Events are already classified by action and trigger phase; the layer only
//! routes them to the bound entry point.

pub mod bindings;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use bindings::{Binding, BindingTable};

/// Named player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    Jump,
    Move,
    Look,
    Sprint,
    Dodge,
    AttackPrimary,
    AttackSecondary,
}

/// Phase of an input action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    /// Input went from idle to actuated this frame
    Started,
    /// Input is actuated (fires every frame while held)
    Triggered,
    /// Input was released this frame
    Completed,
}

/// Value carried by an input event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Digital(bool),
    Axis1D(f32),
    Axis2D(Vec2),
}

impl Default for InputValue {
    fn default() -> Self {
        InputValue::Digital(false)
    }
}

impl InputValue {
    /// Actuated if the value has any magnitude
    pub fn as_bool(&self) -> bool {
        match *self {
            InputValue::Digital(b) => b,
            InputValue::Axis1D(x) => x != 0.0,
            InputValue::Axis2D(v) => v != Vec2::ZERO,
        }
    }

    /// Value as a 2D axis; scalars fill X
    pub fn as_axis2d(&self) -> Vec2 {
        match *self {
            InputValue::Digital(b) => Vec2::new(if b { 1.0 } else { 0.0 }, 0.0),
            InputValue::Axis1D(x) => Vec2::new(x, 0.0),
            InputValue::Axis2D(v) => v,
        }
    }
}

/// One classified input event for a character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub action: InputAction,
    pub trigger: TriggerEvent,
    #[serde(default)]
    pub value: InputValue,
}

impl InputEvent {
    pub fn new(action: InputAction, trigger: TriggerEvent, value: InputValue) -> Self {
        Self {
            action,
            trigger,
            value,
        }
    }

    /// A press with no payload (dodge, attacks)
    pub fn pressed(action: InputAction) -> Self {
        Self::new(action, TriggerEvent::Triggered, InputValue::Digital(true))
    }

    pub fn axis(action: InputAction, x: f32, y: f32) -> Self {
        Self::new(
            action,
            TriggerEvent::Triggered,
            InputValue::Axis2D(Vec2::new(x, y)),
        )
    }
}

/// What the engine's input component supports for this character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCapability {
    /// Action/trigger-phase input; the standard bindings can be installed
    Enhanced,
    /// Legacy axis/key input only; the bindings cannot be installed
    Legacy,
}
