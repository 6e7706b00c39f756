//! The player character: an engine rig, its action controller and its input
//! bindings, owned together for the character's lifetime.

pub mod controller;

use crate::combat::ComboTrigger;
use crate::core::config::CharacterConfig;
use crate::core::error::{ActionError, Result};
use crate::core::types::MontageHandle;
use crate::engine::CharacterRig;
use crate::input::{Binding, BindingTable, InputCapability, InputEvent, InputValue};

pub use controller::ActionController;

/// Outcome of routing one input event
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// The event reached an entry point
    Handled(Binding),
    /// Nothing is bound to this action and trigger phase
    Ignored,
}

pub struct Character<R: CharacterRig> {
    rig: R,
    controller: ActionController,
    bindings: Option<BindingTable>,
}

impl<R: CharacterRig> Character<R> {
    /// Spawn a character on `rig`.
    ///
    /// Validates the config, applies the rig setup and starts at walk speed.
    /// Input stays unbound until [`Character::setup_input`].
    pub fn spawn(config: &CharacterConfig, mut rig: R) -> Result<Self> {
        config.validate()?;
        rig.apply_setup(&config.rig);
        rig.set_max_walk_speed(config.default_max_walk_speed);

        Ok(Self {
            rig,
            controller: ActionController::from_config(config),
            bindings: None,
        })
    }

    /// Install the standard bindings if the input layer supports them.
    ///
    /// Without enhanced input every entry point is disabled until a later
    /// call succeeds.
    pub fn setup_input(&mut self, capability: InputCapability) -> Result<()> {
        match capability {
            InputCapability::Enhanced => {
                self.bindings = Some(BindingTable::standard());
                Ok(())
            }
            InputCapability::Legacy => {
                tracing::error!(
                    "failed to find an enhanced input component; this character only supports \
                     action/trigger input and its controls are disabled"
                );
                self.bindings = None;
                Err(ActionError::InputUnavailable)
            }
        }
    }

    /// Replace the binding table, e.g. after user remapping
    pub fn rebind(&mut self, table: BindingTable) {
        self.bindings = Some(table);
    }

    pub fn input_bound(&self) -> bool {
        self.bindings.is_some()
    }

    fn bound_input(&self) -> Result<&BindingTable> {
        self.bindings.as_ref().ok_or(ActionError::InputUnavailable)
    }

    /// Route one input event to its entry point
    pub fn handle_input(&mut self, event: InputEvent) -> Result<Dispatch> {
        let bindings = self.bound_input()?;
        match bindings.lookup(event.action, event.trigger) {
            Some(binding) => {
                self.invoke(binding, event.value);
                Ok(Dispatch::Handled(binding))
            }
            None => Ok(Dispatch::Ignored),
        }
    }

    fn invoke(&mut self, binding: Binding, value: InputValue) {
        match binding {
            Binding::Jump => self.controller.jump(&mut self.rig),
            Binding::StopJumping => self.controller.stop_jumping(&mut self.rig),
            Binding::Move => self.controller.move_input(&mut self.rig, value.as_axis2d()),
            Binding::Look => self.controller.look(&mut self.rig, value.as_axis2d()),
            Binding::Sprint => self.controller.sprint(&mut self.rig, value.as_bool()),
            Binding::Dodge => self.controller.dodge(&mut self.rig),
            Binding::AttackPrimary => {
                self.controller.attack_primary(&mut self.rig);
            }
            Binding::AttackSecondary => {
                self.controller.attack_secondary(&mut self.rig);
            }
        }
    }

    /// Primary attack outside the binding table; refused while input is unbound
    pub fn attack_primary(&mut self) -> Result<ComboTrigger> {
        self.bound_input()?;
        Ok(self.controller.attack_primary(&mut self.rig))
    }

    /// Secondary attack outside the binding table; refused while input is unbound
    pub fn attack_secondary(&mut self) -> Result<ComboTrigger> {
        self.bound_input()?;
        Ok(self.controller.attack_secondary(&mut self.rig))
    }

    pub fn play_montage_from_section(
        &mut self,
        montage: &MontageHandle,
        section: &str,
        rate: f32,
    ) -> Result<()> {
        self.bound_input()?;
        self.controller
            .play_montage_from_section(&mut self.rig, montage, section, rate);
        Ok(())
    }

    pub fn controller(&self) -> &ActionController {
        &self.controller
    }

    pub fn rig(&self) -> &R {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut R {
        &mut self.rig
    }

    pub fn into_rig(self) -> R {
        self.rig
    }
}
