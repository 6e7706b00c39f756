//! Dodge direction selection
//!
//! The dodge plays a forward roll when the character is moving the way it
//! faces and a backstep otherwise.

use crate::core::config::DodgeConfig;
use crate::core::types::MontageHandle;
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DodgeDirection {
    Forward,
    Backward,
}

/// Classify a dodge from the current velocity and facing.
///
/// Forward only when the normalized velocity points strictly ahead. Standing
/// still, moving sideways or moving backwards all dodge backward.
pub fn select_dodge_direction(velocity: Vec3, forward: Vec3) -> DodgeDirection {
    let dot = velocity.normalize_or_zero().dot(forward);
    if dot > 0.0 {
        DodgeDirection::Forward
    } else {
        DodgeDirection::Backward
    }
}

/// The pair of dodge montages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DodgeAssets {
    pub forward: Option<MontageHandle>,
    pub backward: Option<MontageHandle>,
}

impl DodgeAssets {
    pub fn new(forward: Option<MontageHandle>, backward: Option<MontageHandle>) -> Self {
        Self { forward, backward }
    }

    pub fn from_config(config: &DodgeConfig) -> Self {
        Self::new(config.forward.clone(), config.backward.clone())
    }

    /// Dodge only works with both montages present
    pub fn is_complete(&self) -> bool {
        self.forward.is_some() && self.backward.is_some()
    }

    /// Montage for `direction`, or `None` if either montage is missing
    pub fn montage_for(&self, direction: DodgeDirection) -> Option<&MontageHandle> {
        if !self.is_complete() {
            return None;
        }
        match direction {
            DodgeDirection::Forward => self.forward.as_ref(),
            DodgeDirection::Backward => self.backward.as_ref(),
        }
    }
}
