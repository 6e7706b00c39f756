//! Engine-side collaborators
//!
//! The action layer never owns physics, cameras or animation playback. It
//! talks to the engine through these traits; a real game wires them to its
//! character, and [`headless::HeadlessRig`] implements them in memory.

pub mod headless;

use crate::core::config::RigSetup;
use crate::core::types::{MontageHandle, Seconds};
use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use headless::{HeadlessRig, PlaybackRecord};

/// Play rate used when a caller does not ask for one
pub const DEFAULT_PLAY_RATE: f32 = 1.0;

/// Euler rotation in degrees, Z-up with X forward and Y right
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Same heading with pitch and roll dropped
    pub fn yaw_only(&self) -> Self {
        Self::new(0.0, self.yaw, 0.0)
    }

    /// Unit X axis of this rotation
    pub fn forward_vector(&self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(cp * cy, cp * sy, sp)
    }

    /// Unit Y axis of the heading (roll is ignored)
    pub fn right_vector(&self) -> Vec3 {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(-sy, cy, 0.0)
    }
}

/// Monotonic simulation clock
pub trait SimClock {
    fn now(&self) -> Seconds;
}

/// Read access to the simulated character
pub trait CharacterBody {
    fn velocity(&self) -> Vec3;

    /// Unit facing vector of the character
    fn forward(&self) -> Vec3;

    /// Control rotation of the possessing controller, `None` if unpossessed
    fn control_rotation(&self) -> Option<Rotator>;
}

/// The engine's movement component
pub trait MovementSystem {
    /// Accumulate movement intent along a world direction for this frame
    fn add_movement_input(&mut self, direction: Vec3, scale: f32);
    fn set_max_walk_speed(&mut self, speed: f32);
    fn max_walk_speed(&self) -> f32;
    fn jump(&mut self);
    fn stop_jumping(&mut self);
}

/// The possessing controller's rotation input
pub trait ControllerRotation {
    fn add_yaw_input(&mut self, delta: f32);
    fn add_pitch_input(&mut self, delta: f32);
}

/// Animation montage playback on the character mesh
pub trait MontagePlayer {
    /// Start `montage` immediately, jumping to `section` first when given
    fn play(&mut self, montage: &MontageHandle, section: Option<&str>, rate: f32);
}

/// Everything the action layer needs from the engine for one character
pub trait CharacterRig:
    SimClock + CharacterBody + MovementSystem + ControllerRotation + MontagePlayer
{
    /// Apply capsule, movement and camera setup once at spawn
    fn apply_setup(&mut self, setup: &RigSetup);
}
