//! In-memory character rig
//!
//! No physics: velocity is the last frame's movement intent scaled by the
//! max walk speed, and facing turns toward it at the configured yaw rate.

use crate::core::config::RigSetup;
use crate::core::types::{MontageHandle, Seconds};
use crate::engine::{
    CharacterBody, CharacterRig, ControllerRotation, MontagePlayer, MovementSystem, Rotator,
    SimClock,
};
use glam::Vec3;
use serde::Serialize;

/// One montage playback request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackRecord {
    pub time: Seconds,
    pub montage: MontageHandle,
    pub section: Option<String>,
    pub rate: f32,
}

#[derive(Debug, Clone)]
pub struct HeadlessRig {
    time: Seconds,
    velocity: Vec3,
    forward: Vec3,
    control: Option<Rotator>,
    pending_input: Vec3,
    max_walk_speed: f32,
    jumping: bool,
    setup: Option<RigSetup>,
    playback: Vec<PlaybackRecord>,
}

impl Default for HeadlessRig {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessRig {
    /// Possessed rig at rest, facing +X at time 0
    pub fn new() -> Self {
        Self {
            time: 0.0,
            velocity: Vec3::ZERO,
            forward: Vec3::X,
            control: Some(Rotator::default()),
            pending_input: Vec3::ZERO,
            max_walk_speed: 0.0,
            jumping: false,
            setup: None,
            playback: Vec::new(),
        }
    }

    pub fn set_time(&mut self, time: Seconds) {
        self.time = time;
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Set the facing direction; zero vectors are ignored
    pub fn set_forward(&mut self, forward: Vec3) {
        if let Some(dir) = forward.try_normalize() {
            self.forward = dir;
        }
    }

    pub fn set_control_rotation(&mut self, rotation: Rotator) {
        self.control = Some(rotation);
    }

    /// Drop the controller, as when the pawn is unpossessed
    pub fn unpossess(&mut self) {
        self.control = None;
    }

    /// Step the clock and turn this frame's movement intent into velocity
    pub fn advance(&mut self, dt: Seconds) {
        self.time += dt;

        let intent = self.pending_input.clamp_length_max(1.0);
        self.velocity = intent * self.max_walk_speed;
        self.pending_input = Vec3::ZERO;

        let orient = self
            .setup
            .as_ref()
            .map(|s| (s.movement.orient_rotation_to_movement, s.movement.rotation_rate_yaw));
        if let Some((true, rate)) = orient {
            if self.velocity.length_squared() > 0.0 {
                self.turn_toward(self.velocity, rate * dt as f32);
            }
        }
    }

    fn turn_toward(&mut self, target: Vec3, max_degrees: f32) {
        let current_yaw = self.forward.y.atan2(self.forward.x).to_degrees();
        let target_yaw = target.y.atan2(target.x).to_degrees();
        let delta = (target_yaw - current_yaw + 540.0).rem_euclid(360.0) - 180.0;
        let step = delta.clamp(-max_degrees, max_degrees);
        self.forward = Rotator::new(0.0, current_yaw + step, 0.0).forward_vector();
    }

    /// Movement intent accumulated since the last `advance`
    pub fn pending_movement(&self) -> Vec3 {
        self.pending_input
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn setup(&self) -> Option<&RigSetup> {
        self.setup.as_ref()
    }

    pub fn playback(&self) -> &[PlaybackRecord] {
        &self.playback
    }

    pub fn take_playback(&mut self) -> Vec<PlaybackRecord> {
        std::mem::take(&mut self.playback)
    }
}

impl SimClock for HeadlessRig {
    fn now(&self) -> Seconds {
        self.time
    }
}

impl CharacterBody for HeadlessRig {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }

    fn control_rotation(&self) -> Option<Rotator> {
        self.control
    }
}

impl MovementSystem for HeadlessRig {
    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.pending_input += direction * scale;
    }

    fn set_max_walk_speed(&mut self, speed: f32) {
        self.max_walk_speed = speed;
    }

    fn max_walk_speed(&self) -> f32 {
        self.max_walk_speed
    }

    fn jump(&mut self) {
        self.jumping = true;
    }

    fn stop_jumping(&mut self) {
        self.jumping = false;
    }
}

impl ControllerRotation for HeadlessRig {
    fn add_yaw_input(&mut self, delta: f32) {
        if let Some(control) = self.control.as_mut() {
            control.yaw += delta;
        }
    }

    fn add_pitch_input(&mut self, delta: f32) {
        if let Some(control) = self.control.as_mut() {
            control.pitch += delta;
        }
    }
}

impl MontagePlayer for HeadlessRig {
    fn play(&mut self, montage: &MontageHandle, section: Option<&str>, rate: f32) {
        self.playback.push(PlaybackRecord {
            time: self.time,
            montage: montage.clone(),
            section: section.map(str::to_string),
            rate,
        });
    }
}

impl CharacterRig for HeadlessRig {
    fn apply_setup(&mut self, setup: &RigSetup) {
        self.setup = Some(setup.clone());
    }
}
