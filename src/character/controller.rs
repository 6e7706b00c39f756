//! Per-character action controller
//!
//! Owns the two combo tracks, the dodge montages and the walk speeds, and
//! turns each player action into engine calls on the rig it is handed.

use crate::combat::{select_dodge_direction, ComboSlot, ComboTrack, ComboTrigger, DodgeAssets};
use crate::core::config::CharacterConfig;
use crate::core::types::MontageHandle;
use crate::engine::{CharacterRig, DEFAULT_PLAY_RATE};
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct ActionController {
    primary: ComboTrack,
    secondary: ComboTrack,
    dodge: DodgeAssets,
    default_max_walk_speed: f32,
    sprint_max_walk_speed: f32,
}

impl ActionController {
    /// Build from an already validated config
    pub fn from_config(config: &CharacterConfig) -> Self {
        Self {
            primary: ComboTrack::from_config(&config.primary),
            secondary: ComboTrack::from_config(&config.secondary),
            dodge: DodgeAssets::from_config(&config.dodge),
            default_max_walk_speed: config.default_max_walk_speed,
            sprint_max_walk_speed: config.sprint_max_walk_speed,
        }
    }

    /// Move along the camera heading: Y is forward, X is right
    pub fn move_input<R: CharacterRig + ?Sized>(&self, rig: &mut R, axis: Vec2) {
        let Some(control) = rig.control_rotation() else {
            return;
        };
        let heading = control.yaw_only();
        tracing::trace!(x = axis.x, y = axis.y, yaw = heading.yaw, "move");
        rig.add_movement_input(heading.forward_vector(), axis.y);
        rig.add_movement_input(heading.right_vector(), axis.x);
    }

    /// Forward look deltas to the controller; X is yaw, Y is pitch
    pub fn look<R: CharacterRig + ?Sized>(&self, rig: &mut R, axis: Vec2) {
        if rig.control_rotation().is_none() {
            return;
        }
        tracing::trace!(yaw = axis.x, pitch = axis.y, "look");
        rig.add_yaw_input(axis.x);
        rig.add_pitch_input(axis.y);
    }

    pub fn sprint<R: CharacterRig + ?Sized>(&self, rig: &mut R, active: bool) {
        let speed = if active {
            self.sprint_max_walk_speed
        } else {
            self.default_max_walk_speed
        };
        rig.set_max_walk_speed(speed);
    }

    /// Roll forward when moving ahead, backstep otherwise.
    ///
    /// No cooldown: every press plays, even mid-dodge.
    pub fn dodge<R: CharacterRig + ?Sized>(&self, rig: &mut R) {
        let direction = select_dodge_direction(rig.velocity(), rig.forward());
        match self.dodge.montage_for(direction) {
            Some(montage) => {
                tracing::debug!(?direction, %montage, "dodge");
                rig.play(montage, None, DEFAULT_PLAY_RATE);
            }
            None => tracing::trace!(?direction, "dodge montages not set"),
        }
    }

    pub fn attack_primary<R: CharacterRig + ?Sized>(&mut self, rig: &mut R) -> ComboTrigger {
        self.attack(ComboSlot::Primary, rig)
    }

    pub fn attack_secondary<R: CharacterRig + ?Sized>(&mut self, rig: &mut R) -> ComboTrigger {
        self.attack(ComboSlot::Secondary, rig)
    }

    fn attack<R: CharacterRig + ?Sized>(&mut self, slot: ComboSlot, rig: &mut R) -> ComboTrigger {
        let now = rig.now();
        let result = self.track_mut(slot).trigger(now);

        match &result {
            ComboTrigger::Accepted {
                stage,
                montage,
                chain_reset,
            } => {
                tracing::debug!(?slot, stage, chain_reset, now, "combo input accepted");
                if let Some(montage) = montage {
                    rig.play(montage, None, DEFAULT_PLAY_RATE);
                }
            }
            ComboTrigger::Rejected { elapsed } => {
                tracing::debug!(?slot, elapsed, now, "combo input within cooldown");
            }
        }

        result
    }

    pub fn jump<R: CharacterRig + ?Sized>(&self, rig: &mut R) {
        rig.jump();
    }

    pub fn stop_jumping<R: CharacterRig + ?Sized>(&self, rig: &mut R) {
        rig.stop_jumping();
    }

    /// Play `montage` starting at a named section
    pub fn play_montage_from_section<R: CharacterRig + ?Sized>(
        &self,
        rig: &mut R,
        montage: &MontageHandle,
        section: &str,
        rate: f32,
    ) {
        tracing::debug!(%montage, section, rate, "play from section");
        rig.play(montage, Some(section), rate);
    }

    pub fn track(&self, slot: ComboSlot) -> &ComboTrack {
        match slot {
            ComboSlot::Primary => &self.primary,
            ComboSlot::Secondary => &self.secondary,
        }
    }

    fn track_mut(&mut self, slot: ComboSlot) -> &mut ComboTrack {
        match slot {
            ComboSlot::Primary => &mut self.primary,
            ComboSlot::Secondary => &mut self.secondary,
        }
    }

    pub fn dodge_assets(&self) -> &DodgeAssets {
        &self.dodge
    }

    pub fn default_max_walk_speed(&self) -> f32 {
        self.default_max_walk_speed
    }

    pub fn sprint_max_walk_speed(&self) -> f32 {
        self.sprint_max_walk_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ComboConfig, DodgeConfig};
    use crate::engine::{CharacterBody, HeadlessRig, MovementSystem, Rotator};
    use glam::Vec3;

    fn config() -> CharacterConfig {
        CharacterConfig {
            default_max_walk_speed: 500.0,
            sprint_max_walk_speed: 800.0,
            primary: ComboConfig::with_montages(
                0.5,
                [Some("AM_P1"), Some("AM_P2"), Some("AM_P3"), Some("AM_P4")],
            ),
            secondary: ComboConfig::with_montages(
                0.8,
                [Some("AM_S1"), None, Some("AM_S3"), Some("AM_S4")],
            ),
            dodge: DodgeConfig {
                forward: Some("AM_Roll".into()),
                backward: Some("AM_Backstep".into()),
            },
            ..CharacterConfig::default()
        }
    }

    fn played(rig: &HeadlessRig) -> Vec<&str> {
        rig.playback().iter().map(|p| p.montage.name()).collect()
    }

    #[test]
    fn test_primary_scenario() {
        let mut controller = ActionController::from_config(&config());
        let mut rig = HeadlessRig::new();

        rig.set_time(0.0);
        assert!(controller.attack_primary(&mut rig).is_accepted());
        rig.set_time(0.3);
        assert!(!controller.attack_primary(&mut rig).is_accepted());
        assert_eq!(controller.track(ComboSlot::Primary).current_stage(), 1);
        rig.set_time(0.6);
        assert!(controller.attack_primary(&mut rig).is_accepted());

        assert_eq!(played(&rig), vec!["AM_P1", "AM_P2"]);
        assert_eq!(controller.track(ComboSlot::Primary).current_stage(), 2);
        assert!(rig.playback().iter().all(|p| p.section.is_none() && p.rate == 1.0));
    }

    #[test]
    fn test_tracks_are_independent() {
        let mut controller = ActionController::from_config(&config());
        let mut rig = HeadlessRig::new();

        controller.attack_primary(&mut rig);
        rig.set_time(0.1);
        assert!(controller.attack_secondary(&mut rig).is_accepted());

        let primary = controller.track(ComboSlot::Primary);
        let secondary = controller.track(ComboSlot::Secondary);
        assert_eq!(primary.last_input_time(), Some(0.0));
        assert_eq!(secondary.last_input_time(), Some(0.1));
        assert_eq!(played(&rig), vec!["AM_P1", "AM_S1"]);
    }

    #[test]
    fn test_absent_stage_plays_nothing_but_advances() {
        let mut controller = ActionController::from_config(&config());
        let mut rig = HeadlessRig::new();

        controller.attack_secondary(&mut rig);
        rig.set_time(1.0);
        let result = controller.attack_secondary(&mut rig);
        assert!(result.is_accepted());
        assert!(result.montage().is_none());
        assert_eq!(played(&rig), vec!["AM_S1"]);
        assert_eq!(controller.track(ComboSlot::Secondary).current_stage(), 2);
    }

    #[test]
    fn test_sprint_toggles_speed() {
        let controller = ActionController::from_config(&config());
        let mut rig = HeadlessRig::new();

        controller.sprint(&mut rig, true);
        controller.sprint(&mut rig, true);
        assert_eq!(rig.max_walk_speed(), 800.0);
        controller.sprint(&mut rig, false);
        assert_eq!(rig.max_walk_speed(), 500.0);
    }

    #[test]
    fn test_dodge_picks_by_velocity() {
        let controller = ActionController::from_config(&config());
        let mut rig = HeadlessRig::new();

        rig.set_velocity(Vec3::new(400.0, 0.0, 0.0));
        controller.dodge(&mut rig);
        rig.set_velocity(Vec3::ZERO);
        controller.dodge(&mut rig);
        controller.dodge(&mut rig);

        assert_eq!(played(&rig), vec!["AM_Roll", "AM_Backstep", "AM_Backstep"]);
    }

    #[test]
    fn test_dodge_inert_without_both_montages() {
        let mut cfg = config();
        cfg.dodge.backward = None;
        let controller = ActionController::from_config(&cfg);
        let mut rig = HeadlessRig::new();

        controller.dodge(&mut rig);
        rig.set_velocity(Vec3::X);
        controller.dodge(&mut rig);
        assert!(rig.playback().is_empty());
    }

    #[test]
    fn test_move_follows_control_yaw() {
        let controller = ActionController::from_config(&config());
        let mut rig = HeadlessRig::new();
        rig.set_control_rotation(Rotator::new(-20.0, 90.0, 0.0));

        controller.move_input(&mut rig, Vec2::new(0.0, 1.0));
        assert!((rig.pending_movement() - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_move_and_look_need_a_controller() {
        let controller = ActionController::from_config(&config());
        let mut rig = HeadlessRig::new();
        rig.unpossess();

        controller.move_input(&mut rig, Vec2::new(1.0, 1.0));
        controller.look(&mut rig, Vec2::new(5.0, 5.0));
        assert_eq!(rig.pending_movement(), Vec3::ZERO);
        assert!(rig.control_rotation().is_none());
    }

    #[test]
    fn test_look_adds_yaw_and_pitch() {
        let controller = ActionController::from_config(&config());
        let mut rig = HeadlessRig::new();

        controller.look(&mut rig, Vec2::new(3.0, -2.0));
        controller.look(&mut rig, Vec2::new(1.0, 0.0));
        assert_eq!(rig.control_rotation(), Some(Rotator::new(-2.0, 4.0, 0.0)));
    }

    #[test]
    fn test_play_from_section() {
        let controller = ActionController::from_config(&config());
        let mut rig = HeadlessRig::new();

        controller.play_montage_from_section(&mut rig, &"AM_P3".into(), "Recovery", 1.5);
        let record = &rig.playback()[0];
        assert_eq!(record.section.as_deref(), Some("Recovery"));
        assert_eq!(record.rate, 1.5);
    }
}
