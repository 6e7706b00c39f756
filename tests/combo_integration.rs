//! Combo track and dodge selection integration tests
//!
//! Covers the timing rules end to end: cooldown gate, stale-chain reset,
//! stage wraparound and track independence, plus property checks over
//! arbitrary input timings.

use anime_third_person::character::ActionController;
use anime_third_person::combat::{
    select_dodge_direction, ComboSlot, ComboTrack, ComboTrigger, DodgeAssets, DodgeDirection,
};
use anime_third_person::core::config::{CharacterConfig, ComboConfig, DodgeConfig};
use anime_third_person::core::types::MontageHandle;
use anime_third_person::engine::{CharacterBody, HeadlessRig, MovementSystem};
use glam::Vec3;
use proptest::prelude::*;

fn track(stage_count: usize, cooldown: f64) -> ComboTrack {
    ComboTrack::new(
        (0..stage_count)
            .map(|i| Some(MontageHandle::new(format!("AM_Stage_{}", i))))
            .collect(),
        cooldown,
    )
}

#[test]
fn test_cooldown_gate_boundary() {
    let c = 0.5;
    let t0 = 2.0;

    let mut exact = track(4, c);
    exact.trigger(t0);
    let result = exact.trigger(t0 + c);
    assert!(!result.is_accepted());
    assert!(result.montage().is_none());
    assert_eq!(exact.current_stage(), 1);
    assert_eq!(exact.last_input_time(), Some(t0));

    let mut past = track(4, c);
    past.trigger(t0);
    assert!(past.trigger(t0 + c + 1e-4).is_accepted());
    assert_eq!(past.current_stage(), 2);
}

#[test]
fn test_staleness_reset() {
    let c = 0.5;
    let mut combo = track(4, c);
    combo.trigger(0.0);
    assert_eq!(combo.current_stage(), 1);

    let result = combo.trigger(2.0 * c + 1e-4);
    assert_eq!(
        result,
        ComboTrigger::Accepted {
            stage: 0,
            montage: Some(MontageHandle::new("AM_Stage_0")),
            chain_reset: true,
        }
    );
    assert_eq!(combo.current_stage(), 1);
}

#[test]
fn test_stage_wraparound() {
    let mut combo = track(4, 0.5);
    let mut stages = vec![combo.current_stage()];
    for i in 1..=4 {
        combo.trigger(i as f64 * 0.6);
        stages.push(combo.current_stage());
    }
    assert_eq!(stages, vec![0, 1, 2, 3, 0]);
}

#[test]
fn test_end_to_end_primary_scenario() {
    let config = CharacterConfig {
        primary: ComboConfig::with_montages(
            0.5,
            [Some("AM_Light_1"), Some("AM_Light_2"), Some("AM_Light_3"), Some("AM_Light_4")],
        ),
        ..CharacterConfig::default()
    };
    let mut controller = ActionController::from_config(&config);
    let mut rig = HeadlessRig::new();

    rig.set_time(0.0);
    controller.attack_primary(&mut rig);
    assert_eq!(controller.track(ComboSlot::Primary).current_stage(), 1);

    rig.set_time(0.3);
    controller.attack_primary(&mut rig);
    assert_eq!(controller.track(ComboSlot::Primary).current_stage(), 1);

    rig.set_time(0.6);
    let result = controller.attack_primary(&mut rig);
    assert!(matches!(
        result,
        ComboTrigger::Accepted {
            stage: 1,
            chain_reset: false,
            ..
        }
    ));
    assert_eq!(controller.track(ComboSlot::Primary).current_stage(), 2);

    let played: Vec<_> = rig.playback().iter().map(|p| p.montage.name()).collect();
    assert_eq!(played, vec!["AM_Light_1", "AM_Light_2"]);
}

#[test]
fn test_secondary_untouched_by_primary() {
    let mut controller = ActionController::from_config(&CharacterConfig::default());
    let mut rig = HeadlessRig::new();

    for i in 0..6 {
        rig.set_time(i as f64 * 0.7);
        controller.attack_primary(&mut rig);
    }

    let secondary = controller.track(ComboSlot::Secondary);
    assert_eq!(secondary.current_stage(), 0);
    assert_eq!(secondary.last_input_time(), None);
}

#[test]
fn test_dodge_tie_break() {
    assert_eq!(select_dodge_direction(Vec3::ZERO, Vec3::X), DodgeDirection::Backward);
    assert_eq!(select_dodge_direction(Vec3::X, Vec3::X), DodgeDirection::Forward);
    assert_eq!(select_dodge_direction(Vec3::NEG_X, Vec3::X), DodgeDirection::Backward);
}

#[test]
fn test_absent_backward_dodge_is_inert() {
    let config = CharacterConfig {
        dodge: DodgeConfig {
            forward: Some("AM_Roll".into()),
            backward: None,
        },
        ..CharacterConfig::default()
    };
    let controller = ActionController::from_config(&config);
    let mut rig = HeadlessRig::new();
    assert_eq!(
        select_dodge_direction(rig.velocity(), rig.forward()),
        DodgeDirection::Backward
    );

    controller.dodge(&mut rig);
    assert!(rig.playback().is_empty());
    assert!(DodgeAssets::from_config(&config.dodge).montage_for(DodgeDirection::Forward).is_none());
}

#[test]
fn test_sprint_idempotent() {
    let config = CharacterConfig {
        sprint_max_walk_speed: 900.0,
        ..CharacterConfig::default()
    };
    let controller = ActionController::from_config(&config);
    let mut rig = HeadlessRig::new();

    controller.sprint(&mut rig, true);
    let after_first = rig.max_walk_speed();
    controller.sprint(&mut rig, true);
    assert_eq!(after_first, 900.0);
    assert_eq!(rig.max_walk_speed(), 900.0);
}

proptest! {
    #[test]
    fn prop_stage_stays_in_range(
        stage_count in 1usize..8,
        cooldown in 0.05f64..2.0,
        gaps in prop::collection::vec(0.0f64..5.0, 1..40),
    ) {
        let mut combo = track(stage_count, cooldown);
        let mut now = 0.0;
        for gap in gaps {
            now += gap;
            combo.trigger(now);
            prop_assert!(combo.current_stage() < stage_count);
        }
    }

    #[test]
    fn prop_rejection_leaves_track_unchanged(
        cooldown in 0.05f64..2.0,
        first in 0.0f64..100.0,
        fraction in 0.0f64..0.99,
    ) {
        let mut combo = track(4, cooldown);
        combo.trigger(first);
        let before = combo.clone();

        let result = combo.trigger(first + cooldown * fraction);
        prop_assert!(!result.is_accepted());
        prop_assert_eq!(combo, before);
    }

    #[test]
    fn prop_accepted_inputs_are_spaced_beyond_cooldown(
        cooldown in 0.05f64..1.0,
        gaps in prop::collection::vec(0.0f64..2.5, 1..40),
    ) {
        let mut combo = track(4, cooldown);
        let mut now = 0.0;
        let mut accepted: Vec<f64> = Vec::new();
        for gap in gaps {
            now += gap;
            if combo.trigger(now).is_accepted() {
                accepted.push(now);
            }
        }
        for pair in accepted.windows(2) {
            prop_assert!(pair[1] - pair[0] > cooldown);
        }
    }
}
