//! Headless input replay
//!
//! Feeds a recorded input script through a character on a [`HeadlessRig`]
//! and reports what the character asked the engine to play.

use crate::character::{Character, Dispatch};
use crate::combat::ComboSlot;
use crate::core::config::CharacterConfig;
use crate::core::error::{ActionError, Result};
use crate::core::types::Seconds;
use crate::engine::{HeadlessRig, MovementSystem, PlaybackRecord};
use crate::input::{InputCapability, InputEvent};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Recorded input, one entry per simulated frame that had events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    #[serde(default)]
    pub frames: Vec<ScriptFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    pub time: Seconds,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl InputScript {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let script: InputScript = toml::from_str(content)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Frame times must be finite, non-negative and non-decreasing
    pub fn validate(&self) -> Result<()> {
        let mut previous: Seconds = 0.0;
        for (i, frame) in self.frames.iter().enumerate() {
            if !frame.time.is_finite() || frame.time < 0.0 {
                return Err(ActionError::InvalidScript(format!(
                    "frame {} has invalid time t={}; times must be finite and non-negative",
                    i, frame.time
                )));
            }
            if frame.time < previous {
                return Err(ActionError::InvalidScript(format!(
                    "frame {} at t={} goes back in time (previous t={})",
                    i, frame.time, previous
                )));
            }
            previous = frame.time;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComboSnapshot {
    pub current_stage: usize,
    pub stage_count: usize,
    pub last_input_time: Option<Seconds>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub final_time: Seconds,
    pub events_handled: usize,
    pub events_ignored: usize,
    pub playback: Vec<PlaybackRecord>,
    pub primary: ComboSnapshot,
    pub secondary: ComboSnapshot,
    pub max_walk_speed: f32,
}

/// Run `script` against a freshly spawned character
pub fn replay(config: &CharacterConfig, script: &InputScript) -> Result<ReplayReport> {
    script.validate()?;

    let mut character = Character::spawn(config, HeadlessRig::new())?;
    character.setup_input(InputCapability::Enhanced)?;

    let mut handled = 0;
    let mut ignored = 0;
    let mut clock: Seconds = 0.0;

    for frame in &script.frames {
        character.rig_mut().advance(frame.time - clock);
        // Land exactly on the scripted time rather than on accumulated dt
        character.rig_mut().set_time(frame.time);
        clock = frame.time;

        for event in &frame.events {
            match character.handle_input(*event)? {
                Dispatch::Handled(binding) => {
                    tracing::trace!(?binding, time = frame.time, "replayed");
                    handled += 1;
                }
                Dispatch::Ignored => ignored += 1,
            }
        }
    }

    let snapshot = |slot: ComboSlot| {
        let track = character.controller().track(slot);
        ComboSnapshot {
            current_stage: track.current_stage(),
            stage_count: track.stage_count(),
            last_input_time: track.last_input_time(),
        }
    };
    let primary = snapshot(ComboSlot::Primary);
    let secondary = snapshot(ComboSlot::Secondary);

    let mut rig = character.into_rig();
    Ok(ReplayReport {
        final_time: clock,
        events_handled: handled,
        events_ignored: ignored,
        max_walk_speed: rig.max_walk_speed(),
        playback: rig.take_playback(),
        primary,
        secondary,
    })
}
