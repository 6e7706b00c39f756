//! Character configuration with documented defaults
//!
//! Every tunable the action layer reads is collected here. Defaults match the
//! values the character shipped with; per-character overrides are loaded from
//! TOML (see `data/characters/`).

use crate::core::error::{ActionError, Result};
use crate::core::types::{MontageHandle, Seconds};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of stages in a combo track unless configured otherwise
pub const DEFAULT_STAGE_COUNT: usize = 4;

/// Minimum spacing between accepted combo inputs (seconds)
pub const DEFAULT_COMBO_COOLDOWN: Seconds = 0.5;

/// Everything needed to spawn one player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    // === LOCOMOTION ===
    /// Max walk speed while not sprinting (units/s)
    pub default_max_walk_speed: f32,

    /// Max walk speed while the sprint input is held (units/s)
    ///
    /// Normally >= `default_max_walk_speed`. The shipped character uses the
    /// same value for both and tunes sprint per asset.
    pub sprint_max_walk_speed: f32,

    // === COMBAT ===
    /// Primary attack combo (light attacks)
    pub primary: ComboConfig,

    /// Secondary attack combo (heavy attacks)
    pub secondary: ComboConfig,

    /// Dodge montages
    pub dodge: DodgeConfig,

    // === ENGINE RIG ===
    /// Capsule, movement and camera setup handed to the engine at spawn
    pub rig: RigSetup,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            default_max_walk_speed: 500.0,
            sprint_max_walk_speed: 500.0,
            primary: ComboConfig::default(),
            secondary: ComboConfig::default(),
            dodge: DodgeConfig::default(),
            rig: RigSetup::default(),
        }
    }
}

impl CharacterConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CharacterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        for (name, speed) in [
            ("default_max_walk_speed", self.default_max_walk_speed),
            ("sprint_max_walk_speed", self.sprint_max_walk_speed),
        ] {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(ActionError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, speed
                )));
            }
        }

        if self.sprint_max_walk_speed < self.default_max_walk_speed {
            tracing::warn!(
                sprint = self.sprint_max_walk_speed,
                base = self.default_max_walk_speed,
                "sprint speed is slower than walk speed"
            );
        }

        self.primary.validate("primary")?;
        self.secondary.validate("secondary")?;
        Ok(())
    }
}

/// One combo track's tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboConfig {
    /// Minimum spacing between accepted inputs (seconds)
    ///
    /// A pause longer than twice this value breaks the chain and the next
    /// accepted input starts again from the first stage.
    pub cooldown: Seconds,

    /// Ordered stages; the length is the track's stage count
    pub stages: Vec<StageConfig>,
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COMBO_COOLDOWN,
            stages: vec![StageConfig::default(); DEFAULT_STAGE_COUNT],
        }
    }
}

impl ComboConfig {
    /// Build a config from montage handles, one per stage
    pub fn with_montages<I, M>(cooldown: Seconds, montages: I) -> Self
    where
        I: IntoIterator<Item = Option<M>>,
        M: Into<MontageHandle>,
    {
        Self {
            cooldown,
            stages: montages
                .into_iter()
                .map(|montage| StageConfig {
                    montage: montage.map(Into::into),
                })
                .collect(),
        }
    }

    fn validate(&self, track: &str) -> Result<()> {
        if !self.cooldown.is_finite() || self.cooldown <= 0.0 {
            return Err(ActionError::InvalidConfig(format!(
                "{} cooldown must be positive, got {}",
                track, self.cooldown
            )));
        }
        if self.stages.is_empty() {
            return Err(ActionError::InvalidConfig(format!(
                "{} combo needs at least one stage",
                track
            )));
        }
        Ok(())
    }
}

/// A single combo stage; an absent montage is a silent stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub montage: Option<MontageHandle>,
}

/// Dodge montages; dodge is inert unless both are set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DodgeConfig {
    pub forward: Option<MontageHandle>,
    pub backward: Option<MontageHandle>,
}

/// Engine-side setup applied once when the character spawns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigSetup {
    pub capsule: CapsuleSetup,
    pub movement: MovementTuning,
    pub camera: CameraBoomSetup,

    /// The pawn ignores controller pitch/yaw/roll; only the camera follows it
    pub use_controller_rotation_pitch: bool,
    pub use_controller_rotation_yaw: bool,
    pub use_controller_rotation_roll: bool,
}

/// Collision capsule size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsuleSetup {
    pub radius: f32,
    pub half_height: f32,
}

impl Default for CapsuleSetup {
    fn default() -> Self {
        Self {
            radius: 42.0,
            half_height: 96.0,
        }
    }
}

/// Movement component tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Character turns to face its movement direction
    pub orient_rotation_to_movement: bool,
    /// Yaw turn rate while orienting to movement (degrees/s)
    pub rotation_rate_yaw: f32,
    pub jump_z_velocity: f32,
    pub air_control: f32,
    pub min_analog_walk_speed: f32,
    pub braking_deceleration_walking: f32,
    pub braking_deceleration_falling: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            orient_rotation_to_movement: true,
            rotation_rate_yaw: 500.0,
            jump_z_velocity: 700.0,
            air_control: 0.35,
            min_analog_walk_speed: 20.0,
            braking_deceleration_walking: 2000.0,
            braking_deceleration_falling: 1500.0,
        }
    }
}

/// Third-person camera boom
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraBoomSetup {
    /// Distance the camera trails behind the character
    pub target_arm_length: f32,
    /// Boom rotates with the controller
    pub boom_uses_control_rotation: bool,
    /// Camera stays fixed relative to the boom
    pub camera_uses_control_rotation: bool,
}

impl Default for CameraBoomSetup {
    fn default() -> Self {
        Self {
            target_arm_length: 400.0,
            boom_uses_control_rotation: true,
            camera_uses_control_rotation: false,
        }
    }
}
