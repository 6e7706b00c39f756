//! Combo track state machine
//!
//! A combo track walks through a fixed, ordered list of attack stages. Inputs
//! closer together than the cooldown are dropped; inputs more than twice the
//! cooldown apart break the chain and start again from the first stage.

use crate::core::config::ComboConfig;
use crate::core::types::{MontageHandle, Seconds};
use serde::{Deserialize, Serialize};

/// Which of the character's two combo tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComboSlot {
    Primary,
    Secondary,
}

/// Result of offering one input to a combo track
#[derive(Debug, Clone, PartialEq)]
pub enum ComboTrigger {
    /// Input arrived within the cooldown; the track did not change
    Rejected {
        /// Time since the last accepted input
        elapsed: Seconds,
    },
    /// Input was accepted and the track advanced
    Accepted {
        /// Stage that was resolved for this input
        stage: usize,
        /// Montage for that stage, if one is configured
        montage: Option<MontageHandle>,
        /// The chain had gone stale and restarted from the first stage
        chain_reset: bool,
    },
}

impl ComboTrigger {
    /// Montage to play, if the input was accepted and the stage has one
    pub fn montage(&self) -> Option<&MontageHandle> {
        match self {
            ComboTrigger::Accepted { montage, .. } => montage.as_ref(),
            ComboTrigger::Rejected { .. } => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ComboTrigger::Accepted { .. })
    }
}

/// One attack sequence: stage counter, cooldown gate and last input time
#[derive(Debug, Clone, PartialEq)]
pub struct ComboTrack {
    stages: Vec<Option<MontageHandle>>,
    current_stage: usize,
    cooldown: Seconds,
    /// `None` until the first accepted input
    last_input_time: Option<Seconds>,
}

impl ComboTrack {
    /// Create a track from its ordered stage montages.
    ///
    /// # Panics
    ///
    /// Panics if `stages` is empty or `cooldown` is not a positive finite
    /// number; use [`ComboConfig`] validation to reject bad data before it
    /// gets here.
    pub fn new(stages: Vec<Option<MontageHandle>>, cooldown: Seconds) -> Self {
        assert!(!stages.is_empty(), "combo track needs at least one stage");
        assert!(
            cooldown.is_finite() && cooldown > 0.0,
            "combo cooldown must be positive and finite, got {}",
            cooldown
        );
        Self {
            stages,
            current_stage: 0,
            cooldown,
            last_input_time: None,
        }
    }

    pub fn from_config(config: &ComboConfig) -> Self {
        Self::new(
            config.stages.iter().map(|s| s.montage.clone()).collect(),
            config.cooldown,
        )
    }

    /// Offer an input at time `now`.
    ///
    /// Acceptance requires strictly more than `cooldown` since the last
    /// accepted input. On acceptance, a gap of more than twice the cooldown
    /// first resets the stage to 0; the resolved stage's montage is returned
    /// (possibly absent) and the stage advances modulo the stage count.
    pub fn trigger(&mut self, now: Seconds) -> ComboTrigger {
        let elapsed = match self.last_input_time {
            Some(last) => now - last,
            None => Seconds::INFINITY,
        };

        if elapsed <= self.cooldown {
            return ComboTrigger::Rejected { elapsed };
        }

        let chain_reset = elapsed > self.cooldown * 2.0;
        if chain_reset {
            self.current_stage = 0;
        }

        let stage = self.current_stage;
        let montage = self.stages[stage].clone();

        self.current_stage = (stage + 1) % self.stages.len();
        self.last_input_time = Some(now);

        ComboTrigger::Accepted {
            stage,
            montage,
            chain_reset,
        }
    }

    /// Return to the spawn state: stage 0, never triggered
    pub fn reset(&mut self) {
        self.current_stage = 0;
        self.last_input_time = None;
    }

    /// Stage that the next accepted input will play (before any stale reset)
    pub fn current_stage(&self) -> usize {
        self.current_stage
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn cooldown(&self) -> Seconds {
        self.cooldown
    }

    pub fn last_input_time(&self) -> Option<Seconds> {
        self.last_input_time
    }

    pub fn stage_montage(&self, stage: usize) -> Option<&MontageHandle> {
        self.stages.get(stage).and_then(Option::as_ref)
    }
}
