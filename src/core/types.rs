//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Simulation time in seconds (the engine clock is double precision)
pub type Seconds = f64;

/// Opaque reference to a playable animation montage
///
/// The name is the engine's asset path or identifier; this crate never
/// interprets it beyond equality and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MontageHandle(Arc<str>);

impl MontageHandle {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MontageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MontageHandle {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MontageHandle {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}
