pub mod config;
pub mod error;
pub mod types;

pub use config::{CharacterConfig, ComboConfig, DodgeConfig, RigSetup};
pub use error::{ActionError, Result};
pub use types::{MontageHandle, Seconds};
