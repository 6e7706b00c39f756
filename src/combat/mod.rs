pub mod combo;
pub mod dodge;

pub use combo::{ComboSlot, ComboTrack, ComboTrigger};
pub use dodge::{select_dodge_direction, DodgeAssets, DodgeDirection};
