//! Anime Third Person - player action layer
//!
//! Turns classified player input into locomotion, camera and combat montage
//! requests for a third-person action character. Physics, animation and
//! cameras live in the engine behind the traits in [`engine`].

pub mod character;
pub mod combat;
pub mod core;
pub mod engine;
pub mod input;
pub mod replay;
