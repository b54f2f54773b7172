//! Scenes, choices and the effects attached to them.

mod effect;
mod node;

pub use effect::Effect;
pub use node::{Choice, Scene};
