//! Shopping sessions hosted by a ResourceActor, with cart actions.

mod actions;
pub mod entity;

pub use actions::*;
