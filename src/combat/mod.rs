//! Combat system types and logic.

#![allow(unused_imports)]

pub mod autopilot;
pub mod logic;
pub mod types;

pub use autopilot::*;
pub use logic::*;
pub use types::*;
