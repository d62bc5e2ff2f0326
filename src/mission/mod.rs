//! Missions: difficulty and enemy selection around a single encounter.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
