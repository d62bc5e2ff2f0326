//! Core building blocks: balance constants, random source, combatant state.

#![allow(unused_imports)]

pub mod combatant;
pub mod constants;
pub mod dice;

pub use combatant::*;
pub use constants::*;
pub use dice::*;
