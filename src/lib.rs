//! Quest RPG - turn-based text RPG library.
//!
//! Exposes the combat and progression engine, missions, persistence and the
//! text front end for the binaries, tests and the balance simulator.

pub mod character;
pub mod combat;
pub mod core;
pub mod mission;
pub mod simulator;
pub mod ui;
pub mod utils;
