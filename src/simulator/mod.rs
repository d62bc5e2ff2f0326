//! Game balance simulator for Monte Carlo analysis.
//!
//! Plays many back-to-back mission chains with the [`AutoPilot`] controller
//! and reports how far characters of a class get before falling:
//! - Survival and win rates
//! - Final level reached
//! - Win rate per enemy kind
//!
//! Missions run through the same `Mission::run` the menu uses.
//!
//! [`AutoPilot`]: crate::combat::AutoPilot

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{KindStats, SimReport};
pub use runner::{run_simulation, simulate_single_run, RunStats};
