//! Utility modules: build info, data directory, event log.

#![allow(unused_imports)]

pub mod build_info;
pub mod event_log;
pub mod persistence;

pub use build_info::*;
pub use event_log::*;
