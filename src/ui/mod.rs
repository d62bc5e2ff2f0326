//! Plain-text terminal front end: menu loop, prompts and message formatting.

#![allow(unused_imports)]

pub mod input;
pub mod menu;
pub mod text;

pub use input::*;
pub use menu::*;
pub use text::*;
