//! ue-sound-extract library
//!
//! Command and utility modules behind the `ue-sound-extract` binary.

pub mod cli;
pub mod commands;
pub mod utils;
