//! Shared utilities for the ue-sound-extract CLI

pub mod io;
pub mod progress;
pub mod status;
pub mod table;

pub use io::*;
pub use progress::*;
pub use status::*;
pub use table::*;
