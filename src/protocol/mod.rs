//! Text protocol handling.
//!
//! Coordinate notation and the command parser used by the main loop.

pub mod notation;
pub mod parser;

pub use notation::{format_cell, parse_cell, parse_center, NotationError};
pub use parser::{parse_command, Command};
