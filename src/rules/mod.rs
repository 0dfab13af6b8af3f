//! Move legality.
//!
//! Validates proposed moves against the Gess movement rules and commits
//! them to the board once every gate has passed.

pub mod movement;

pub use movement::{Move, Rejection};
