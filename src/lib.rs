//! Gess rules engine library.
//!
//! Exposes the board representation, move validation, game bookkeeping,
//! and text protocol modules for use by integration tests and the binary
//! entry point.

pub mod board;
pub mod engine;
pub mod game;
pub mod protocol;
pub mod rules;
