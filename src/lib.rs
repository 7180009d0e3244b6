//! foothold: a territory-control game bot.
//!
//! Exposes the board model, the placement and transfer planners, the
//! configuration and the protocol layer for use by integration tests and the
//! binary entry point.

pub mod board;
pub mod config;
pub mod engine;
pub mod plan;
pub mod protocol;
