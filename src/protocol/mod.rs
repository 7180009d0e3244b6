//! Line protocol handling.
//!
//! Parses the game engine's text commands into structured `Command` values
//! and formats the bot's replies.

pub mod format;
pub mod parser;

pub use format::{format_placements, format_starting_region, format_transfers, NO_MOVES};
pub use parser::{parse_command, Command, OwnershipUpdate, ProtocolError, Setting, SetupMap};
