//! Board representation.
//!
//! Contains the territory graph, continents with their derived border data,
//! the game-wide state and the order types the planners emit.

pub mod borders;
pub mod continent;
pub mod graph;
pub mod order;
pub mod state;
pub mod territory;

pub use borders::recompute_borders;
pub use continent::{Continent, ContinentId};
pub use graph::{GraphError, TerritoryGraph};
pub use order::{Placement, Transfer};
pub use state::{GameState, NEUTRAL_PLAYER};
pub use territory::{Owner, Territory, TerritoryId, TerritoryStatus};
