//! Territories and their owners.
//!
//! A territory is a single node of the game graph. Its owner and army count
//! are overwritten every turn; its adjacency and continent are fixed at setup.

/// Wire identifier of a territory, as sent by the game engine.
pub type TerritoryId = u32;

/// Who holds a territory, from the agent's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The agent itself.
    Me,
    Opponent,
    Neutral,
    /// Not visible this turn (fog of war) or an unregistered player name.
    Unknown,
}

impl Owner {
    /// Returns true for territories held by anyone but the agent, including
    /// territories hidden by fog.
    pub const fn is_foreign(self) -> bool {
        !matches!(self, Owner::Me)
    }
}

/// Lifecycle of a territory during the starting-region pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerritoryStatus {
    Initialized,
    PossibleStartingRegion,
    StartingRegion,
}

/// A single controllable node of the game graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    pub id: TerritoryId,
    pub owner: Owner,
    pub armies: u32,
    pub wasteland: bool,
    pub status: TerritoryStatus,
    /// Slot of the owning continent in `TerritoryGraph::continents()`.
    pub(crate) continent: usize,
    /// Slots of adjacent territories, in the order the edges were loaded.
    pub(crate) neighbors: Vec<usize>,
}

impl Territory {
    /// Creates an unowned territory with no armies and no neighbors.
    pub(crate) fn new(id: TerritoryId, continent: usize) -> Self {
        Territory {
            id,
            owner: Owner::Unknown,
            armies: 0,
            wasteland: false,
            status: TerritoryStatus::Initialized,
            continent,
            neighbors: Vec::new(),
        }
    }

    /// Returns the slot of the continent this territory belongs to.
    pub fn continent(&self) -> usize {
        self.continent
    }

    /// Returns the slots of the adjacent territories.
    pub fn neighbor_slots(&self) -> &[usize] {
        &self.neighbors
    }

    /// Returns true if the territory is held by the given owner.
    pub fn is_held_by(&self, owner: Owner) -> bool {
        self.owner == owner
    }

    /// Adds a neighbor slot unless it is already present.
    pub(crate) fn link(&mut self, slot: usize) -> bool {
        if self.neighbors.contains(&slot) {
            return false;
        }
        self.neighbors.push(slot);
        true
    }
}
