//! Continents (super regions).
//!
//! A continent groups territories and grants its reward to a player holding
//! all of them. Priority and border data are derived: priority is recomputed
//! on every member added, border data by `board::borders`.

/// Wire identifier of a continent.
pub type ContinentId = u32;

/// Numerator of the continent priority formula.
const PRIORITY_SCALE: u32 = 1000;

/// A named group of territories granting a reinforcement bonus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continent {
    pub id: ContinentId,
    pub reward: u32,
    members: Vec<usize>,
    priority: u32,
    pub(crate) invasion_paths: Vec<usize>,
    pub(crate) border_territories: Vec<usize>,
}

impl Continent {
    /// Creates an empty continent.
    pub(crate) fn new(id: ContinentId, reward: u32) -> Self {
        Continent {
            id,
            reward,
            members: Vec::new(),
            priority: 0,
            invasion_paths: Vec::new(),
            border_territories: Vec::new(),
        }
    }

    /// Appends a member slot and recomputes the priority.
    pub(crate) fn add_member(&mut self, slot: usize) {
        self.members.push(slot);
        self.priority = PRIORITY_SCALE / self.members.len() as u32;
    }

    /// Slots of the member territories, in registration order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// `floor(1000 / member_count)`: small continents score higher.
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Territories outside the continent adjacent to a member. A territory
    /// appears once per member it touches.
    pub fn invasion_paths(&self) -> &[usize] {
        &self.invasion_paths
    }

    /// Members with at least one neighbor outside the continent.
    pub fn border_territories(&self) -> &[usize] {
        &self.border_territories
    }

    /// Number of members an invasion path touches.
    pub fn exposure(&self, slot: usize) -> usize {
        self.invasion_paths.iter().filter(|&&s| s == slot).count()
    }
}
