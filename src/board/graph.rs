//! The territory graph.
//!
//! Territories and continents live in insertion-ordered vectors and are
//! addressed internally by their slot (vector index). Wire ids are resolved to
//! slots once, at the boundary, through hash-map indexes. Every iteration the
//! planners perform walks the vectors, so planning never depends on hash order.

use std::collections::HashMap;

use super::borders;
use super::continent::{Continent, ContinentId};
use super::territory::{Owner, Territory, TerritoryId, TerritoryStatus};

/// Errors raised by graph construction and lookups. All of them indicate a
/// protocol-contract violation rather than a recoverable game situation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown territory id {0}")]
    UnknownTerritory(TerritoryId),

    #[error("unknown continent id {0}")]
    UnknownContinent(ContinentId),

    #[error("territory id {0} registered twice")]
    DuplicateTerritory(TerritoryId),

    #[error("continent id {0} registered twice")]
    DuplicateContinent(ContinentId),

    #[error("border computation requested before any adjacency was loaded")]
    AdjacencyNotLoaded,

    #[error("continent borders are stale; recompute them after loading adjacency")]
    StaleBorders,

    #[error("no territory is marked as a starting candidate")]
    NoStartingCandidate,
}

/// The territory/continent graph with its derived border data.
#[derive(Debug, Clone, Default)]
pub struct TerritoryGraph {
    territories: Vec<Territory>,
    continents: Vec<Continent>,
    territory_index: HashMap<TerritoryId, usize>,
    continent_index: HashMap<ContinentId, usize>,
    pub(crate) adjacency_loaded: bool,
    pub(crate) borders_fresh: bool,
}

impl TerritoryGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a continent. Returns its slot.
    pub fn add_continent(&mut self, id: ContinentId, reward: u32) -> Result<usize, GraphError> {
        if self.continent_index.contains_key(&id) {
            return Err(GraphError::DuplicateContinent(id));
        }
        let slot = self.continents.len();
        self.continents.push(Continent::new(id, reward));
        self.continent_index.insert(id, slot);
        self.borders_fresh = false;
        Ok(slot)
    }

    /// Registers a territory in an existing continent. Returns its slot.
    pub fn add_territory(
        &mut self,
        id: TerritoryId,
        continent_id: ContinentId,
    ) -> Result<usize, GraphError> {
        if self.territory_index.contains_key(&id) {
            return Err(GraphError::DuplicateTerritory(id));
        }
        let continent = self.continent_slot(continent_id)?;
        let slot = self.territories.len();
        self.territories.push(Territory::new(id, continent));
        self.territory_index.insert(id, slot);
        self.continents[continent].add_member(slot);
        self.borders_fresh = false;
        Ok(slot)
    }

    /// Flags a territory as wasteland.
    pub fn set_wasteland(&mut self, id: TerritoryId) -> Result<(), GraphError> {
        let slot = self.slot(id)?;
        self.territories[slot].wasteland = true;
        Ok(())
    }

    /// Adds undirected edges between `id` and each of `neighbor_ids`.
    ///
    /// The wire protocol lists every edge only once, so the reverse direction
    /// is inserted here. Self-edges and edges already present are ignored.
    /// All ids are resolved before the graph is touched.
    pub fn add_neighbors(
        &mut self,
        id: TerritoryId,
        neighbor_ids: &[TerritoryId],
    ) -> Result<(), GraphError> {
        let slot = self.slot(id)?;
        let others = neighbor_ids
            .iter()
            .map(|&n| self.slot(n))
            .collect::<Result<Vec<_>, _>>()?;

        for other in others {
            if other == slot {
                continue;
            }
            self.territories[slot].link(other);
            self.territories[other].link(slot);
        }
        self.adjacency_loaded = true;
        self.borders_fresh = false;
        Ok(())
    }

    /// Recomputes invasion paths and border territories of every continent.
    pub fn recompute_borders(&mut self) -> Result<(), GraphError> {
        borders::recompute_borders(self)
    }

    /// Returns true once border data matches the current adjacency.
    pub fn borders_fresh(&self) -> bool {
        self.borders_fresh
    }

    /// Resolves a territory id to its slot.
    pub fn slot(&self, id: TerritoryId) -> Result<usize, GraphError> {
        self.territory_index
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownTerritory(id))
    }

    /// Resolves a continent id to its slot.
    pub fn continent_slot(&self, id: ContinentId) -> Result<usize, GraphError> {
        self.continent_index
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownContinent(id))
    }

    /// Looks up a territory by wire id.
    pub fn lookup(&self, id: TerritoryId) -> Result<&Territory, GraphError> {
        self.slot(id).map(|slot| &self.territories[slot])
    }

    /// Looks up a continent by wire id.
    pub fn lookup_continent(&self, id: ContinentId) -> Result<&Continent, GraphError> {
        self.continent_slot(id).map(|slot| &self.continents[slot])
    }

    /// All territories in registration order.
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// All continents in registration order.
    pub fn continents(&self) -> &[Continent] {
        &self.continents
    }

    /// The territory at a slot. Slots are only ever handed out by this graph.
    pub fn territory(&self, slot: usize) -> &Territory {
        &self.territories[slot]
    }

    /// The continent at a slot.
    pub fn continent(&self, slot: usize) -> &Continent {
        &self.continents[slot]
    }

    pub(crate) fn continent_mut(&mut self, slot: usize) -> &mut Continent {
        &mut self.continents[slot]
    }

    /// The continent owning the territory at `slot`.
    pub fn continent_of(&self, slot: usize) -> &Continent {
        &self.continents[self.territories[slot].continent]
    }

    /// Sets every territory to `Unknown` with no armies, ahead of a fresh
    /// ownership snapshot.
    pub fn reset_all_ownership(&mut self) {
        for territory in &mut self.territories {
            territory.owner = Owner::Unknown;
            territory.armies = 0;
        }
    }

    /// Overwrites owner and army count of a territory.
    pub fn set_ownership(
        &mut self,
        id: TerritoryId,
        owner: Owner,
        armies: u32,
    ) -> Result<(), GraphError> {
        let slot = self.slot(id)?;
        let territory = &mut self.territories[slot];
        territory.owner = owner;
        territory.armies = armies;
        Ok(())
    }

    pub(crate) fn add_armies(&mut self, slot: usize, armies: u32) {
        self.territories[slot].armies += armies;
    }

    pub(crate) fn remove_armies(&mut self, slot: usize, armies: u32) {
        let territory = &mut self.territories[slot];
        territory.armies = territory.armies.saturating_sub(armies);
    }

    /// Iterates over `(slot, territory)` pairs adjacent to `slot`.
    pub fn neighbors(&self, slot: usize) -> impl Iterator<Item = (usize, &Territory)> + '_ {
        self.territories[slot]
            .neighbors
            .iter()
            .map(move |&n| (n, &self.territories[n]))
    }

    /// Returns true if `a` and `b` share an edge.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.territories[a].neighbors.contains(&b)
    }

    /// Returns true if both territories belong to the same continent.
    pub fn same_continent(&self, a: usize, b: usize) -> bool {
        self.territories[a].continent == self.territories[b].continent
    }

    /// Counts neighbors of `slot` matching a predicate.
    pub fn count_neighbors(&self, slot: usize, pred: impl Fn(usize, &Territory) -> bool) -> usize {
        self.neighbors(slot).filter(|&(n, t)| pred(n, t)).count()
    }

    /// Returns true if every neighbor of `slot` is held by `owner`.
    /// A territory without neighbors counts as enclosed.
    pub fn is_enclosed_by(&self, slot: usize, owner: Owner) -> bool {
        self.neighbors(slot).all(|(_, t)| t.is_held_by(owner))
    }

    /// Returns true if some neighbor of `slot` is held by `owner`.
    pub fn borders_owner(&self, slot: usize, owner: Owner) -> bool {
        self.neighbors(slot).any(|(_, t)| t.is_held_by(owner))
    }

    /// Sum of the agent's armies adjacent to `slot`.
    pub fn friendly_armies_nearby(&self, slot: usize) -> u32 {
        self.neighbors(slot)
            .filter(|(_, t)| t.owner == Owner::Me)
            .map(|(_, t)| t.armies)
            .sum()
    }

    /// Number of territories the agent holds in the continent at `continent`.
    pub fn owned_in_continent(&self, continent: usize) -> usize {
        self.continents[continent]
            .members()
            .iter()
            .filter(|&&m| self.territories[m].owner == Owner::Me)
            .count()
    }

    /// Marks the given territories as possible starting regions, clearing
    /// any previous candidate marks first.
    pub fn mark_candidate_starting_territories(
        &mut self,
        ids: &[TerritoryId],
    ) -> Result<(), GraphError> {
        let slots = ids
            .iter()
            .map(|&id| self.slot(id))
            .collect::<Result<Vec<_>, _>>()?;

        for territory in &mut self.territories {
            if territory.status == TerritoryStatus::PossibleStartingRegion {
                territory.status = TerritoryStatus::Initialized;
            }
        }
        for slot in slots {
            self.territories[slot].status = TerritoryStatus::PossibleStartingRegion;
        }
        Ok(())
    }

    /// Picks the candidate whose continent has the highest priority (ties keep
    /// registration order), marks it as the starting region and returns its id.
    pub fn pick_preferred_starting_territory(&mut self) -> Result<TerritoryId, GraphError> {
        let mut best: Option<(usize, u32)> = None;
        for (slot, territory) in self.territories.iter().enumerate() {
            if territory.status != TerritoryStatus::PossibleStartingRegion {
                continue;
            }
            let priority = self.continents[territory.continent].priority();
            if best.map_or(true, |(_, p)| priority > p) {
                best = Some((slot, priority));
            }
        }

        let (slot, _) = best.ok_or(GraphError::NoStartingCandidate)?;
        let territory = &mut self.territories[slot];
        territory.status = TerritoryStatus::StartingRegion;
        Ok(territory.id)
    }
}
