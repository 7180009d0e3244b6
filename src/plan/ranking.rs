//! Tie-break chains for ordering candidate territories.
//!
//! A chain is a slice of `Rank` criteria applied lexicographically. Each
//! criterion maps a territory to an integer key where lower sorts first, so
//! "most" criteria negate their count. Sorting is stable: territories that tie
//! on every criterion keep the order they were supplied in, which for planner
//! callers is registry order.

use crate::board::{Owner, TerritoryGraph};

/// A single ordering criterion over territory slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    /// Most opponent-held neighbors first.
    MostOpponentNeighbors,
    /// Stacks at or above the given size last.
    OversizedLast(u32),
    /// Most neutral neighbors inside the territory's own continent first.
    MostNeutralNeighborsInContinent,
    /// Fewest neutral neighbors in other continents first.
    FewestNeutralNeighborsOutside,
    /// Fewest agent-held territories in the territory's continent first.
    FewestOwnedInContinent,
    MostArmies,
    FewestArmies,
    /// Territories without a neighbor in another continent first.
    NoExternalNeighborFirst,
    /// Territories with a neutral neighbor in their own continent first.
    NeutralNeighborInContinentFirst,
    /// Most agent armies adjacent first.
    MostFriendlyArmiesNearby,
    /// Members of the continent at the given slot first.
    InContinent(usize),
    /// Highest continent priority first.
    HighestContinentPriority,
    /// Most appearances in the invasion paths of the continent at the given
    /// slot first.
    MostExposure(usize),
}

impl Rank {
    /// Sort key of `slot` under this criterion; lower sorts first.
    fn key(self, graph: &TerritoryGraph, slot: usize) -> i64 {
        let territory = graph.territory(slot);
        let home = territory.continent();
        match self {
            Rank::MostOpponentNeighbors => {
                -count(graph, slot, |_, owner| owner == Owner::Opponent)
            }
            Rank::OversizedLast(limit) => i64::from(territory.armies >= limit),
            Rank::MostNeutralNeighborsInContinent => -count(graph, slot, |n, owner| {
                owner == Owner::Neutral && graph.territory(n).continent() == home
            }),
            Rank::FewestNeutralNeighborsOutside => count(graph, slot, |n, owner| {
                owner == Owner::Neutral && graph.territory(n).continent() != home
            }),
            Rank::FewestOwnedInContinent => graph.owned_in_continent(home) as i64,
            Rank::MostArmies => -i64::from(territory.armies),
            Rank::FewestArmies => i64::from(territory.armies),
            Rank::NoExternalNeighborFirst => {
                i64::from(count(graph, slot, |n, _| graph.territory(n).continent() != home) > 0)
            }
            Rank::NeutralNeighborInContinentFirst => i64::from(
                count(graph, slot, |n, owner| {
                    owner == Owner::Neutral && graph.territory(n).continent() == home
                }) == 0,
            ),
            Rank::MostFriendlyArmiesNearby => -i64::from(graph.friendly_armies_nearby(slot)),
            Rank::InContinent(continent) => i64::from(home != continent),
            Rank::HighestContinentPriority => -i64::from(graph.continent(home).priority()),
            Rank::MostExposure(continent) => -(graph.continent(continent).exposure(slot) as i64),
        }
    }
}

fn count(graph: &TerritoryGraph, slot: usize, pred: impl Fn(usize, Owner) -> bool) -> i64 {
    graph.count_neighbors(slot, |n, t| pred(n, t.owner)) as i64
}

/// Reinforcement target order for placement.
pub fn placement_chain(oversized_stack: u32) -> [Rank; 6] {
    [
        Rank::MostOpponentNeighbors,
        Rank::OversizedLast(oversized_stack),
        Rank::MostNeutralNeighborsInContinent,
        Rank::FewestNeutralNeighborsOutside,
        Rank::FewestOwnedInContinent,
        Rank::MostArmies,
    ]
}

/// Order of neutral continent members to expand into.
pub const EXPANSION_CHAIN: [Rank; 3] = [
    Rank::NoExternalNeighborFirst,
    Rank::NeutralNeighborInContinentFirst,
    Rank::MostFriendlyArmiesNearby,
];

/// Order of neutral invasion paths to expand into.
pub const OUTWARD_CHAIN: [Rank; 1] = [Rank::MostFriendlyArmiesNearby];

/// Source order when planning inside the continent at `continent`.
pub fn source_chain(continent: usize) -> [Rank; 2] {
    [Rank::InContinent(continent), Rank::MostArmies]
}

/// Stable sort of `slots` under `chain`.
pub fn rank(graph: &TerritoryGraph, slots: &mut [usize], chain: &[Rank]) {
    slots.sort_by_cached_key(|&slot| {
        chain
            .iter()
            .map(|criterion| criterion.key(graph, slot))
            .collect::<Vec<_>>()
    });
}
