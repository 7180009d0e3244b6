//! Reinforcement placement.
//!
//! Splits the turn's budget over a primary and a secondary territory chosen
//! by `ranking::placement_chain`, with a defensive three-way split on the
//! first round when both players start spread over three continents.

use tracing::{debug, info};

use super::ranking::{placement_chain, rank, Rank};
use crate::board::{GameState, Owner, Placement, TerritoryGraph};
use crate::config::PlannerConfig;

/// Attack-start round after a defensive opening.
const DEFENSIVE_START_ROUND: u32 = 4;

/// Attack-start round otherwise.
const DEFAULT_START_ROUND: u32 = 2;

/// Continents each player must span for the defensive opening.
const DEFENSIVE_CONTINENTS: usize = 3;

/// Smallest budget the defensive 2/2/rest split can be paid from.
const DEFENSIVE_MIN_BUDGET: u32 = 5;

/// Armies the secondary territory receives once the budget exceeds 18.
const SECONDARY_CAP: u32 = 9;

/// Plans and applies this turn's placements.
///
/// The returned placements always sum to `budget` unless the graph has no
/// territories at all. On round 1 this also decides `state.start_round`.
pub fn plan_placements(
    graph: &mut TerritoryGraph,
    state: &mut GameState,
    config: &PlannerConfig,
    budget: u32,
) -> Vec<Placement> {
    if state.round == 1 {
        if let Some(placements) = defensive_opening(graph, budget) {
            state.start_round = DEFENSIVE_START_ROUND;
            info!(budget, "defensive opening, holding attacks until round 4");
            return apply(graph, placements);
        }
        state.start_round = DEFAULT_START_ROUND;
    }

    let placements = general_placement(graph, config, budget);
    apply(graph, placements)
}

/// First owned territory of every continent the owner is present in, in order
/// of first appearance.
fn continent_groups(graph: &TerritoryGraph, owner: Owner) -> Vec<usize> {
    let mut firsts: Vec<usize> = Vec::new();
    for (slot, territory) in graph.territories().iter().enumerate() {
        if territory.owner == owner && !firsts.iter().any(|&f| graph.same_continent(f, slot)) {
            firsts.push(slot);
        }
    }
    firsts
}

fn defensive_opening(graph: &TerritoryGraph, budget: u32) -> Option<Vec<(usize, u32)>> {
    if budget < DEFENSIVE_MIN_BUDGET {
        return None;
    }
    let mine = continent_groups(graph, Owner::Me);
    let theirs = continent_groups(graph, Owner::Opponent);
    if mine.len() != DEFENSIVE_CONTINENTS || theirs.len() != DEFENSIVE_CONTINENTS {
        return None;
    }
    Some(vec![(mine[0], 2), (mine[1], 2), (mine[2], budget - 4)])
}

/// Candidate pool and the chain to rank it with. Widens from unenclosed owned
/// territories to all owned ones, then to the whole map.
fn candidate_pool(graph: &TerritoryGraph, config: &PlannerConfig) -> (Vec<usize>, Vec<Rank>) {
    let owned: Vec<usize> = (0..graph.territories().len())
        .filter(|&s| graph.territory(s).owner == Owner::Me)
        .collect();
    let chain = placement_chain(config.oversized_stack).to_vec();

    let frontier: Vec<usize> = owned
        .iter()
        .copied()
        .filter(|&s| !graph.is_enclosed_by(s, Owner::Me))
        .collect();
    if !frontier.is_empty() {
        return (frontier, chain);
    }
    if !owned.is_empty() {
        return (owned, chain);
    }
    (
        (0..graph.territories().len()).collect(),
        vec![Rank::HighestContinentPriority],
    )
}

/// Armies the primary territory receives.
fn primary_share(budget: u32) -> u32 {
    match budget {
        0..=6 => 3,
        7..=9 => 5,
        10..=18 => 9,
        _ => budget - SECONDARY_CAP,
    }
}

fn general_placement(
    graph: &TerritoryGraph,
    config: &PlannerConfig,
    budget: u32,
) -> Vec<(usize, u32)> {
    let (mut pool, chain) = candidate_pool(graph, config);
    rank(graph, &mut pool, &chain);
    let Some(&primary) = pool.first() else {
        return Vec::new();
    };

    let secondary = pool
        .iter()
        .copied()
        .find(|&s| {
            !graph.same_continent(s, primary) && graph.territory(s).armies < config.oversized_stack
        })
        .unwrap_or(primary);

    if secondary == primary {
        return vec![(primary, budget)];
    }
    let first = primary_share(budget).min(budget);
    vec![(primary, first), (secondary, budget - first)]
}

/// Adds the planned armies to the graph, skipping empty placements.
fn apply(graph: &mut TerritoryGraph, planned: Vec<(usize, u32)>) -> Vec<Placement> {
    planned
        .into_iter()
        .filter(|&(_, armies)| armies > 0)
        .map(|(slot, armies)| {
            graph.add_armies(slot, armies);
            let placement = Placement {
                territory: graph.territory(slot).id,
                armies,
            };
            debug!(territory = placement.territory, armies, "placement");
            placement
        })
        .collect()
}
