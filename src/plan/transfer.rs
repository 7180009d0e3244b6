//! Attack and transfer planning.
//!
//! Runs once per continent in registry order. Each continent is classified as
//! quiet (expand), threatened at its border (attack or reinforce the threat),
//! or contested inside (clear hostile members), then stuck stacks are walked
//! toward the frontier. All continents share one `Ledger`, so a territory
//! sends armies at most once per call.

use tracing::{debug, info};

use super::ledger::Ledger;
use super::pathing::first_step_toward;
use super::ranking::{rank, source_chain, Rank, EXPANSION_CHAIN, OUTWARD_CHAIN};
use crate::board::{GameState, GraphError, Owner, TerritoryGraph, Transfer};
use crate::config::PlannerConfig;

/// Plans this turn's attacks and transfers.
///
/// Army deductions are applied to `graph` as moves are committed. Fails only
/// when border data is stale; every other shortcoming yields fewer moves.
pub fn plan_transfers(
    graph: &mut TerritoryGraph,
    state: &GameState,
    config: &PlannerConfig,
) -> Result<Vec<Transfer>, GraphError> {
    if !graph.borders_fresh() {
        return Err(GraphError::StaleBorders);
    }

    // Opponent ownership before any commit, for the suppression filter.
    let opponent_held: Vec<bool> = graph
        .territories()
        .iter()
        .map(|t| t.owner == Owner::Opponent)
        .collect();

    let mut planner = TransferPlanner {
        graph,
        state,
        config,
        ledger: Ledger::new(),
    };
    for continent in 0..planner.graph.continents().len() {
        planner.plan_continent(continent);
    }

    let committed = planner.ledger.len();
    let suppress = state.attacks_suppressed();
    let transfers = planner
        .ledger
        .into_transfers(planner.graph, |target| !(suppress && opponent_held[target]));
    if transfers.len() < committed {
        debug!(
            dropped = committed - transfers.len(),
            round = state.round,
            start_round = state.start_round,
            "suppressed early attacks"
        );
    }
    info!(round = state.round, moves = transfers.len(), "planned transfers");
    Ok(transfers)
}

/// Which of the three situations a continent is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Threats {
    border: bool,
    internal: bool,
}

struct TransferPlanner<'a> {
    graph: &'a mut TerritoryGraph,
    state: &'a GameState,
    config: &'a PlannerConfig,
    ledger: Ledger,
}

impl TransferPlanner<'_> {
    fn owner(&self, slot: usize) -> Owner {
        self.graph.territory(slot).owner
    }

    fn armies(&self, slot: usize) -> u32 {
        self.graph.territory(slot).armies
    }

    fn members(&self, continent: usize) -> Vec<usize> {
        self.graph.continent(continent).members().to_vec()
    }

    /// Members of the continent held by `owner`, in registry order.
    fn members_held_by(&self, continent: usize, owner: Owner) -> Vec<usize> {
        self.graph
            .continent(continent)
            .members()
            .iter()
            .copied()
            .filter(|&m| self.graph.territory(m).is_held_by(owner))
            .collect()
    }

    /// Distinct invasion paths held by `owner`, in order of first appearance.
    fn invasion_paths_held_by(&self, continent: usize, owner: Owner) -> Vec<usize> {
        let mut paths: Vec<usize> = Vec::new();
        for &slot in self.graph.continent(continent).invasion_paths() {
            if self.owner(slot) == owner && !paths.contains(&slot) {
                paths.push(slot);
            }
        }
        paths
    }

    /// Agent-held neighbors of `target` that have not sent armies yet.
    fn free_owned_neighbors(&self, target: usize) -> Vec<usize> {
        self.graph
            .neighbors(target)
            .filter(|&(n, t)| t.owner == Owner::Me && !self.ledger.is_source(n))
            .map(|(n, _)| n)
            .collect()
    }

    fn plan_continent(&mut self, continent: usize) {
        let members = self.members(continent);
        let has_foothold = members.iter().any(|&m| self.owner(m) == Owner::Me)
            || members
                .iter()
                .any(|&m| self.graph.borders_owner(m, Owner::Me));
        if !has_foothold {
            return;
        }

        let threats = self.classify(continent);
        let before = self.ledger.len();
        debug!(
            continent = self.graph.continent(continent).id,
            border = threats.border,
            internal = threats.internal,
            "planning continent"
        );

        if !threats.border && !threats.internal {
            self.expand(continent);
        } else {
            if threats.border {
                self.defend_border(continent);
            }
            if threats.internal && self.ledger.len() == before {
                self.clear_interior(continent);
            }
        }

        self.relocate_stuck(continent);
    }

    fn classify(&self, continent: usize) -> Threats {
        let graph = &*self.graph;
        let border = graph
            .continent(continent)
            .border_territories()
            .iter()
            .any(|&b| {
                graph.borders_owner(b, Owner::Opponent)
                    && (graph.territory(b).owner == Owner::Me
                        || graph
                            .neighbors(b)
                            .any(|(n, t)| t.owner == Owner::Me && graph.same_continent(n, b)))
            });
        let internal = graph.continent(continent).members().iter().any(|&m| {
            graph.territory(m).owner == Owner::Opponent && graph.borders_owner(m, Owner::Me)
        });
        Threats { border, internal }
    }

    /// Commits a move if the source can afford it: more than the minimum
    /// usable stack, or a transfer between own territories from a stack of
    /// more than one.
    fn commit(&mut self, source: usize, target: usize, armies: u32) -> bool {
        let stack = self.armies(source);
        let friendly = self.owner(target) == Owner::Me;
        if stack <= self.config.min_source_armies && !(friendly && stack > 1) {
            return false;
        }
        match self.ledger.commit(self.graph, source, target, armies) {
            Ok(()) => {
                debug!(
                    source = self.graph.territory(source).id,
                    target = self.graph.territory(target).id,
                    armies,
                    "committed transfer"
                );
                true
            }
            Err(rejection) => {
                debug!(%rejection, "transfer rejected");
                false
            }
        }
    }

    /// Attack size for `source` against `target`, if the attack is allowed.
    fn attack_size(&self, source: usize, target: usize) -> Option<u32> {
        let attacker = self.armies(source);
        let defender = self.armies(target);
        if attacker <= self.config.min_source_armies {
            return None;
        }
        if attacker > self.config.round_ceiling(self.state.round) {
            return Some(attacker - 1);
        }
        let margin = defender.saturating_mul(2);
        if attacker > margin {
            return Some(margin.max(1));
        }
        None
    }

    /// Unreserved owned neighbors of `target` able to attack it, best first.
    /// With `home_only` set, sources must lie in `continent`.
    fn attackers(&self, target: usize, continent: usize, home_only: bool) -> Vec<usize> {
        let mut sources: Vec<usize> = self
            .free_owned_neighbors(target)
            .into_iter()
            .filter(|&s| !home_only || self.graph.territory(s).continent() == continent)
            .filter(|&s| self.attack_size(s, target).is_some())
            .collect();
        rank(self.graph, &mut sources, &source_chain(continent));
        sources
    }

    fn try_attack(&mut self, target: usize, continent: usize, home_only: bool) -> bool {
        for source in self.attackers(target, continent, home_only) {
            if let Some(size) = self.attack_size(source, target) {
                if self.commit(source, target, size) {
                    return true;
                }
            }
        }
        false
    }

    /// Situation 1: no opponent pressure on this continent.
    fn expand(&mut self, continent: usize) {
        let mut inner: Vec<usize> = self
            .members_held_by(continent, Owner::Neutral)
            .into_iter()
            .filter(|&m| !self.ledger.is_target(m))
            .collect();

        if !inner.is_empty() {
            rank(self.graph, &mut inner, &EXPANSION_CHAIN);
            self.expand_into(&inner, continent);
        } else {
            let mut outward: Vec<usize> = self
                .invasion_paths_held_by(continent, Owner::Neutral)
                .into_iter()
                .filter(|&p| !self.ledger.is_target(p))
                .collect();
            if !outward.is_empty() {
                rank(self.graph, &mut outward, &OUTWARD_CHAIN);
                self.expand_into(&outward, continent);
            } else {
                self.attack_weakest_path(continent);
            }
        }

        self.consolidate(continent);
    }

    /// Expands into each target from its best eligible neighbor.
    fn expand_into(&mut self, targets: &[usize], continent: usize) {
        for &target in targets {
            if self.ledger.is_target(target) {
                continue;
            }
            if self.config.fan_out && self.send_wave(target, continent) {
                continue;
            }

            let defenders = self.armies(target);
            let mut sources: Vec<usize> = self
                .free_owned_neighbors(target)
                .into_iter()
                .filter(|&s| {
                    let stack = self.armies(s);
                    stack > self.config.min_source_armies && stack > defenders
                })
                .collect();
            rank(self.graph, &mut sources, &source_chain(continent));
            if let Some(&source) = sources.first() {
                self.commit(source, target, self.armies(source) - 1);
            }
        }
    }

    /// Sends one capped wave at `target` from a large stack. Returns true if
    /// a wave was committed.
    fn send_wave(&mut self, target: usize, continent: usize) -> bool {
        let wave = self.config.fan_out_wave;
        let defenders = self.armies(target);
        if wave <= defenders {
            return false;
        }

        let mut sources: Vec<usize> = self
            .graph
            .neighbors(target)
            .filter(|&(n, t)| {
                t.owner == Owner::Me
                    && self.ledger.can_send_wave(n)
                    && (self.ledger.is_fanning(n) || t.armies > self.config.fan_out_stack)
                    && t.armies > self.config.min_source_armies
                    && t.armies >= wave + self.config.fan_out_floor
            })
            .map(|(n, _)| n)
            .collect();
        rank(self.graph, &mut sources, &source_chain(continent));

        let Some(&source) = sources.first() else {
            return false;
        };
        match self.ledger.commit_wave(self.graph, source, target, wave) {
            Ok(()) => {
                debug!(
                    source = self.graph.territory(source).id,
                    target = self.graph.territory(target).id,
                    armies = wave,
                    "committed wave"
                );
                true
            }
            Err(rejection) => {
                debug!(%rejection, "wave rejected");
                false
            }
        }
    }

    /// Attacks the weakest opponent invasion path some stack can take.
    fn attack_weakest_path(&mut self, continent: usize) {
        let mut paths = self.invasion_paths_held_by(continent, Owner::Opponent);
        rank(self.graph, &mut paths, &[Rank::FewestArmies]);
        for target in paths {
            if self.try_attack(target, continent, false) {
                return;
            }
        }
    }

    /// Pulls spare armies from members around the largest open stack into it.
    fn consolidate(&mut self, continent: usize) {
        let mut hubs: Vec<usize> = self
            .members_held_by(continent, Owner::Me)
            .into_iter()
            .filter(|&m| self.armies(m) > 1 && !self.graph.is_enclosed_by(m, Owner::Me))
            .collect();
        rank(self.graph, &mut hubs, &[Rank::MostArmies]);
        let Some(&hub) = hubs.first() else {
            return;
        };

        let feeders: Vec<usize> = self
            .free_owned_neighbors(hub)
            .into_iter()
            .filter(|&f| self.graph.same_continent(f, hub) && !self.ledger.is_target(f))
            .collect();
        for feeder in feeders {
            let stack = self.armies(feeder);
            if stack > 1 {
                self.commit(feeder, hub, stack - 1);
            }
        }
    }

    /// Situation 2: an opponent stack sits on one of the invasion paths.
    /// Without one nothing is committed here, which leaves hostile members
    /// to `clear_interior`.
    fn defend_border(&mut self, continent: usize) {
        let mut threats = self.invasion_paths_held_by(continent, Owner::Opponent);
        if !threats.is_empty() {
            let exposure = Rank::MostExposure(continent);
            rank(self.graph, &mut threats, &[Rank::MostArmies, exposure]);
            let mut threat = threats[0];
            if self.attackers(threat, continent, true).is_empty() {
                rank(self.graph, &mut threats, &[Rank::FewestArmies, exposure]);
                threat = threats[0];
            }

            if !self.try_attack(threat, continent, true) {
                self.reinforce_against(threat, continent);
            }
            self.sweep_neutrals(continent);
        }
    }

    /// Situation 3: opponent-held members adjacent to the agent.
    fn clear_interior(&mut self, continent: usize) {
        let mut hostiles: Vec<usize> = self
            .members_held_by(continent, Owner::Opponent)
            .into_iter()
            .filter(|&m| self.graph.borders_owner(m, Owner::Me))
            .collect();
        rank(self.graph, &mut hostiles, &[Rank::FewestArmies]);

        let mut swept = false;
        for hostile in hostiles {
            if self.try_attack(hostile, continent, false) {
                continue;
            }
            let adjacent_home = self.graph.neighbors(hostile).any(|(n, t)| {
                t.owner == Owner::Me && self.graph.territory(n).continent() == continent
            });
            if adjacent_home {
                self.reinforce_against(hostile, continent);
            } else if !swept {
                self.sweep_neutrals(continent);
                swept = true;
            }
        }
    }

    /// Moves armies into the weakest owned member adjacent to `threat`, from
    /// a neighbor that does not face the opponent itself.
    fn reinforce_against(&mut self, threat: usize, continent: usize) {
        let mut defenders: Vec<usize> = self
            .graph
            .neighbors(threat)
            .filter(|&(n, t)| {
                t.owner == Owner::Me && self.graph.territory(n).continent() == continent
            })
            .map(|(n, _)| n)
            .collect();
        rank(self.graph, &mut defenders, &[Rank::FewestArmies]);

        for defender in defenders {
            let mut sources: Vec<usize> = self
                .free_owned_neighbors(defender)
                .into_iter()
                .filter(|&s| {
                    self.armies(s) > 1 && !self.graph.borders_owner(s, Owner::Opponent)
                })
                .collect();
            rank(self.graph, &mut sources, &[Rank::MostArmies]);
            if let Some(&source) = sources.first() {
                if self.commit(source, defender, self.armies(source) - 1) {
                    return;
                }
            }
        }
    }

    /// Expands into the remaining neutral members of the continent.
    fn sweep_neutrals(&mut self, continent: usize) {
        let mut targets: Vec<usize> = self
            .members_held_by(continent, Owner::Neutral)
            .into_iter()
            .filter(|&m| !self.ledger.is_target(m))
            .collect();
        rank(self.graph, &mut targets, &EXPANSION_CHAIN);
        self.expand_into(&targets, continent);
    }

    /// Walks enclosed, unused stacks one hop toward the nearest frontier.
    fn relocate_stuck(&mut self, continent: usize) {
        for member in self.members_held_by(continent, Owner::Me) {
            if self.ledger.is_reserved(member)
                || self.armies(member) <= 1
                || !self.graph.is_enclosed_by(member, Owner::Me)
            {
                continue;
            }

            let graph = &*self.graph;
            let step = first_step_toward(graph, member, self.config.relocation_depth, |s| {
                graph.territory(s).owner == Owner::Me
                    && graph.neighbors(s).any(|(_, t)| t.owner.is_foreign())
            });
            match step {
                Some(hop) => {
                    self.commit(member, hop, self.armies(member) - 1);
                }
                None => debug!(
                    territory = self.graph.territory(member).id,
                    "no frontier in reach, stack stays"
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Map {
        graph: TerritoryGraph,
    }

    impl Map {
        /// `territories` holds `(territory id, continent id)` pairs.
        fn new(territories: &[(u32, u32)], edges: &[(u32, u32)]) -> Self {
            let mut graph = TerritoryGraph::new();
            for &(id, c) in territories {
                if graph.continent_slot(c).is_err() {
                    graph.add_continent(c, 1).unwrap();
                }
                graph.add_territory(id, c).unwrap();
            }
            for &(a, b) in edges {
                graph.add_neighbors(a, &[b]).unwrap();
            }
            graph.recompute_borders().unwrap();
            Map { graph }
        }

        fn set(mut self, id: u32, owner: Owner, armies: u32) -> Self {
            self.graph.set_ownership(id, owner, armies).unwrap();
            self
        }

        fn plan(mut self, round: u32) -> (Vec<Transfer>, TerritoryGraph) {
            let transfers = self.plan_with(round, &PlannerConfig::default());
            (transfers, self.graph)
        }

        fn plan_with(&mut self, round: u32, config: &PlannerConfig) -> Vec<Transfer> {
            let mut state = GameState::new();
            state.round = round;
            plan_transfers(&mut self.graph, &state, config).unwrap()
        }
    }

    fn t(source: u32, target: u32, armies: u32) -> Transfer {
        Transfer {
            source,
            target,
            armies,
        }
    }

    #[test]
    fn stale_borders_are_refused() {
        let mut map = Map::new(&[(1, 1), (2, 1)], &[(1, 2)]);
        map.graph.add_neighbors(2, &[1]).unwrap();
        let mut state = GameState::new();
        state.round = 3;
        assert_eq!(
            plan_transfers(&mut map.graph, &state, &PlannerConfig::default()),
            Err(GraphError::StaleBorders)
        );
    }

    #[test]
    fn attack_sends_twice_the_defender() {
        let (transfers, graph) = Map::new(&[(1, 1), (2, 2)], &[(1, 2)])
            .set(1, Owner::Me, 12)
            .set(2, Owner::Opponent, 4)
            .plan(5);
        assert_eq!(transfers, vec![t(1, 2, 8)]);
        assert_eq!(graph.lookup(1).unwrap().armies, 4);
    }

    #[test]
    fn attack_needs_the_margin() {
        let (transfers, _) = Map::new(&[(1, 1), (2, 2)], &[(1, 2)])
            .set(1, Owner::Me, 8)
            .set(2, Owner::Opponent, 4)
            .plan(5);
        assert!(transfers.is_empty());
    }

    #[test]
    fn oversized_stack_attacks_regardless() {
        let (transfers, _) = Map::new(&[(1, 1), (2, 2)], &[(1, 2)])
            .set(1, Owner::Me, 320)
            .set(2, Owner::Opponent, 200)
            .plan(80);
        assert_eq!(transfers, vec![t(1, 2, 319)]);
    }

    #[test]
    fn early_attacks_are_suppressed() {
        let (transfers, _) = Map::new(&[(1, 1), (2, 2)], &[(1, 2)])
            .set(1, Owner::Me, 12)
            .set(2, Owner::Opponent, 4)
            .plan(1);
        assert!(transfers.is_empty());
    }

    #[test]
    fn expands_into_neutral_members() {
        // 1 (Me, 10) touches neutrals 2 and 3 in its own continent.
        let (transfers, _) = Map::new(&[(1, 1), (2, 1), (3, 1)], &[(1, 2), (1, 3)])
            .set(1, Owner::Me, 10)
            .set(2, Owner::Neutral, 2)
            .set(3, Owner::Neutral, 2)
            .plan(3);
        assert_eq!(transfers, vec![t(1, 2, 9)]);
    }

    #[test]
    fn small_stacks_do_not_expand() {
        let (transfers, _) = Map::new(&[(1, 1), (2, 1)], &[(1, 2)])
            .set(1, Owner::Me, 5)
            .set(2, Owner::Neutral, 2)
            .plan(3);
        assert!(transfers.is_empty());
    }

    #[test]
    fn expands_outward_once_the_continent_is_held() {
        let (transfers, _) = Map::new(&[(1, 1), (2, 1), (3, 2)], &[(1, 2), (2, 3)])
            .set(1, Owner::Me, 2)
            .set(2, Owner::Me, 7)
            .set(3, Owner::Neutral, 2)
            .plan(3);
        // 2 is down to one army after moving out, so 1 does not feed it.
        assert_eq!(transfers, vec![t(2, 3, 6)]);
    }

    #[test]
    fn fan_out_splits_a_large_stack() {
        let mut map = Map::new(&[(1, 1), (2, 1), (3, 1), (4, 1)], &[(1, 2), (1, 3), (1, 4)])
            .set(1, Owner::Me, 12)
            .set(2, Owner::Neutral, 2)
            .set(3, Owner::Neutral, 2)
            .set(4, Owner::Neutral, 2);
        let config = PlannerConfig {
            fan_out: true,
            ..PlannerConfig::default()
        };
        let transfers = map.plan_with(3, &config);
        assert_eq!(transfers, vec![t(1, 2, 3), t(1, 3, 3)]);
        assert_eq!(map.graph.lookup(1).unwrap().armies, 6);
    }

    #[test]
    fn reinforces_when_the_threat_is_too_strong() {
        // Continent 1 = {1, 2}; 3 is an opponent stack next to 1.
        let (transfers, _) = Map::new(&[(1, 1), (2, 1), (3, 2)], &[(1, 2), (1, 3)])
            .set(1, Owner::Me, 3)
            .set(2, Owner::Me, 9)
            .set(3, Owner::Opponent, 10)
            .plan(5);
        assert_eq!(transfers, vec![t(2, 1, 8)]);
    }

    #[test]
    fn reinforcement_source_must_not_face_the_opponent() {
        let (transfers, _) = Map::new(
            &[(1, 1), (2, 1), (3, 2), (4, 2)],
            &[(1, 2), (1, 3), (2, 4)],
        )
        .set(1, Owner::Me, 3)
        .set(2, Owner::Me, 9)
        .set(3, Owner::Opponent, 10)
        .set(4, Owner::Opponent, 10)
        .plan(5);
        assert!(transfers.is_empty());
    }

    #[test]
    fn clears_weakest_hostile_member_first() {
        let (transfers, _) = Map::new(&[(1, 1), (2, 1), (3, 1)], &[(1, 2), (1, 3)])
            .set(1, Owner::Me, 9)
            .set(2, Owner::Opponent, 4)
            .set(3, Owner::Opponent, 2)
            .plan(5);
        assert_eq!(transfers, vec![t(1, 3, 4)]);
    }

    #[test]
    fn hostile_member_is_cleared_when_no_invasion_path_is_held() {
        // 2 is an opponent member inside continent 1; the only invasion
        // path (4) is neutral, so the interior is cleared instead of swept.
        let (transfers, _) = Map::new(
            &[(1, 1), (2, 1), (3, 1), (4, 2)],
            &[(1, 2), (1, 3), (1, 4)],
        )
        .set(1, Owner::Me, 20)
        .set(2, Owner::Opponent, 3)
        .set(3, Owner::Neutral, 2)
        .set(4, Owner::Neutral, 2)
        .plan(5);
        assert_eq!(transfers, vec![t(1, 2, 6)]);
    }

    #[test]
    fn quiet_continent_attacks_weakest_path_from_outside() {
        // Continent 2 = {2, 3} is unreported and touched by 1 from
        // continent 1; 4 and 5 are opponent paths into it.
        let (transfers, _) = Map::new(
            &[(2, 2), (3, 2), (4, 3), (5, 3), (1, 1)],
            &[(2, 3), (1, 2), (2, 4), (2, 5), (1, 4), (1, 5)],
        )
        .set(1, Owner::Me, 20)
        .set(4, Owner::Opponent, 3)
        .set(5, Owner::Opponent, 5)
        .plan(5);
        assert_eq!(transfers, vec![t(1, 4, 6)]);
    }

    #[test]
    fn border_attack_is_followed_by_a_neutral_sweep() {
        let (transfers, _) = Map::new(
            &[(1, 1), (2, 1), (4, 1), (3, 2)],
            &[(1, 2), (1, 3), (2, 4)],
        )
        .set(1, Owner::Me, 20)
        .set(2, Owner::Neutral, 2)
        .set(4, Owner::Me, 9)
        .set(3, Owner::Opponent, 4)
        .plan(5);
        assert_eq!(transfers, vec![t(1, 3, 8), t(4, 2, 8)]);
    }

    #[test]
    fn unreachable_hostile_falls_back_to_expansion() {
        // 1 cannot take 2 and has no home member next to it, so it expands
        // into the neutral 3 instead.
        let (transfers, _) = Map::new(&[(2, 2), (3, 2), (1, 1)], &[(1, 2), (1, 3), (2, 3)])
            .set(1, Owner::Me, 9)
            .set(2, Owner::Opponent, 5)
            .set(3, Owner::Neutral, 2)
            .plan(5);
        assert_eq!(transfers, vec![t(1, 3, 8)]);
    }

    #[test]
    fn later_ceiling_tiers_unlock_big_stacks() {
        let board = || {
            Map::new(&[(1, 1), (2, 2)], &[(1, 2)])
                .set(1, Owner::Me, 450)
                .set(2, Owner::Opponent, 300)
        };
        assert!(board().plan(60).0.is_empty());
        assert_eq!(board().plan(70).0, vec![t(1, 2, 449)]);
    }

    #[test]
    fn huge_defender_does_not_overflow_the_margin() {
        let (transfers, _) = Map::new(&[(1, 1), (2, 2)], &[(1, 2)])
            .set(1, Owner::Me, 100)
            .set(2, Owner::Opponent, u32::MAX / 2 + 1)
            .plan(5);
        assert!(transfers.is_empty());
    }

    #[test]
    fn stuck_stack_moves_toward_frontier() {
        let (transfers, _) = Map::new(
            &[(1, 1), (2, 1), (3, 1), (4, 1)],
            &[(1, 2), (2, 3), (3, 4)],
        )
        .set(1, Owner::Me, 6)
        .set(2, Owner::Me, 1)
        .set(3, Owner::Me, 1)
        .set(4, Owner::Neutral, 2)
        .plan(5);
        assert_eq!(transfers, vec![t(1, 2, 5)]);
    }

    #[test]
    fn enclosed_island_stays_put() {
        let (transfers, _) = Map::new(&[(1, 1), (2, 1)], &[(1, 2)])
            .set(1, Owner::Me, 3)
            .set(2, Owner::Me, 1)
            .plan(5);
        assert!(transfers.is_empty());
    }

    #[test]
    fn skips_continents_without_foothold() {
        let (transfers, _) = Map::new(&[(1, 1), (2, 2), (3, 2)], &[(2, 3)])
            .set(1, Owner::Me, 30)
            .set(2, Owner::Neutral, 2)
            .set(3, Owner::Neutral, 2)
            .plan(5);
        assert!(transfers.is_empty());
    }
}
