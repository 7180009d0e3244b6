//! Bounded breadth-first search over the territory graph.

use std::collections::VecDeque;

use crate::board::TerritoryGraph;

/// Searches outward from `from` for the nearest territory within `max_depth`
/// hops satisfying `stop`, and returns the first hop on the way to it.
///
/// Neighbors are expanded in adjacency order, so among equally distant
/// matches the one discovered first wins. `from` itself is never a match.
pub fn first_step_toward(
    graph: &TerritoryGraph,
    from: usize,
    max_depth: usize,
    stop: impl Fn(usize) -> bool,
) -> Option<usize> {
    let mut seen = vec![false; graph.territories().len()];
    seen[from] = true;

    // (slot, first hop, depth)
    let mut queue = VecDeque::new();
    for &n in graph.territory(from).neighbor_slots() {
        if !seen[n] {
            seen[n] = true;
            queue.push_back((n, n, 1));
        }
    }

    while let Some((slot, hop, depth)) = queue.pop_front() {
        if stop(slot) {
            return Some(hop);
        }
        if depth == max_depth {
            continue;
        }
        for &n in graph.territory(slot).neighbor_slots() {
            if !seen[n] {
                seen[n] = true;
                queue.push_back((n, hop, depth + 1));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Owner;

    /// A path 1-2-...-n in one continent.
    fn path(n: u32) -> TerritoryGraph {
        let mut g = TerritoryGraph::new();
        g.add_continent(1, 1).unwrap();
        for id in 1..=n {
            g.add_territory(id, 1).unwrap();
        }
        for id in 1..n {
            g.add_neighbors(id, &[id + 1]).unwrap();
        }
        g
    }

    fn is_frontier(g: &TerritoryGraph) -> impl Fn(usize) -> bool + '_ {
        move |s| g.neighbors(s).any(|(_, t)| t.owner.is_foreign())
    }

    #[test]
    fn finds_first_hop_of_nearest_frontier() {
        let mut g = path(5);
        for id in 1..=4 {
            g.set_ownership(id, Owner::Me, 3).unwrap();
        }
        g.set_ownership(5, Owner::Neutral, 2).unwrap();
        // From 1 the frontier is 4, three hops away; the first hop is 2.
        assert_eq!(first_step_toward(&g, 0, 5, is_frontier(&g)), Some(1));
    }

    #[test]
    fn respects_depth_bound() {
        let mut g = path(8);
        for id in 1..=7 {
            g.set_ownership(id, Owner::Me, 3).unwrap();
        }
        g.set_ownership(8, Owner::Neutral, 2).unwrap();
        // The frontier (7) is six hops from 1.
        assert_eq!(first_step_toward(&g, 0, 5, is_frontier(&g)), None);
        assert_eq!(first_step_toward(&g, 0, 6, is_frontier(&g)), Some(1));
    }

    #[test]
    fn nearest_match_wins() {
        // 1 sits between 2 and 3; 3 reaches the frontier sooner.
        let mut g = TerritoryGraph::new();
        g.add_continent(1, 1).unwrap();
        for id in 1..=6 {
            g.add_territory(id, 1).unwrap();
        }
        g.add_neighbors(1, &[2, 3]).unwrap();
        g.add_neighbors(2, &[4]).unwrap();
        g.add_neighbors(4, &[5]).unwrap();
        g.add_neighbors(3, &[6]).unwrap();
        for id in 1..=5 {
            g.set_ownership(id, Owner::Me, 3).unwrap();
        }
        g.set_ownership(6, Owner::Opponent, 1).unwrap();
        let from = g.slot(1).unwrap();
        assert_eq!(
            first_step_toward(&g, from, 5, is_frontier(&g)),
            Some(g.slot(3).unwrap())
        );
    }

    #[test]
    fn origin_never_matches() {
        let mut g = path(2);
        g.set_ownership(1, Owner::Me, 3).unwrap();
        g.set_ownership(2, Owner::Me, 3).unwrap();
        assert_eq!(first_step_toward(&g, 0, 5, |s| s == 0), None);
    }
}
