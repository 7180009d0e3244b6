//! Continent border analysis.
//!
//! Derives, per continent, the invasion paths (foreign territories adjacent
//! to a member) and the border territories (members touching another
//! continent). Must run after all adjacency is loaded.

use super::graph::{GraphError, TerritoryGraph};

/// Recomputes invasion paths and border territories of every continent.
///
/// Invasion paths keep duplicates: a foreign territory adjacent to three
/// members appears three times, which downstream scoring reads as exposure.
pub fn recompute_borders(graph: &mut TerritoryGraph) -> Result<(), GraphError> {
    if !graph.adjacency_loaded {
        return Err(GraphError::AdjacencyNotLoaded);
    }

    for c in 0..graph.continents().len() {
        let mut invasion_paths = Vec::new();
        let mut border_territories = Vec::new();

        for &member in graph.continent(c).members() {
            let before = invasion_paths.len();
            invasion_paths.extend(
                graph
                    .territory(member)
                    .neighbor_slots()
                    .iter()
                    .copied()
                    .filter(|&n| graph.territory(n).continent() != c),
            );
            if invasion_paths.len() > before {
                border_territories.push(member);
            }
        }

        let continent = graph.continent_mut(c);
        continent.invasion_paths = invasion_paths;
        continent.border_territories = border_territories;
    }

    graph.borders_fresh = true;
    Ok(())
}
