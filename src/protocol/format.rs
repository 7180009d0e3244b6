//! Reply serialization.

use crate::board::{Placement, TerritoryId, Transfer};

/// Reply sent when there is nothing to do this turn.
pub const NO_MOVES: &str = "No moves";

/// Formats placements as `me place_armies id n`, comma-separated.
pub fn format_placements(me: &str, placements: &[Placement]) -> String {
    join_or_no_moves(
        placements
            .iter()
            .map(|p| format!("{} place_armies {} {}", me, p.territory, p.armies)),
    )
}

/// Formats transfers as `me attack/transfer src dst n`, comma-separated.
pub fn format_transfers(me: &str, transfers: &[Transfer]) -> String {
    join_or_no_moves(transfers.iter().map(|t| {
        format!(
            "{} attack/transfer {} {} {}",
            me, t.source, t.target, t.armies
        )
    }))
}

/// Formats the reply to `pick_starting_region`.
pub fn format_starting_region(id: TerritoryId) -> String {
    id.to_string()
}

fn join_or_no_moves(orders: impl Iterator<Item = String>) -> String {
    let joined = orders.collect::<Vec<_>>().join(",");
    if joined.is_empty() {
        NO_MOVES.to_string()
    } else {
        joined
    }
}
