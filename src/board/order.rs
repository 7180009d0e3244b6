//! Planner outputs: placements and transfers.

use super::territory::TerritoryId;

/// Add `armies` reinforcements to `territory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub territory: TerritoryId,
    pub armies: u32,
}

/// Move `armies` from `source` to the adjacent `target`. Against a
/// territory not held by the agent this is an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transfer {
    pub source: TerritoryId,
    pub target: TerritoryId,
    pub armies: u32,
}
