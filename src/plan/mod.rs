//! Turn planning: reinforcement placement, then attacks and transfers.

pub mod ledger;
pub mod pathing;
pub mod placement;
pub mod ranking;
pub mod transfer;

pub use placement::plan_placements;
pub use transfer::plan_transfers;
