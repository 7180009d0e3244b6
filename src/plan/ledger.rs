//! Per-call reservation ledger for transfers.
//!
//! Records which territories already served as a source or target during one
//! planning call. Committing a move checks legality against the graph and
//! deducts the moved armies from the source right away, so later decisions in
//! the same call see what is actually left.

use std::collections::HashSet;

use crate::board::{TerritoryGraph, TerritoryId, Transfer};

/// Reasons a move is refused by the ledger.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("territory {0} already moved armies this turn")]
    SourceReserved(TerritoryId),

    #[error("refusing to move zero armies")]
    NoArmies,

    #[error("cannot move {requested} armies out of {source_id}, {available} available")]
    ExceedsAvailable {
        source_id: TerritoryId,
        requested: u32,
        available: u32,
    },
}

/// A committed move, addressed by slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    source: usize,
    target: usize,
    armies: u32,
}

/// Sources, targets and moves committed during one planning call.
#[derive(Debug, Default)]
pub struct Ledger {
    sources: HashSet<usize>,
    /// Sources that only ever sent fan-out waves.
    waves: HashSet<usize>,
    targets: HashSet<usize>,
    moves: Vec<Move>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_source(&self, slot: usize) -> bool {
        self.sources.contains(&slot)
    }

    pub fn is_target(&self, slot: usize) -> bool {
        self.targets.contains(&slot)
    }

    /// Returns true if the slot took part in any move this call.
    pub fn is_reserved(&self, slot: usize) -> bool {
        self.is_source(slot) || self.is_target(slot)
    }

    /// Returns true if the slot may still send a fan-out wave: it is either
    /// unused or has only sent waves so far.
    pub fn can_send_wave(&self, slot: usize) -> bool {
        !self.is_source(slot) || self.waves.contains(&slot)
    }

    /// Returns true if the slot is already sending fan-out waves.
    pub fn is_fanning(&self, slot: usize) -> bool {
        self.waves.contains(&slot)
    }

    /// Number of moves committed so far.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Commits a move from an unreserved source.
    pub fn commit(
        &mut self,
        graph: &mut TerritoryGraph,
        source: usize,
        target: usize,
        armies: u32,
    ) -> Result<(), Rejection> {
        if self.is_source(source) {
            return Err(Rejection::SourceReserved(graph.territory(source).id));
        }
        self.record(graph, source, target, armies)
    }

    /// Commits one fan-out wave. A source may send several waves but never
    /// mixes them with a regular move.
    pub fn commit_wave(
        &mut self,
        graph: &mut TerritoryGraph,
        source: usize,
        target: usize,
        armies: u32,
    ) -> Result<(), Rejection> {
        if !self.can_send_wave(source) {
            return Err(Rejection::SourceReserved(graph.territory(source).id));
        }
        self.record(graph, source, target, armies)?;
        self.waves.insert(source);
        Ok(())
    }

    fn record(
        &mut self,
        graph: &mut TerritoryGraph,
        source: usize,
        target: usize,
        armies: u32,
    ) -> Result<(), Rejection> {
        if armies == 0 {
            return Err(Rejection::NoArmies);
        }
        let available = graph.territory(source).armies.saturating_sub(1);
        if armies > available {
            return Err(Rejection::ExceedsAvailable {
                source_id: graph.territory(source).id,
                requested: armies,
                available,
            });
        }

        graph.remove_armies(source, armies);
        self.sources.insert(source);
        self.targets.insert(target);
        self.moves.push(Move {
            source,
            target,
            armies,
        });
        Ok(())
    }

    /// Converts the committed moves to wire transfers, keeping commit order
    /// and dropping those rejected by `keep`.
    pub fn into_transfers(
        self,
        graph: &TerritoryGraph,
        keep: impl Fn(usize) -> bool,
    ) -> Vec<Transfer> {
        self.moves
            .into_iter()
            .filter(|m| keep(m.target))
            .map(|m| Transfer {
                source: graph.territory(m.source).id,
                target: graph.territory(m.target).id,
                armies: m.armies,
            })
            .collect()
    }
}
