//! Engine state management.
//!
//! Holds the territory graph, the game state and the planner configuration
//! between commands, and answers the `pick_starting_region` and `go` requests.
//! Planning failures are logged and answered with a safe fallback so the game
//! engine never times the bot out.

use std::io::{self, Write};

use tracing::{debug, error, info, warn};

use crate::board::{GameState, GraphError, TerritoryGraph, TerritoryId};
use crate::config::{ConfigError, PlannerConfig};
use crate::plan::{plan_placements, plan_transfers};
use crate::protocol::{
    format_placements, format_starting_region, format_transfers, parse_command, Command,
    OwnershipUpdate, ProtocolError, Setting, SetupMap, NO_MOVES,
};

/// Errors surfaced to the main loop.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write reply: {0}")]
    Io(#[from] io::Error),
}

/// Holds the mutable state of the bot between commands.
#[derive(Debug, Default)]
pub struct Engine {
    pub graph: TerritoryGraph,
    pub state: GameState,
    pub config: PlannerConfig,
}

impl Engine {
    /// Creates an engine with an empty map and default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given tuning.
    pub fn with_config(config: PlannerConfig) -> Self {
        Engine {
            config,
            ..Self::default()
        }
    }

    /// Parses and handles one protocol line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), EngineError> {
        match parse_command(line)? {
            Some(command) => self.handle(command, out),
            None => Ok(()),
        }
    }

    /// Dispatches a parsed command.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<(), EngineError> {
        match command {
            Command::Settings(setting) => {
                self.apply_setting(setting);
                Ok(())
            }
            Command::SetupMap(setup) => Ok(self.setup_map(setup)?),
            Command::UpdateMap(updates) => Ok(self.update_map(&updates)?),
            Command::PickStartingRegion {
                timebank_ms,
                candidates,
            } => {
                self.state.timebank_ms = timebank_ms;
                self.handle_pick_starting_region(&candidates, out)
            }
            Command::PlaceArmies { timebank_ms } => {
                self.state.timebank_ms = timebank_ms;
                self.handle_place_armies(out)
            }
            Command::AttackTransfer { timebank_ms } => {
                self.state.timebank_ms = timebank_ms;
                self.handle_attack_transfer(out)
            }
        }
    }

    /// Records a `settings` value.
    pub fn apply_setting(&mut self, setting: Setting) {
        match setting {
            Setting::YourBot(name) => self.state.set_my_name(&name),
            Setting::OpponentBot(name) => self.state.set_opponent_name(&name),
            Setting::StartingArmies(armies) => self.state.starting_armies = armies,
            Setting::MaxRounds(rounds) => self.state.max_rounds = rounds,
            Setting::Timebank(ms) => self.state.timebank_ms = ms,
            Setting::TimePerMove(ms) => self.state.time_per_move_ms = ms,
        }
    }

    /// Applies one `setup_map` line to the graph. Loading neighbors also
    /// recomputes continent borders.
    pub fn setup_map(&mut self, setup: SetupMap) -> Result<(), GraphError> {
        match setup {
            SetupMap::Continents(continents) => {
                for (id, reward) in continents {
                    self.graph.add_continent(id, reward)?;
                }
            }
            SetupMap::Territories(territories) => {
                for (id, continent) in territories {
                    self.graph.add_territory(id, continent)?;
                }
            }
            SetupMap::Neighbors(lists) => {
                for (id, neighbors) in &lists {
                    self.graph.add_neighbors(*id, neighbors)?;
                }
                self.graph.recompute_borders()?;
                info!(
                    territories = self.graph.territories().len(),
                    continents = self.graph.continents().len(),
                    "map loaded"
                );
            }
            SetupMap::Wastelands(ids) => {
                for id in ids {
                    self.graph.set_wasteland(id)?;
                }
            }
        }
        Ok(())
    }

    /// Starts a new round from an ownership snapshot. Territories missing
    /// from the snapshot stay `Unknown`.
    pub fn update_map(&mut self, updates: &[OwnershipUpdate]) -> Result<(), GraphError> {
        self.state.round += 1;
        self.graph.reset_all_ownership();
        for update in updates {
            let owner = self.state.role_of(&update.player);
            self.graph
                .set_ownership(update.territory, owner, update.armies)?;
        }
        debug!(round = self.state.round, visible = updates.len(), "map updated");
        Ok(())
    }

    /// Replies with the preferred starting region, or the first candidate if
    /// the pick fails.
    pub fn handle_pick_starting_region<W: Write>(
        &mut self,
        candidates: &[TerritoryId],
        out: &mut W,
    ) -> Result<(), EngineError> {
        let picked = self
            .graph
            .mark_candidate_starting_territories(candidates)
            .and_then(|()| self.graph.pick_preferred_starting_territory());
        let reply = match picked {
            Ok(id) => format_starting_region(id),
            Err(e) => {
                error!(error = %e, "starting pick failed, falling back to first candidate");
                candidates
                    .first()
                    .map_or_else(String::new, |&id| format_starting_region(id))
            }
        };
        writeln!(out, "{}", reply)?;
        out.flush()?;
        Ok(())
    }

    /// Plans, applies and replies with this turn's placements.
    pub fn handle_place_armies<W: Write>(&mut self, out: &mut W) -> Result<(), EngineError> {
        let Some(me) = self.state.my_name().map(str::to_string) else {
            warn!("place_armies before your_bot was set");
            return reply(out, NO_MOVES);
        };
        let budget = self.state.starting_armies;
        let placements = plan_placements(&mut self.graph, &mut self.state, &self.config, budget);
        info!(round = self.state.round, budget, count = placements.len(), "placed armies");
        reply(out, &format_placements(&me, &placements))
    }

    /// Plans and replies with this turn's attacks and transfers, or
    /// `No moves` if planning fails.
    pub fn handle_attack_transfer<W: Write>(&mut self, out: &mut W) -> Result<(), EngineError> {
        let Some(me) = self.state.my_name().map(str::to_string) else {
            warn!("attack/transfer before your_bot was set");
            return reply(out, NO_MOVES);
        };
        match plan_transfers(&mut self.graph, &self.state, &self.config) {
            Ok(transfers) => reply(out, &format_transfers(&me, &transfers)),
            Err(e) => {
                error!(error = %e, "transfer planning failed");
                reply(out, NO_MOVES)
            }
        }
    }
}

fn reply<W: Write>(out: &mut W, line: &str) -> Result<(), EngineError> {
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
