//! Game-wide state that outlives a single turn.
//!
//! Holds the round counter, the earliest round attacks on the opponent are
//! allowed, the reinforcement budget and the player registry. The engine owns
//! one `GameState` and passes it explicitly into every planner call.

use super::territory::Owner;

/// Name the game engine uses for neutral territories.
pub const NEUTRAL_PLAYER: &str = "neutral";

/// Earliest attack round when nothing else was decided on turn 1.
const DEFAULT_START_ROUND: u32 = 2;

/// A registered player name and its role.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Player {
    name: String,
    role: Owner,
}

/// Turn counters, settings and the player registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Current round, starting at 1 with the first `update_map`.
    pub round: u32,
    /// Attacks on the opponent are suppressed while `round < start_round`.
    pub start_round: u32,
    /// Reinforcements available for the coming placement.
    pub starting_armies: u32,
    pub max_rounds: u32,
    /// Remaining time bank in milliseconds, as last reported.
    pub timebank_ms: u64,
    /// Time added to the bank per move, in milliseconds.
    pub time_per_move_ms: u64,
    players: Vec<Player>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            round: 0,
            start_round: DEFAULT_START_ROUND,
            starting_armies: 0,
            max_rounds: 0,
            timebank_ms: 0,
            time_per_move_ms: 0,
            players: vec![Player {
                name: NEUTRAL_PLAYER.to_string(),
                role: Owner::Neutral,
            }],
        }
    }
}

impl GameState {
    /// Creates a state with only the neutral player registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the agent's own name.
    pub fn set_my_name(&mut self, name: &str) {
        self.register(name, Owner::Me);
    }

    /// Registers the opponent's name.
    pub fn set_opponent_name(&mut self, name: &str) {
        self.register(name, Owner::Opponent);
    }

    /// Replaces any previous registration for `role` (or for `name`).
    fn register(&mut self, name: &str, role: Owner) {
        self.players
            .retain(|p| p.role != role && !p.name.eq_ignore_ascii_case(name));
        self.players.push(Player {
            name: name.to_string(),
            role,
        });
    }

    /// Resolves a wire player name to a role, case-insensitively.
    /// Unregistered names resolve to `Owner::Unknown`.
    pub fn role_of(&self, name: &str) -> Owner {
        self.players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map_or(Owner::Unknown, |p| p.role)
    }

    /// The agent's registered name, if any.
    pub fn my_name(&self) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.role == Owner::Me)
            .map(|p| p.name.as_str())
    }

    /// Returns true while attacks on the opponent are still suppressed.
    pub fn attacks_suppressed(&self) -> bool {
        self.round < self.start_round
    }
}
