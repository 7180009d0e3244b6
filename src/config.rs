//! Planner tuning.
//!
//! Every heuristic threshold the planners use lives in `PlannerConfig`. The
//! defaults are the tuned values; a JSON file can override any subset of
//! them, e.g. `{"min_source_armies": 4, "round_ceilings": [[60, 350]]}`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "FOOTHOLD_CONFIG";

/// Errors that can occur while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Thresholds driving placement and transfer decisions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// A stack must hold more than this many armies to be used as a source
    /// for attacks and expansion.
    pub min_source_armies: u32,
    /// Stacks at or above this size are ranked last for reinforcement.
    pub oversized_stack: u32,
    /// Maximum hop count when relocating an enclosed stack.
    pub relocation_depth: usize,
    /// Attack regardless of odds with a stack above this size.
    pub default_round_ceiling: u32,
    /// `(after_round, ceiling)` pairs: past `after_round` the ceiling drops
    /// to `ceiling`. The latest matching entry wins.
    pub round_ceilings: Vec<(u32, u32)>,
    /// Let one large stack attack several neutral targets in a turn. This
    /// uses the same source more than once.
    pub fan_out: bool,
    /// Stacks above this size fan out.
    pub fan_out_stack: u32,
    /// Armies sent per fan-out target.
    pub fan_out_wave: u32,
    /// Fan-out stops once the stack is down to this many armies.
    pub fan_out_floor: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            min_source_armies: 5,
            oversized_stack: 100,
            relocation_depth: 5,
            default_round_ceiling: 500,
            round_ceilings: vec![(65, 400), (78, 300)],
            fan_out: false,
            fan_out_stack: 10,
            fan_out_wave: 3,
            fan_out_floor: 5,
        }
    }
}

impl PlannerConfig {
    /// Parses a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Stack size above which an attack is issued regardless of the odds.
    pub fn round_ceiling(&self, round: u32) -> u32 {
        self.round_ceilings
            .iter()
            .filter(|(after, _)| round > *after)
            .max_by_key(|(after, _)| *after)
            .map_or(self.default_round_ceiling, |&(_, ceiling)| ceiling)
    }
}
