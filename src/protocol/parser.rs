//! Game-engine command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that the
//! engine main loop can dispatch on. Verbs and sub-commands are matched
//! case-insensitively; player names keep their case.

use std::str::FromStr;

use tracing::debug;

use crate::board::{ContinentId, TerritoryId};

/// Errors raised for malformed protocol lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown {command} sub-command '{sub}'")]
    UnknownSubcommand { command: &'static str, sub: String },

    #[error("{command}: missing {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("{command}: invalid number '{token}'")]
    InvalidNumber { command: &'static str, token: String },

    #[error("{command}: expected groups of {group} arguments, got {count}")]
    UnpairedArguments {
        command: &'static str,
        group: usize,
        count: usize,
    },
}

/// A `settings` line the engine acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    YourBot(String),
    OpponentBot(String),
    StartingArmies(u32),
    MaxRounds(u32),
    /// Milliseconds.
    Timebank(u64),
    /// Milliseconds.
    TimePerMove(u64),
}

/// A `setup_map` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupMap {
    /// `(continent id, reward)` pairs.
    Continents(Vec<(ContinentId, u32)>),
    /// `(territory id, continent id)` pairs.
    Territories(Vec<(TerritoryId, ContinentId)>),
    /// Each territory with the neighbors listed for it.
    Neighbors(Vec<(TerritoryId, Vec<TerritoryId>)>),
    Wastelands(Vec<TerritoryId>),
}

/// One `(territory, player, armies)` triple of an `update_map` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipUpdate {
    pub territory: TerritoryId,
    pub player: String,
    pub armies: u32,
}

/// A parsed engine-to-bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Settings(Setting),
    SetupMap(SetupMap),

    /// Choose one of the candidate territories as a starting region.
    PickStartingRegion {
        timebank_ms: u64,
        candidates: Vec<TerritoryId>,
    },

    /// Ownership snapshot starting a new round.
    UpdateMap(Vec<OwnershipUpdate>),

    /// Request for this turn's placements.
    PlaceArmies { timebank_ms: u64 },

    /// Request for this turn's attacks and transfers.
    AttackTransfer { timebank_ms: u64 },
}

/// Parses a single line of input into a `Command`.
///
/// Returns `Ok(None)` for empty lines and for input the bot deliberately
/// ignores (unknown settings, `opponent_moves`).
pub fn parse_command(line: &str) -> Result<Option<Command>, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, args)) = tokens.split_first() else {
        return Ok(None);
    };

    match verb.to_ascii_lowercase().as_str() {
        "settings" => parse_settings(args),
        "setup_map" => parse_setup_map(args).map(|s| Some(Command::SetupMap(s))),
        "pick_starting_region" => parse_pick_starting_region(args).map(Some),
        "update_map" => parse_update_map(args).map(|u| Some(Command::UpdateMap(u))),
        "opponent_moves" => {
            debug!("ignoring opponent_moves");
            Ok(None)
        }
        "go" => parse_go(args).map(Some),
        _ => Err(ProtocolError::UnknownCommand(verb.to_string())),
    }
}

fn number<T: FromStr>(command: &'static str, token: &str) -> Result<T, ProtocolError> {
    token.parse().map_err(|_| ProtocolError::InvalidNumber {
        command,
        token: token.to_string(),
    })
}

/// Time bank tokens only inform; an unreadable one counts as zero so the
/// request still gets a reply.
fn time_token(token: Option<&&str>) -> u64 {
    token.and_then(|t| t.parse().ok()).unwrap_or(0)
}

fn argument<'a>(
    command: &'static str,
    args: &[&'a str],
    index: usize,
    what: &'static str,
) -> Result<&'a str, ProtocolError> {
    args.get(index)
        .copied()
        .ok_or(ProtocolError::MissingArgument { command, what })
}

/// Splits `args` into groups of `group` tokens, rejecting a ragged tail.
fn groups<'a, 'b>(
    command: &'static str,
    args: &'b [&'a str],
    group: usize,
) -> Result<std::slice::ChunksExact<'b, &'a str>, ProtocolError> {
    if args.len() % group != 0 {
        return Err(ProtocolError::UnpairedArguments {
            command,
            group,
            count: args.len(),
        });
    }
    Ok(args.chunks_exact(group))
}

fn parse_settings(args: &[&str]) -> Result<Option<Command>, ProtocolError> {
    const CMD: &str = "settings";
    let key = argument(CMD, args, 0, "setting name")?.to_ascii_lowercase();
    let setting = match key.as_str() {
        "your_bot" => Setting::YourBot(argument(CMD, args, 1, "bot name")?.to_string()),
        "opponent_bot" => Setting::OpponentBot(argument(CMD, args, 1, "bot name")?.to_string()),
        "starting_armies" => {
            Setting::StartingArmies(number(CMD, argument(CMD, args, 1, "army count")?)?)
        }
        "max_rounds" => Setting::MaxRounds(number(CMD, argument(CMD, args, 1, "round count")?)?),
        "timebank" => Setting::Timebank(number(CMD, argument(CMD, args, 1, "milliseconds")?)?),
        "time_per_move" => {
            Setting::TimePerMove(number(CMD, argument(CMD, args, 1, "milliseconds")?)?)
        }
        _ => {
            debug!(setting = %key, "ignoring setting");
            return Ok(None);
        }
    };
    Ok(Some(Command::Settings(setting)))
}

/// Parses `args` as consecutive `(a, b)` number pairs.
fn pairs<A: FromStr, B: FromStr>(
    command: &'static str,
    args: &[&str],
) -> Result<Vec<(A, B)>, ProtocolError> {
    let mut out = Vec::with_capacity(args.len() / 2);
    for pair in groups(command, args, 2)? {
        out.push((number(command, pair[0])?, number(command, pair[1])?));
    }
    Ok(out)
}

fn parse_setup_map(args: &[&str]) -> Result<SetupMap, ProtocolError> {
    const CMD: &str = "setup_map";
    let sub = argument(CMD, args, 0, "sub-command")?.to_ascii_lowercase();
    let rest = &args[1..];

    match sub.as_str() {
        "super_regions" => Ok(SetupMap::Continents(pairs(CMD, rest)?)),
        "regions" => Ok(SetupMap::Territories(pairs(CMD, rest)?)),
        "neighbors" => {
            let mut lists = Vec::with_capacity(rest.len() / 2);
            for pair in groups(CMD, rest, 2)? {
                let mut neighbors = Vec::new();
                for id in pair[1].split(',').filter(|s| !s.is_empty()) {
                    neighbors.push(number(CMD, id)?);
                }
                lists.push((number(CMD, pair[0])?, neighbors));
            }
            Ok(SetupMap::Neighbors(lists))
        }
        "wastelands" => rest
            .iter()
            .map(|s| number(CMD, s))
            .collect::<Result<_, _>>()
            .map(SetupMap::Wastelands),
        _ => Err(ProtocolError::UnknownSubcommand { command: CMD, sub }),
    }
}

fn parse_pick_starting_region(args: &[&str]) -> Result<Command, ProtocolError> {
    const CMD: &str = "pick_starting_region";
    argument(CMD, args, 0, "time")?;
    let timebank_ms = time_token(args.first());
    let candidates = args[1..]
        .iter()
        .map(|s| number(CMD, s))
        .collect::<Result<Vec<_>, _>>()?;
    if candidates.is_empty() {
        return Err(ProtocolError::MissingArgument {
            command: CMD,
            what: "candidate territories",
        });
    }
    Ok(Command::PickStartingRegion {
        timebank_ms,
        candidates,
    })
}

fn parse_update_map(args: &[&str]) -> Result<Vec<OwnershipUpdate>, ProtocolError> {
    const CMD: &str = "update_map";
    let mut updates = Vec::with_capacity(args.len() / 3);
    for triple in groups(CMD, args, 3)? {
        updates.push(OwnershipUpdate {
            territory: number(CMD, triple[0])?,
            player: triple[1].to_string(),
            armies: number(CMD, triple[2])?,
        });
    }
    Ok(updates)
}

fn parse_go(args: &[&str]) -> Result<Command, ProtocolError> {
    const CMD: &str = "go";
    let sub = argument(CMD, args, 0, "sub-command")?.to_ascii_lowercase();
    let timebank_ms = time_token(args.get(1));
    match sub.as_str() {
        "place_armies" => Ok(Command::PlaceArmies { timebank_ms }),
        "attack/transfer" => Ok(Command::AttackTransfer { timebank_ms }),
        _ => Err(ProtocolError::UnknownSubcommand { command: CMD, sub }),
    }
}
