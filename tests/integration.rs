//! Integration tests for the foothold binary.
//!
//! Tests the full protocol session flow by spawning the bot process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the bot and collects stdout lines.
fn run_bot(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_foothold");
    let mut child = Command::new(exe)
        .env_remove("FOOTHOLD_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start foothold");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// A small map: continent 1 = {1, 2, 3} (reward 3), continent 2 = {4, 5}
/// (reward 2). Edges: 1-2, 1-3, 2-3, 3-4, 4-5.
const SETUP: &[&str] = &[
    "settings timebank 10000",
    "settings time_per_move 500",
    "settings max_rounds 60",
    "settings your_bot player1",
    "settings opponent_bot player2",
    "setup_map super_regions 1 3 2 2",
    "setup_map regions 1 1 2 1 3 1 4 2 5 2",
    "setup_map neighbors 1 2,3 2 3 3 4 4 5",
    "setup_map wastelands 5",
    "settings starting_regions 2 5",
];

fn session(turn: &[&str]) -> Vec<String> {
    let commands: Vec<&str> = SETUP.iter().chain(turn).copied().collect();
    run_bot(&commands)
}

#[test]
fn setup_produces_no_output() {
    assert!(session(&[]).is_empty());
}

#[test]
fn pick_starting_region_replies_with_candidate() {
    let lines = session(&["pick_starting_region 10000 2 5"]);
    // Continent 2 has fewer members, so 5 is preferred.
    assert_eq!(lines, vec!["5"]);
}

#[test]
fn full_turn() {
    let lines = session(&[
        "settings starting_armies 5",
        "update_map 1 player1 2 2 neutral 2 3 neutral 2 4 player2 2",
        "opponent_moves",
        "go place_armies 10000",
        "go attack/transfer 10000",
    ]);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("player1 place_armies "));
    let placed: u32 = lines[0]
        .split(',')
        .map(|order| order.rsplit(' ').next().unwrap().parse::<u32>().unwrap())
        .sum();
    assert_eq!(placed, 5);
    // Round 1 is before the attack-start round, so player2 is never attacked.
    assert!(!lines[1].contains(" 4 "));
}

#[test]
fn attacks_after_the_first_round() {
    let lines = session(&[
        "update_map 1 player1 2 3 player2 4",
        "update_map 1 player1 12 3 player2 4",
        "go attack/transfer 10000",
    ]);
    assert_eq!(lines, vec!["player1 attack/transfer 1 3 8"]);
}

#[test]
fn malformed_lines_are_skipped() {
    let lines = session(&[
        "bogus command",
        "update_map 1 player1",
        "settings starting_armies lots",
        "go attack/transfer 10000",
    ]);
    assert_eq!(lines, vec!["No moves"]);
}

#[test]
fn missing_config_file_fails_fast() {
    let exe = env!("CARGO_BIN_EXE_foothold");
    let status = Command::new(exe)
        .arg("/nonexistent/foothold.json")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to start foothold");
    assert!(!status.success());
}
