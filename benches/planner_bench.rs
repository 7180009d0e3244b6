use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use foothold::board::{GameState, Owner, TerritoryGraph};
use foothold::config::PlannerConfig;
use foothold::plan::{plan_placements, plan_transfers};

const TERRITORIES: u32 = 42;
const CONTINENTS: u32 = 6;

/// A seeded random map about the size of the standard board, with
/// ownership split between both players and neutrals.
fn random_map(seed: u64) -> TerritoryGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = TerritoryGraph::new();
    for c in 1..=CONTINENTS {
        graph.add_continent(c, rng.gen_range(1..=7)).unwrap();
    }
    for id in 1..=TERRITORIES {
        // Contiguous blocks keep continents mostly connected.
        let continent = (id - 1) * CONTINENTS / TERRITORIES + 1;
        graph.add_territory(id, continent).unwrap();
    }
    for id in 1..TERRITORIES {
        graph.add_neighbors(id, &[id + 1]).unwrap();
        let extra = rng.gen_range(1..=TERRITORIES);
        graph.add_neighbors(id, &[extra]).unwrap();
    }
    graph.recompute_borders().unwrap();

    for id in 1..=TERRITORIES {
        let owner = match rng.gen_range(0..10) {
            0..=2 => Owner::Me,
            3..=4 => Owner::Opponent,
            5..=8 => Owner::Neutral,
            _ => Owner::Unknown,
        };
        graph.set_ownership(id, owner, rng.gen_range(1..30)).unwrap();
    }
    graph
}

fn state(round: u32) -> GameState {
    let mut state = GameState::new();
    state.set_my_name("player1");
    state.set_opponent_name("player2");
    state.round = round;
    state
}

fn bench_recompute_borders(c: &mut Criterion) {
    let graph = random_map(7);
    c.bench_function("recompute_borders_42", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| g.recompute_borders(),
            BatchSize::SmallInput,
        )
    });
}

fn bench_placements(c: &mut Criterion) {
    let graph = random_map(7);
    let config = PlannerConfig::default();
    c.bench_function("plan_placements_42", |b| {
        b.iter_batched(
            || (graph.clone(), state(10)),
            |(mut g, mut s)| plan_placements(&mut g, &mut s, black_box(&config), black_box(12)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_transfers(c: &mut Criterion) {
    let graph = random_map(7);
    let config = PlannerConfig::default();
    let s = state(10);
    c.bench_function("plan_transfers_42", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| plan_transfers(&mut g, black_box(&s), black_box(&config)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_full_turn(c: &mut Criterion) {
    let config = PlannerConfig::default();
    let maps: Vec<TerritoryGraph> = (0..16).map(random_map).collect();
    c.bench_function("full_turn_16_maps", |b| {
        b.iter(|| {
            for graph in &maps {
                let mut g = graph.clone();
                let mut s = state(10);
                let placements = plan_placements(&mut g, &mut s, &config, 12);
                let transfers = plan_transfers(&mut g, &s, &config);
                black_box((placements, transfers));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_recompute_borders,
    bench_placements,
    bench_transfers,
    bench_full_turn,
);
criterion_main!(benches);
