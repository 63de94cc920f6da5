use std::time::Instant;

use rx_arena::{engine::Engine, harness::Trial, scenario};

fn main() {
    env_logger::init();

    let nreps: u64 = std::env::var("RX_ARENA_NREPS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(100);

    for scenario in scenario::all() {
        for &engine in Engine::ALL {
            let trial = Trial::new(engine, &scenario).expect("compile");
            trial.verify().expect("correctness gate");
            trial.prepare();

            let start = Instant::now();
            trial.measure(nreps).expect("measurement loop");
            let elapsed = start.elapsed();

            println!(
                "{:>34}/{:<9} {} reps in {:>12.2?} ({:.2?}/rep)",
                scenario.name,
                engine.to_string(),
                nreps,
                elapsed,
                elapsed / nreps as u32,
            );
        }
    }
}
