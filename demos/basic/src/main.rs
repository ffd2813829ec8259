//! basic — a scripted day for the liftsim single-car simulator.
//!
//! Feeds the same ten-floor call script through both dispatch strategies,
//! prints a service summary per strategy, and writes the directional-scan
//! run's CSV projections to `output/basic/`.
//!
//! Set `RUST_LOG=lift_engine=debug,lift_dispatch=debug` to watch decisions.

use std::path::Path;

use anyhow::Result;

use lift_core::{Direction, EngineConfig, Floor, LiftState, Tick};
use lift_dispatch::{IdleParkingMode, Strategy};
use lift_engine::{EngineObserver, LiftEngineBuilder};
use lift_output::{CsvWriter, EngineOutputObserver, StateHistory};
use lift_request::{CallKind, LiftRequest, RequestEvent};

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS:        u64 = 120;
const HOME_FLOOR:         Floor = 0;
const IDLE_TIMEOUT_TICKS: u64 = 10;

// ── Call script ───────────────────────────────────────────────────────────────

enum Call {
    Hall(Floor, Direction),
    Car(Floor),
}

/// The scripted day: morning up-traffic, a lunchtime descent, one
/// direction-agnostic call in the afternoon lull.
fn script() -> Vec<(u64, Call)> {
    vec![
        (0, Call::Hall(2, Direction::Up)),
        (0, Call::Car(5)),
        (1, Call::Hall(3, Direction::Down)),
        (24, Call::Hall(8, Direction::Down)),
        (30, Call::Car(1)),
        (48, Call::Hall(6, Direction::Idle)),
        (70, Call::Car(9)),
    ]
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

struct Tee<A: EngineObserver, B: EngineObserver> {
    a: A,
    b: B,
}

impl<A: EngineObserver, B: EngineObserver> EngineObserver for Tee<A, B> {
    fn on_tick_start(&mut self, tick: Tick, state: &LiftState) {
        self.a.on_tick_start(tick, state);
        self.b.on_tick_start(tick, state);
    }

    fn on_status_change(
        &mut self,
        tick: Tick,
        from: lift_core::LiftStatus,
        to: lift_core::LiftStatus,
    ) {
        self.a.on_status_change(tick, from, to);
        self.b.on_status_change(tick, from, to);
    }

    fn on_request_event(&mut self, event: &RequestEvent) {
        self.a.on_request_event(event);
        self.b.on_request_event(event);
    }

    fn on_tick_end(&mut self, tick: Tick, state: &LiftState) {
        self.a.on_tick_end(tick, state);
        self.b.on_tick_end(tick, state);
    }
}

// ── Run one strategy ──────────────────────────────────────────────────────────

fn run_strategy(
    strategy: Strategy,
    observer: &mut dyn EngineObserver,
) -> Result<(LiftState, Vec<LiftRequest>)> {
    let mut engine = LiftEngineBuilder::new()
        .config(EngineConfig::ten_floors())
        .strategy(strategy)
        .home_floor(HOME_FLOOR)
        .idle_timeout_ticks(IDLE_TIMEOUT_TICKS)
        .idle_parking(IdleParkingMode::ParkToHomeFloor)
        .build()?;

    let calls = script();
    for tick in 0..TOTAL_TICKS {
        for (_, call) in calls.iter().filter(|(at, _)| *at == tick) {
            match *call {
                Call::Hall(floor, direction) => {
                    engine.add_hall_call(floor, direction)?;
                }
                Call::Car(floor) => {
                    engine.add_car_call(floor)?;
                }
            }
        }
        engine.tick_with(observer);
    }
    Ok((engine.state(), engine.request_history()))
}

fn kind_label(request: &LiftRequest) -> String {
    match request.kind() {
        CallKind::Car => "car".to_string(),
        CallKind::Hall { direction } => format!("hall/{direction}"),
    }
}

fn print_summary(strategy: Strategy, final_state: LiftState, history: &[LiftRequest], stats: &StateHistory) {
    println!("--- {strategy} ---");
    println!("{:<6} {:<10} {:<6} {:<10}", "Req", "Kind", "Floor", "Outcome");
    println!("{}", "-".repeat(34));
    for request in history {
        println!(
            "{:<6} {:<10} {:<6} {:<10}",
            request.id().0,
            kind_label(request),
            request.floor(),
            request.state(),
        );
    }
    println!("final: {final_state}");
    println!(
        "utilization: {:.0}% moving, {:.0}% doors open, {:.0}% idle",
        stats.moving_fraction() * 100.0,
        stats.door_open_fraction() * 100.0,
        stats.idle_fraction() * 100.0,
    );
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== basic — liftsim scripted day ===");
    println!(
        "Building: floors 0-9  |  Ticks: {TOTAL_TICKS}  |  Calls: {}",
        script().len()
    );
    println!();

    // 1. Naive strategy, stats only.
    let mut stats = StateHistory::new();
    let (final_state, history) = run_strategy(Strategy::Naive, &mut stats)?;
    print_summary(Strategy::Naive, final_state, &history, &stats);

    // 2. Directional scan, stats + CSV projections.
    std::fs::create_dir_all("output/basic")?;
    let writer = CsvWriter::create(Path::new("output/basic"))?;
    let mut tee = Tee {
        a: StateHistory::new(),
        b: EngineOutputObserver::new(writer),
    };
    let (final_state, history) = run_strategy(Strategy::DirectionalScan, &mut tee)?;
    let Tee { a: stats, b: sink } = tee;
    sink.finish()?;
    print_summary(Strategy::DirectionalScan, final_state, &history, &stats);

    println!("CSV projections written to output/basic/");
    Ok(())
}
