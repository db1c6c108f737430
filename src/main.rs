//! Bird Arcade entry point
//!
//! Headless demo: runs a scripted playthrough of each mode and reports the
//! outcome. The browser embedding lives in `platform::web` and is driven by
//! the host page instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bird_arcade::sim::GamePhase;
    use bird_arcade::{Engine, ModeConfig};

    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xB17D);
    log::info!("Bird Arcade headless demo (seed {seed})");

    // Runner: flap on a fixed cadence until the run ends
    let mut engine = Engine::new(ModeConfig::runner(), seed);
    engine.start_game();
    engine.frame();
    let mut frames = 0u32;
    while engine.snapshot().phase == GamePhase::Playing && frames < 36_000 {
        if frames % 25 == 0 {
            engine.jump();
        }
        engine.frame();
        frames += 1;
    }
    println!(
        "runner: {:?} after {} frames, score {}",
        engine.snapshot().phase,
        frames,
        engine.snapshot().score
    );

    // Puzzle: keep slinging at the tower until the playthrough resolves
    let mut engine = Engine::new(ModeConfig::puzzle(), seed);
    engine.start_game();
    engine.frame();
    let mut frames = 0u32;
    while engine.snapshot().phase == GamePhase::Playing && frames < 36_000 {
        let actor = *engine.snapshot().actor;
        if !actor.launched {
            engine.drag_start(actor.pos.x, actor.pos.y);
            engine.drag_move(actor.pos.x - 80.0, actor.pos.y + 55.0);
            engine.drag_release();
        }
        engine.frame();
        frames += 1;
    }
    println!(
        "puzzle: {:?} after {} frames, score {}",
        engine.snapshot().phase,
        frames,
        engine.snapshot().score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM hosts construct platform::web::ArcadeApp directly
}
