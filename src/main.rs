//! Bounce Arena entry point
//!
//! The interactive driver (window, input polling, drawing) is an external
//! collaborator; this binary runs a short scripted headless session against
//! the core and logs the HUD once per simulated second.

use glam::Vec2;

use bounce_arena::consts::*;
use bounce_arena::sim::{Intent, SimState, tick};

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    log::info!("Bounce Arena (headless) starting with seed {seed}");

    let mut state = SimState::new(seed, Vec2::new(ARENA_WIDTH, ARENA_HEIGHT));

    // Scripted session: spawn a few bodies, adjust speed, switch to absorb
    // mode, pause and resume, then let it run out.
    let script: &[(u64, Intent)] = &[
        (30, Intent::SpawnAt(Vec2::new(120.0, 90.0))),
        (60, Intent::SpawnAt(Vec2::new(650.0, 480.0))),
        (90, Intent::SpawnAt(Vec2::new(400.0, 100.0))),
        (120, Intent::IncreaseSpeed),
        (240, Intent::ToggleMode),
        (360, Intent::TogglePause),
        (420, Intent::TogglePause),
        (480, Intent::DecreaseSpeed),
    ];

    let fps = TARGET_FPS as u64;
    for frame in 0..(fps * 10) {
        let intents: Vec<Intent> = script
            .iter()
            .filter(|(at, _)| *at == frame)
            .map(|(_, intent)| *intent)
            .collect();
        tick(&mut state, &intents);

        if frame % fps == 0 {
            let hud = state.hud();
            log::info!(
                "t={}s state={} mode={} speed={} bodies={} collisions={} absorptions={}",
                frame / fps,
                hud.state.as_str(),
                hud.mode.as_str(),
                hud.speed,
                hud.body_count,
                hud.collisions,
                hud.absorptions,
            );
        }
    }

    let hud = state.hud();
    log::info!(
        "done: bodies={} collisions={} absorptions={}",
        hud.body_count,
        hud.collisions,
        hud.absorptions,
    );
}
