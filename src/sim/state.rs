//! Simulation state and mutation operations
//!
//! All state lives in a single owned `SimState` passed explicitly to every
//! operation - there are no ambient globals. Determinism contract: given the
//! same seed and the same intent sequence, two states evolve identically
//! (the RNG is consumed only for spawn directions).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{Body, BodyStore};
use crate::consts::*;

/// Whether the simulation is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Playing,
    Paused,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Playing => "playing",
            RunState::Paused => "paused",
        }
    }
}

/// How overlapping bodies interact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Elastic bounce: overlapping pairs exchange along-normal velocity
    Collide,
    /// The lower-indexed body grows and the other is removed
    Absorb,
}

impl InteractionMode {
    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::Collide => InteractionMode::Absorb,
            InteractionMode::Absorb => InteractionMode::Collide,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionMode::Collide => "collide",
            InteractionMode::Absorb => "absorb",
        }
    }
}

/// Per-body render data, read-only. Color cycles through a fixed palette by
/// storage index - purely cosmetic, not a simulation invariant.
#[derive(Debug, Clone, Copy)]
pub struct RenderBody {
    pub pos: Vec2,
    pub radius: f32,
    pub color_index: usize,
}

/// Scalar readout for the driver's on-screen display
#[derive(Debug, Clone, Copy)]
pub struct Hud {
    pub state: RunState,
    pub mode: InteractionMode,
    pub speed: f32,
    pub body_count: usize,
    pub collisions: u64,
    pub absorptions: u64,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Arena extents; bodies live in [0, arena.x] x [0, arena.y]
    pub arena: Vec2,
    pub bodies: BodyStore,
    pub state: RunState,
    pub mode: InteractionMode,
    /// Global velocity multiplier, floor 0, no ceiling
    pub speed: f32,
    /// Telemetry only - never read back into physics
    pub collisions: u64,
    pub absorptions: u64,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Velocities stashed at the most recent pause; `None` while playing
    paused_velocities: Option<Vec<Vec2>>,
    rng: Pcg32,
}

impl SimState {
    /// Create a state with one seeded body at arena center.
    pub fn new(seed: u64, arena: Vec2) -> Self {
        let mut state = Self {
            arena,
            bodies: BodyStore::new(),
            state: RunState::Playing,
            mode: InteractionMode::Collide,
            speed: DEFAULT_SPEED,
            collisions: 0,
            absorptions: 0,
            seed,
            paused_velocities: None,
            rng: Pcg32::seed_from_u64(seed),
        };

        let vel = state.spawn_direction();
        let _ = state
            .bodies
            .spawn(Body::new(arena / 2.0, vel, BODY_RADIUS));
        state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    /// Random unit direction for a fresh spawn. Each axis is drawn from
    /// [-1, 1]; components smaller in magnitude than `MIN_AXIS_COMPONENT`
    /// are clamped outward so no body barely drifts along an axis, then the
    /// vector is normalized before the global speed scales it.
    fn spawn_direction(&mut self) -> Vec2 {
        let mut dir = Vec2::new(
            self.rng.random_range(-1.0f32..=1.0),
            self.rng.random_range(-1.0f32..=1.0),
        );
        if dir.x.abs() < MIN_AXIS_COMPONENT {
            dir.x = MIN_AXIS_COMPONENT.copysign(dir.x);
        }
        if dir.y.abs() < MIN_AXIS_COMPONENT {
            dir.y = MIN_AXIS_COMPONENT.copysign(dir.y);
        }
        dir.normalize()
    }

    /// Spawn a body at a user-designated point with a randomized direction.
    /// Rejected (returns `None`) at capacity or while paused.
    pub fn spawn_at(&mut self, point: Vec2) -> Option<usize> {
        if self.is_paused() {
            log::debug!("spawn rejected: paused");
            return None;
        }
        let vel = self.spawn_direction();
        let index = self.bodies.spawn(Body::new(point, vel, BODY_RADIUS));
        if index.is_none() {
            log::debug!("spawn rejected: at capacity ({MAX_BODIES})");
        }
        index
    }

    /// Edge-triggered pause toggle.
    ///
    /// Pausing snapshots every live velocity and zeroes them; positions,
    /// radii, and mode are untouched. Resuming restores velocities by
    /// position in storage order. If more bodies are live than the snapshot
    /// covers (defensive - spawning is suspended while paused), the extras
    /// keep zero velocity rather than reading out of range.
    pub fn toggle_pause(&mut self) {
        match self.state {
            RunState::Playing => {
                let stashed: Vec<Vec2> = self.bodies.iter().map(|b| b.vel).collect();
                for body in self.bodies.iter_mut() {
                    body.vel = Vec2::ZERO;
                }
                self.paused_velocities = Some(stashed);
                self.state = RunState::Paused;
            }
            RunState::Paused => {
                if let Some(stashed) = self.paused_velocities.take() {
                    for (body, vel) in self.bodies.iter_mut().zip(stashed) {
                        body.vel = vel;
                    }
                }
                self.state = RunState::Playing;
            }
        }
    }

    /// Switch interaction mode; allowed in either run state, takes effect on
    /// the next physics step.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn increase_speed(&mut self) {
        self.speed += SPEED_STEP;
    }

    /// Decrement with a floor at zero; going below zero is a no-op.
    pub fn decrease_speed(&mut self) {
        self.speed = (self.speed - SPEED_STEP).max(0.0);
    }

    /// Read-only per-frame render snapshot, in storage order.
    pub fn render_bodies(&self) -> impl Iterator<Item = RenderBody> + '_ {
        self.bodies.iter().enumerate().map(|(i, b)| RenderBody {
            pos: b.pos,
            radius: b.radius,
            color_index: i % PALETTE_LEN,
        })
    }

    pub fn hud(&self) -> Hud {
        Hud {
            state: self.state,
            mode: self.mode,
            speed: self.speed,
            body_count: self.bodies.len(),
            collisions: self.collisions,
            absorptions: self.absorptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Vec2 {
        Vec2::new(ARENA_WIDTH, ARENA_HEIGHT)
    }

    #[test]
    fn test_new_seeds_one_body_at_center() {
        let state = SimState::new(42, arena());
        assert_eq!(state.bodies.len(), 1);
        let body = state.bodies.get(0).unwrap();
        assert_eq!(body.pos, Vec2::new(400.0, 300.0));
        assert_eq!(body.radius, BODY_RADIUS);
        assert!((body.vel.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_spawn_directions_are_unit_and_off_axis() {
        let mut state = SimState::new(7, arena());
        for _ in 0..32 {
            let dir = state.spawn_direction();
            assert!((dir.length() - 1.0).abs() < 1e-5);
            assert!(dir.x != 0.0 && dir.y != 0.0);
        }
    }

    #[test]
    fn test_spawn_rejected_while_paused() {
        let mut state = SimState::new(1, arena());
        state.toggle_pause();
        assert_eq!(state.spawn_at(Vec2::new(100.0, 100.0)), None);
        assert_eq!(state.bodies.len(), 1);
    }

    #[test]
    fn test_speed_floor_at_zero() {
        let mut state = SimState::new(1, arena());
        for _ in 0..20 {
            state.decrease_speed();
        }
        assert_eq!(state.speed, 0.0);
        state.increase_speed();
        assert_eq!(state.speed, SPEED_STEP);
    }

    #[test]
    fn test_mode_toggle_round_trip() {
        let mut state = SimState::new(1, arena());
        assert_eq!(state.mode, InteractionMode::Collide);
        state.toggle_mode();
        assert_eq!(state.mode, InteractionMode::Absorb);
        state.toggle_mode();
        assert_eq!(state.mode, InteractionMode::Collide);
    }

    #[test]
    fn test_mode_toggle_allowed_while_paused() {
        let mut state = SimState::new(1, arena());
        state.toggle_pause();
        state.toggle_mode();
        assert_eq!(state.mode, InteractionMode::Absorb);
        state.toggle_pause();
        assert_eq!(state.mode, InteractionMode::Absorb);
    }

    #[test]
    fn test_render_snapshot_colors_cycle() {
        let mut state = SimState::new(3, arena());
        for i in 0..(PALETTE_LEN + 2) {
            let _ = state.spawn_at(Vec2::new(50.0 + 60.0 * i as f32, 500.0));
        }
        let colors: Vec<usize> = state.render_bodies().map(|r| r.color_index).collect();
        for (i, c) in colors.iter().enumerate() {
            assert_eq!(*c, i % PALETTE_LEN);
        }
    }

    #[test]
    fn test_resume_with_extra_bodies_defaults_to_zero() {
        let mut state = SimState::new(9, arena());
        let _ = state.spawn_at(Vec2::new(100.0, 100.0));
        state.toggle_pause();

        // Force a body in behind the suspended spawn path
        state
            .bodies
            .spawn(Body::new(Vec2::new(200.0, 200.0), Vec2::ZERO, BODY_RADIUS));

        state.toggle_pause();
        assert_eq!(state.state, RunState::Playing);
        // Restored bodies move again, the extra one stays at rest
        assert!(state.bodies.get(0).unwrap().vel.length() > 0.0);
        assert!(state.bodies.get(1).unwrap().vel.length() > 0.0);
        assert_eq!(state.bodies.get(2).unwrap().vel, Vec2::ZERO);
    }
}
