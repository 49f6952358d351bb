//! Bounce Arena - a 2D bouncing-body sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, pause/resume)
//!
//! Rendering and input handling are external collaborators: a frame loop
//! feeds edge-detected `Intent`s into the simulation once per frame and
//! reads back a render snapshot and HUD scalars for drawing.

pub mod sim;

/// Simulation configuration constants
pub mod consts {
    /// Arena dimensions in pixels
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Fixed body capacity; spawns beyond this are rejected
    pub const MAX_BODIES: usize = 15;

    /// Radius assigned to newly spawned bodies
    pub const BODY_RADIUS: f32 = 25.0;

    /// Distance a unit-velocity body travels per step at the default speed
    pub const DEFAULT_SPEED: f32 = 8.0;
    /// Speed change per Increase/DecreaseSpeed intent
    pub const SPEED_STEP: f32 = 1.0;

    /// Minimum per-axis magnitude for a spawn direction before normalization
    pub const MIN_AXIS_COMPONENT: f32 = 0.3;

    /// Fraction of the absorbed body's radius added to the absorber
    pub const ABSORPTION_GAIN: f32 = 0.2;

    /// Number of colors in the render palette (cosmetic only)
    pub const PALETTE_LEN: usize = 6;

    /// Target steps per second (driver pacing; the core is frame-stepped)
    pub const TARGET_FPS: u32 = 60;
}
