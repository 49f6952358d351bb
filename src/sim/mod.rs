//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Frame-stepped only (one full step per frame, no substepping)
//! - Seeded RNG only (used solely for spawn directions)
//! - Single-threaded, single-owner state
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod state;
pub mod tick;

pub use body::{Body, BodyStore};
pub use collision::{bodies_overlap, resolve_elastic};
pub use state::{Hud, InteractionMode, RenderBody, RunState, SimState};
pub use tick::{Intent, step, tick};
