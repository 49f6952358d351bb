//! Frame step: intent application, integration, pair sweep, wall reflection
//!
//! One call to `tick` per frame: the frame's edge-detected intents are
//! applied synchronously, then the physics advances exactly one step. While
//! paused, intents still apply but the step is suspended.

use glam::Vec2;

use super::collision::{bodies_overlap, resolve_elastic};
use super::state::{InteractionMode, SimState};
use crate::consts::ABSORPTION_GAIN;

/// Discrete input intents for a single frame, already edge-detected by the
/// driver (no intent fires more than once per physical press).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    TogglePause,
    ToggleMode,
    IncreaseSpeed,
    DecreaseSpeed,
    SpawnAt(Vec2),
}

/// Apply one frame's intents in order, then advance the physics one step.
pub fn tick(state: &mut SimState, intents: &[Intent]) {
    for intent in intents {
        apply(state, *intent);
    }
    step(state);
}

fn apply(state: &mut SimState, intent: Intent) {
    match intent {
        Intent::TogglePause => state.toggle_pause(),
        Intent::ToggleMode => state.toggle_mode(),
        Intent::IncreaseSpeed => state.increase_speed(),
        Intent::DecreaseSpeed => state.decrease_speed(),
        Intent::SpawnAt(point) => {
            let _ = state.spawn_at(point);
        }
    }
}

/// Advance one physics step: integrate positions, resolve overlapping
/// pairs under the current mode, then reflect off the arena walls.
/// Suspended entirely while paused - positions never change.
pub fn step(state: &mut SimState) {
    if state.is_paused() {
        return;
    }
    integrate(state);
    sweep_pairs(state);
    reflect_walls(state);
}

fn integrate(state: &mut SimState) {
    let speed = state.speed;
    for body in state.bodies.iter_mut() {
        body.pos += body.vel * speed;
    }
}

/// Pairwise sweep in increasing (i, j) order. An absorption swap-removes
/// slot j mid-sweep; the sweep continues over the post-mutation count, and
/// the body swapped into slot j is tested against i as a fresh pair.
fn sweep_pairs(state: &mut SimState) {
    let mut i = 0;
    while i < state.bodies.len() {
        let mut j = i + 1;
        while j < state.bodies.len() {
            let overlap = {
                let a = &state.bodies.as_slice()[i];
                let b = &state.bodies.as_slice()[j];
                bodies_overlap(a, b)
            };
            if overlap {
                match state.mode {
                    InteractionMode::Collide => {
                        let (a, b) = state.bodies.pair_mut(i, j);
                        if resolve_elastic(a, b) {
                            state.collisions += 1;
                        }
                        j += 1;
                    }
                    InteractionMode::Absorb => {
                        if absorb_pair(state, i, j) {
                            // Slot j now holds the previously-last body;
                            // re-test it against i without advancing.
                            continue;
                        }
                        j += 1;
                    }
                }
            } else {
                j += 1;
            }
        }
        i += 1;
    }
}

/// Fold body j's radius into body i and remove j. Rejected when fewer than
/// two bodies are live - a lone survivor cannot absorb itself.
fn absorb_pair(state: &mut SimState, i: usize, j: usize) -> bool {
    if state.bodies.len() <= 1 {
        return false;
    }
    let gained = match state.bodies.get(j) {
        Some(b) => b.radius * ABSORPTION_GAIN,
        None => return false,
    };
    if let Some(absorber) = state.bodies.get_mut(i) {
        absorber.radius += gained;
    }
    state.bodies.remove(j);
    state.absorptions += 1;
    true
}

/// Hard sign-flip reflection, each axis checked independently every step.
/// The far wall forces the axis velocity negative, the near wall forces it
/// positive; minor penetration self-corrects the following step.
fn reflect_walls(state: &mut SimState) {
    let arena = state.arena;
    for body in state.bodies.iter_mut() {
        if body.pos.x + body.radius >= arena.x {
            body.vel.x = -body.vel.x.abs();
        }
        if body.pos.x - body.radius <= 0.0 {
            body.vel.x = body.vel.x.abs();
        }
        if body.pos.y + body.radius >= arena.y {
            body.vel.y = -body.vel.y.abs();
        }
        if body.pos.y - body.radius <= 0.0 {
            body.vel.y = body.vel.y.abs();
        }
    }
}
