//! Body entity and fixed-capacity storage
//!
//! `BodyStore` is index-addressable with O(1) append and O(1) swap-remove.
//! Indices are positional, not durable: removing a body moves the last live
//! body into the freed slot, so callers must not hold indices across a step
//! that performs absorption.

use glam::Vec2;

use crate::consts::MAX_BODIES;

/// A circular body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    /// Direction of travel; scaled by the global speed scalar each step
    pub vel: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }
}

/// Fixed-capacity body collection
#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    bodies: Vec<Body>,
}

impl BodyStore {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(MAX_BODIES),
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    /// Append a body, returning its index, or `None` at capacity.
    pub fn spawn(&mut self, body: Body) -> Option<usize> {
        if self.bodies.len() >= MAX_BODIES {
            return None;
        }
        self.bodies.push(body);
        Some(self.bodies.len() - 1)
    }

    /// Swap-remove the body at `index`: the last live body moves into the
    /// freed slot. No-op unless more than one body is live and `index` is in
    /// range - the store never goes empty by removal.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.bodies.len() <= 1 || index >= self.bodies.len() {
            return false;
        }
        self.bodies.swap_remove(index);
        true
    }

    /// Exclusive references to two distinct bodies. Requires `i < j`.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        debug_assert!(i < j && j < self.bodies.len());
        let (head, tail) = self.bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    }
}
