//! Circle-circle collision detection and resolution
//!
//! Detection is an exact overlap test; resolution is the equal-mass elastic
//! response that exchanges the along-normal velocity components and leaves
//! the tangential components untouched. No position correction is applied:
//! because only the approach component is exchanged, a resolved pair is
//! already separating and will not re-trigger next step.

use super::body::Body;

/// Exact overlap test: squared center distance strictly below the squared
/// sum of radii.
#[inline]
pub fn bodies_overlap(a: &Body, b: &Body) -> bool {
    let reach = a.radius + b.radius;
    a.pos.distance_squared(b.pos) < reach * reach
}

/// Equal-mass elastic response along the center-to-center normal.
///
/// Projects each velocity onto the unit normal and swaps the two scalar
/// components - a 1D elastic collision of equal masses generalized to 2D.
/// Returns `false` without touching either body when the centers coincide
/// (no normal exists); the pair will separate on its own next step.
pub fn resolve_elastic(a: &mut Body, b: &mut Body) -> bool {
    let delta = b.pos - a.pos;
    let dist_sq = delta.length_squared();
    if dist_sq <= f32::EPSILON {
        return false;
    }
    let n = delta / dist_sq.sqrt();

    let sa = a.vel.dot(n);
    let sb = b.vel.dot(n);
    a.vel += (sb - sa) * n;
    b.vel += (sa - sb) * n;
    true
}
