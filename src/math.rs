/*
 * Vector Math Module
 *
 * Small helpers shared by the force rules and the boundary guard:
 * - Symmetric magnitude clamping that preserves direction
 * - Spherical interpolation between vectors (direction slerped along the
 *   great circle, magnitude blended linearly)
 */

use glam::{Quat, Vec3};

const EPSILON: f32 = 1.0e-6;

// Clamp a vector's magnitude to `max`, keeping its direction.
// Vectors already within the limit (including zero) pass through unchanged.
#[inline]
pub fn clamp_magnitude(v: Vec3, max: f32) -> Vec3 {
    let len_sq = v.length_squared();
    if len_sq > max * max {
        v * (max / len_sq.sqrt())
    } else {
        v
    }
}

// Spherically interpolate from `from` to `to` by `t` in [0, 1].
// The direction travels along the great circle between the two vectors while
// the magnitude is blended linearly, so interpolating two unit vectors stays
// on the unit sphere. Degenerate inputs (either vector near zero) fall back
// to a linear blend.
pub fn slerp(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let from_len = from.length();
    let to_len = to.length();

    if from_len <= EPSILON || to_len <= EPSILON {
        return from.lerp(to, t);
    }

    let from_dir = from / from_len;
    let to_dir = to / to_len;

    // from_rotation_arc handles the antiparallel case by picking an
    // arbitrary perpendicular axis for the half-turn.
    let arc = Quat::from_rotation_arc(from_dir, to_dir);
    let dir = Quat::IDENTITY.slerp(arc, t) * from_dir;

    dir * (from_len + (to_len - from_len) * t)
}

// Angle between two vectors in degrees. Zero-length input yields zero.
#[inline]
pub fn angle_between_degrees(a: Vec3, b: Vec3) -> f32 {
    let denom_sq = a.length_squared() * b.length_squared();
    if denom_sq <= EPSILON {
        return 0.0;
    }
    let cos = (a.dot(b) / denom_sq.sqrt()).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
