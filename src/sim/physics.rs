//! Velocity integration primitives
//!
//! One call advances one fixed tick. Gravity accumulates into velocity,
//! position advances by the new velocity, then friction damps the velocity.
//! Runner mode passes friction 1.0 (no damping).

use glam::Vec2;

/// Advance position and velocity by one tick.
///
/// Friction must be in `(0, 1]` and is applied after the position update, so
/// the position moved this tick reflects the undamped velocity.
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, gravity: f32, friction: f32) -> (Vec2, Vec2) {
    let vel = Vec2::new(vel.x, vel.y + gravity);
    let pos = pos + vel;
    (pos, vel * friction)
}
