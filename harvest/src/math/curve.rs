/// Smooth acceleration and deceleration over `t` in `[0, 1]`.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.max(0.0).min(1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Height of a thrown item: zero at both ends, peak `impulse / 4` in the middle.
#[inline]
pub fn parabola(t: f32, impulse: f32) -> f32 {
    ((t * t - t) * impulse).abs()
}
