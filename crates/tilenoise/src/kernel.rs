//! Interpolation kernel shared by every octave.

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
///
/// First and second derivatives vanish at 0 and 1, so neighbouring lattice
/// cells meet without visible creases.
#[inline]
#[must_use]
pub fn fade(t: f64) -> f64 {
    ((t * 6.0 - 15.0) * t + 10.0) * t * t * t
}

/// Linear blend from `a` (t = 0) to `b` (t = 1).
#[inline]
#[must_use]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    b * t + a * (1.0 - t)
}

/// Dot product of `(dx, dy)` with one of eight signed axis/diagonal directions.
///
/// Only the low three bits of `selector` matter.
#[inline]
#[must_use]
pub fn gradient(selector: usize, dx: f64, dy: f64) -> f64 {
    match selector & 0x7 {
        0 => dy,
        1 => dx + dy,
        2 => dx,
        3 => dx - dy,
        4 => -dy,
        5 => -dx - dy,
        6 => -dx,
        _ => -dx + dy,
    }
}
