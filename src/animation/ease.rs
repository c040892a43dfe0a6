/// Smoothstep ease-in-out: `t² · (3 − 2t)`.
///
/// Input is clamped to `[0, 1]`; non-finite input is treated as `0`. The curve hits both
/// endpoints exactly, is symmetric about `0.5` and has zero slope at either end.
pub fn ease(t: f64) -> f64 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
