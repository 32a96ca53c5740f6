//! Scalar helpers used for frame-rate dependent damping

/// Linear interpolation with the blend factor clamped to `[0, 1]`.
///
/// Callers pass `delta * rate` directly; a long frame saturates at `b`
/// instead of overshooting it.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Wrap `value` into the half-open range `[min, max)`.
///
/// Values below `min` wrap around to the top of the range rather than
/// clamping. An empty range returns `min`.
#[inline]
pub fn wrap(value: i64, min: i64, max: i64) -> i64 {
    let range = max - min;
    if range <= 0 {
        return min;
    }
    min + (value - min).rem_euclid(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_midpoint() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(-4.0, 4.0, 0.25), -2.0);
    }

    #[test]
    fn test_lerp_saturates() {
        assert_eq!(lerp(0.0, 10.0, 7.5), 10.0);
        assert_eq!(lerp(3.0, 10.0, -1.0), 3.0);
    }

    #[test]
    fn test_wrap_forward_and_backward() {
        assert_eq!(wrap(3, 0, 3), 0);
        assert_eq!(wrap(-1, 0, 3), 2);
        assert_eq!(wrap(-4, 0, 3), 2);
        assert_eq!(wrap(1, 0, 3), 1);
    }

    #[test]
    fn test_wrap_offset_range() {
        assert_eq!(wrap(0, 1, 4), 3);
        assert_eq!(wrap(4, 1, 4), 1);
    }

    #[test]
    fn test_wrap_empty_range() {
        assert_eq!(wrap(5, 2, 2), 2);
    }
}
