//! 2D offsets and the circular containment clamp.

use rand::Rng;

/// A 2D offset from the center of a container, in the same length units
/// as the container's radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the container center.
    pub fn distance(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Linear interpolation from `self` to `other` at parameter `t`.
    /// Values outside `[0, 1]` extrapolate; spring overshoot relies on that.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Pull an offset back inside a disc of radius `max_distance`.
///
/// Offsets at or inside the boundary come back unchanged, as does the exact
/// center (guards the division). Anything outside is rescaled toward the
/// center, preserving direction, so its distance is exactly `max_distance`.
/// Idempotent: a corrected offset is already inside the limit.
pub fn clamp_to_disc(offset: Offset, max_distance: f32) -> Offset {
    let distance = offset.distance();
    if distance <= max_distance || distance == 0.0 {
        return offset;
    }
    let scale = max_distance / distance;
    Offset::new(offset.x * scale, offset.y * scale)
}

/// Sample an offset with both components uniform in
/// `[-half_extent, half_extent]`.
pub fn sample_offset_in_square(rng: &mut impl Rng, half_extent: f32) -> Offset {
    Offset::new(
        rng.gen_range(-half_extent..=half_extent),
        rng.gen_range(-half_extent..=half_extent),
    )
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_clamp_rescales_outside_offset() {
        // Distance 500, limit 130 -> scale by 0.26.
        let clamped = clamp_to_disc(Offset::new(300.0, 400.0), 130.0);
        assert!((clamped.x - 78.0).abs() < 1e-3);
        assert!((clamped.y - 104.0).abs() < 1e-3);
        assert!((clamped.distance() - 130.0).abs() < 1e-3);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let once = clamp_to_disc(Offset::new(200.0, -90.0), 130.0);
        let twice = clamp_to_disc(once, 130.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clamp_leaves_interior_offset_untouched() {
        let inside = Offset::new(30.0, -40.0);
        assert_eq!(clamp_to_disc(inside, 130.0), inside);
    }

    #[test]
    fn test_clamp_leaves_boundary_offset_untouched() {
        let on_boundary = Offset::new(130.0, 0.0);
        assert_eq!(clamp_to_disc(on_boundary, 130.0), on_boundary);
    }

    #[test]
    fn test_clamp_guards_zero_distance() {
        assert_eq!(clamp_to_disc(Offset::ZERO, 130.0), Offset::ZERO);
    }

    #[test]
    fn test_sampled_offsets_clamp_within_disc() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let sampled = sample_offset_in_square(&mut rng, 130.0);
            assert!(sampled.x.abs() <= 130.0);
            assert!(sampled.y.abs() <= 130.0);
            let clamped = clamp_to_disc(sampled, 130.0);
            assert!(clamped.distance() <= 130.0 + 1e-3);
        }
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Offset::new(50.0, 50.0);
        let b = Offset::new(-30.0, 110.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 10.0).abs() < 1e-4);
        assert!((mid.y - 80.0).abs() < 1e-4);
    }
}
