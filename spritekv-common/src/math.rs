//! Geometry types shared by the codecs
//!
//! [`Rect`] is a plain value: no ordering between `min` and `max` is
//! enforced, so degenerate and inverted rectangles survive a round trip.

use glam::DVec2;

/// Axis-aligned rectangle with `f64` bounds (y-up).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Rectangle with all four bounds at zero
    pub const ZERO: Self = Self {
        min: DVec2::ZERO,
        max: DVec2::ZERO,
    };

    /// Create from the four bounds, in wire order
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: DVec2::new(min_x, min_y),
            max: DVec2::new(max_x, max_y),
        }
    }

    /// Width (`max.x - min.x`, negative for inverted rectangles)
    pub fn w(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height (`max.y - min.y`, negative for inverted rectangles)
    pub fn h(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Bounds as `[min_x, min_y, max_x, max_y]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    /// Create from `[min_x, min_y, max_x, max_y]`
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Bit-for-bit equality, so NaN bounds and signed zeros compare as stored.
    pub fn bits_eq(&self, other: &Self) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_order() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.min, DVec2::new(1.0, 2.0));
        assert_eq!(r.max, DVec2::new(3.0, 4.0));
        assert_eq!(r.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_dimensions() {
        let r = Rect::new(0.0, 0.0, 64.0, 32.0);
        assert_eq!(r.w(), 64.0);
        assert_eq!(r.h(), 32.0);

        // Inverted rectangles are kept as-is
        let inverted = Rect::new(10.0, 10.0, 0.0, 5.0);
        assert_eq!(inverted.w(), -10.0);
        assert_eq!(inverted.h(), -5.0);
    }

    #[test]
    fn test_array_roundtrip() {
        let arr = [-1.5, 0.25, 1e9, f64::MIN_POSITIVE];
        assert_eq!(Rect::from_array(arr).to_array(), arr);
    }

    #[test]
    fn test_bits_eq() {
        let a = Rect::new(f64::NAN, 0.0, 1.0, 1.0);
        let b = a;
        assert_ne!(a, b);
        assert!(a.bits_eq(&b));

        let pos = Rect::new(0.0, 0.0, 0.0, 0.0);
        let neg = Rect::new(-0.0, 0.0, 0.0, 0.0);
        assert_eq!(pos, neg);
        assert!(!pos.bits_eq(&neg));
    }
}
