//! Dimension algebra.
//!
//! A [`Dimension`] is either an absolute pixel magnitude or a ratio of some
//! reference length. Ratios stay unresolved until they are combined with
//! another dimension, at which point the caller supplies the reference length
//! (normally the matching leg of the surface's window area) and the result is
//! always expressed in pixels.

use serde::{Deserialize, Serialize};

/// Continuous scalar used for every magnitude in the engine.
pub type Real = f64;

/// Unit of a dimension.
///
/// A pixel is the atomic unit on a window. A ratio is a proportion of a pixel
/// reference length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    Pixel,
    Ratio,
}

/// A scalar paired with its unit.
///
/// Equality is structural: `Dimension::ratio(0.5)` never equals
/// `Dimension::pixel(100.0)`, even on a 200px surface. Controls compare
/// dimensions to detect configuration changes, not resolved-value changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub scalar: Real,
    #[serde(default)]
    pub unit: Unit,
}

impl Dimension {
    pub const ZERO: Self = Self {
        scalar: 0.0,
        unit: Unit::Pixel,
    };

    #[inline]
    pub const fn new(scalar: Real, unit: Unit) -> Self {
        Self { scalar, unit }
    }

    /// Absolute dimension in pixels.
    #[inline]
    pub const fn pixel(scalar: Real) -> Self {
        Self::new(scalar, Unit::Pixel)
    }

    /// Dimension proportional to a reference length.
    #[inline]
    pub const fn ratio(scalar: Real) -> Self {
        Self::new(scalar, Unit::Ratio)
    }

    #[inline]
    pub fn is_pixel(&self) -> bool {
        self.unit == Unit::Pixel
    }

    #[inline]
    pub fn is_ratio(&self) -> bool {
        self.unit == Unit::Ratio
    }

    /// Resolve to an absolute pixel value against `reference`.
    #[inline]
    pub fn resolve(self, reference: Real) -> Real {
        match self.unit {
            Unit::Pixel => self.scalar,
            Unit::Ratio => self.scalar * reference,
        }
    }

    /// Resolve to a pixel-unit dimension against `reference`.
    #[inline]
    pub fn to_pixel(self, reference: Real) -> Self {
        Self::pixel(self.resolve(reference))
    }

    /// `self + other`, resolved against `reference`.
    pub fn add(self, other: Self, reference: Real) -> Self {
        Self::pixel(self.resolve(reference) + other.resolve(reference))
    }

    /// `self - other`, resolved against `reference`.
    pub fn subtract(self, other: Self, reference: Real) -> Self {
        Self::pixel(self.resolve(reference) - other.resolve(reference))
    }

    /// Scale the scalar, keeping the unit.
    ///
    /// Scaling a ratio stays resolution-independent.
    #[inline]
    pub fn multiply(self, factor: Real) -> Self {
        Self::new(self.scalar * factor, self.unit)
    }

    /// The larger of `self` and `other`, resolved against `reference`.
    pub fn max(self, other: Self, reference: Real) -> Self {
        Self::pixel(self.resolve(reference).max(other.resolve(reference)))
    }

    /// The smaller of `self` and `other`, resolved against `reference`.
    pub fn min(self, other: Self, reference: Real) -> Self {
        Self::pixel(self.resolve(reference).min(other.resolve(reference)))
    }

    /// Whether `self >= other` once both are resolved against `reference`.
    pub fn greater_or_equal(self, other: Self, reference: Real) -> bool {
        self.resolve(reference) >= other.resolve(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_add_doubles() {
        for scalar in [0.0, 1.5, 42.0, -7.0] {
            let p = Dimension::pixel(scalar);
            for reference in [0.0, 100.0, 1920.0] {
                assert_eq!(p.add(p, reference), Dimension::pixel(2.0 * scalar));
            }
        }
    }

    #[test]
    fn ratio_add_resolves_against_reference() {
        let q = Dimension::ratio(0.25);
        assert_eq!(q.add(q, 400.0), Dimension::pixel(2.0 * 0.25 * 400.0));
    }

    #[test]
    fn mixed_units_normalize_to_pixel() {
        let sum = Dimension::ratio(0.5).add(Dimension::pixel(10.0), 200.0);
        assert_eq!(sum, Dimension::pixel(110.0));

        let diff = Dimension::pixel(150.0).subtract(Dimension::ratio(0.5), 200.0);
        assert_eq!(diff, Dimension::pixel(50.0));
    }

    #[test]
    fn multiply_preserves_unit() {
        assert_eq!(Dimension::ratio(0.4).multiply(0.5), Dimension::ratio(0.2));
        assert_eq!(Dimension::pixel(30.0).multiply(2.0), Dimension::pixel(60.0));
    }

    #[test]
    fn max_min_compare_resolved_values() {
        let a = Dimension::ratio(0.5);
        let b = Dimension::pixel(80.0);

        assert_eq!(a.max(b, 100.0), Dimension::pixel(80.0));
        assert_eq!(a.min(b, 100.0), Dimension::pixel(50.0));
        assert_eq!(a.max(b, 200.0), Dimension::pixel(100.0));

        assert!(a.greater_or_equal(b, 200.0));
        assert!(!a.greater_or_equal(b, 100.0));
        assert!(b.greater_or_equal(b, 0.0));
    }

    #[test]
    fn equality_is_structural() {
        // 0.5 of 200px resolves to 100px, but the configurations differ.
        let ratio = Dimension::ratio(0.5);
        let pixel = Dimension::pixel(100.0);
        assert_eq!(ratio.resolve(200.0), pixel.resolve(200.0));
        assert_ne!(ratio, pixel);
        assert_eq!(ratio, Dimension::ratio(0.5));
    }

    #[test]
    fn default_is_zero_pixels() {
        assert_eq!(Dimension::default(), Dimension::ZERO);
        assert!(Dimension::default().is_pixel());
    }
}
