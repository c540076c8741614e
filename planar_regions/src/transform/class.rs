use std::ops;

/// Bitmask classifying the structure of an [AffineTransform](crate::transform::AffineTransform).
///
/// The classification is computed structurally from the six coefficients using exact comparisons
/// (a transform built from `rotation(PI)` may classify as general rotation rather than quadrant
/// rotation due to floating point representation of the trigonometric values).
///
/// [TransformClass::IDENTITY] is the empty mask; all other values are combinations of the flag
/// constants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct TransformClass(u32);

impl TransformClass {
    /// Identity transform (empty mask).
    pub const IDENTITY: Self = Self(0);
    /// Transform includes a translation component.
    pub const TRANSLATION: Self = Self(1);
    /// Transform includes a uniform (both axes equal magnitude, not 1) scale component.
    pub const UNIFORM_SCALE: Self = Self(2);
    /// Transform includes a scale component with differing axis magnitudes.
    pub const GENERAL_SCALE: Self = Self(4);
    /// Transform includes a rotation by a multiple of 90 degrees.
    pub const QUADRANT_ROTATION: Self = Self(8);
    /// Transform includes a rotation by an arbitrary angle.
    pub const GENERAL_ROTATION: Self = Self(16);
    /// Transform cannot be decomposed into scale/rotation/flip/translation (shear present).
    pub const GENERAL_TRANSFORM: Self = Self(32);
    /// Transform flips orientation (negative determinant).
    pub const FLIP: Self = Self(64);

    /// Mask of either scale flag.
    pub const ANY_SCALE: Self = Self(2 | 4);
    /// Mask of either rotation flag.
    pub const ANY_ROTATION: Self = Self(8 | 16);

    /// Raw bit value of the mask.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if all flags of `other` are set in `self`.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns true if any flag of `other` is set in `self`.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns true if the mask is empty (identity transform).
    #[inline]
    pub fn is_identity(self) -> bool {
        self.0 == 0
    }
}

impl ops::BitOr for TransformClass {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for TransformClass {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl ops::BitAnd for TransformClass {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
