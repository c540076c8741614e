use super::TransformClass;
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::errors::Error;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D affine transform represented as a 2x3 matrix.
///
/// The six coefficients `(m00, m10, m01, m11, m02, m12)` encode the matrix
///
/// ```text
/// [ m00  m01  m02 ]
/// [ m10  m11  m12 ]
/// [  0    0    1  ]
/// ```
///
/// mapping a point `(x, y)` to `(m00 * x + m01 * y + m02, m10 * x + m11 * y + m12)`.
///
/// This is a plain mutable value type; like everything in this crate it is not designed for
/// concurrent mutation. Equality is exact and component-wise.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform<T = f64> {
    pub m00: T,
    pub m10: T,
    pub m01: T,
    pub m11: T,
    pub m02: T,
    pub m12: T,
}

impl<T> Default for AffineTransform<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> AffineTransform<T>
where
    T: Real,
{
    /// Create a transform from the six matrix coefficients.
    #[inline]
    pub fn new(m00: T, m10: T, m01: T, m11: T, m02: T, m12: T) -> Self {
        Self {
            m00,
            m10,
            m01,
            m11,
            m02,
            m12,
        }
    }

    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), T::zero(), T::zero())
    }

    /// Pure translation by `(tx, ty)`.
    #[inline]
    pub fn translation(tx: T, ty: T) -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), tx, ty)
    }

    /// Pure scale by `(sx, sy)` about the origin.
    #[inline]
    pub fn scaling(sx: T, sy: T) -> Self {
        Self::new(sx, T::zero(), T::zero(), sy, T::zero(), T::zero())
    }

    /// Pure shear: x coordinates shift by `shx * y`, y coordinates by `shy * x`.
    #[inline]
    pub fn shearing(shx: T, shy: T) -> Self {
        Self::new(T::one(), shy, shx, T::one(), T::zero(), T::zero())
    }

    /// Rotation about the origin by `angle` radians.
    #[inline]
    pub fn rotation(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s, -s, c, T::zero(), T::zero())
    }

    /// Rotation about the point `center` by `angle` radians.
    pub fn rotation_about(angle: T, center: Vector2<T>) -> Self {
        let mut result = Self::translation(center.x, center.y);
        result.rotate(angle);
        result.translate(-center.x, -center.y);
        result
    }

    /// Rotation by `quadrants * 90` degrees, exact (no trigonometry).
    pub fn quadrant_rotation(quadrants: i32) -> Self {
        match quadrants.rem_euclid(4) {
            0 => Self::identity(),
            1 => Self::new(T::zero(), T::one(), -T::one(), T::zero(), T::zero(), T::zero()),
            2 => Self::new(-T::one(), T::zero(), T::zero(), -T::one(), T::zero(), T::zero()),
            _ => Self::new(T::zero(), -T::one(), T::one(), T::zero(), T::zero(), T::zero()),
        }
    }

    /// The matrix determinant `m00 * m11 - m01 * m10`.
    #[inline]
    pub fn determinant(&self) -> T {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// Returns true if the matrix exactly equals the identity matrix.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Compute the structural classification bitmask for this transform.
    ///
    /// Comparisons against 0 and +/-1 are exact; the flip flag follows the sign of the
    /// determinant. The mask is derived from the coefficients on every call (never cached).
    pub fn classify(&self) -> TransformClass {
        let zero = T::zero();
        let one = T::one();
        let mut class = TransformClass::IDENTITY;

        if self.m02 != zero || self.m12 != zero {
            class |= TransformClass::TRANSLATION;
        }

        let det = self.determinant();

        if self.m01 == zero && self.m10 == zero {
            // axis aligned: scale, axis mirror, and/or 180 degree rotation
            if det < zero {
                class |= TransformClass::FLIP;
            }
            if self.m00 < zero && self.m11 < zero {
                class |= TransformClass::QUADRANT_ROTATION;
            }
            if self.m00.abs() == self.m11.abs() {
                if self.m00.abs() != one {
                    class |= TransformClass::UNIFORM_SCALE;
                }
            } else {
                class |= TransformClass::GENERAL_SCALE;
            }
        } else if self.m00 == zero && self.m11 == zero {
            // 90 or 270 degree rotation, possibly scaled and/or flipped
            class |= TransformClass::QUADRANT_ROTATION;
            if det < zero {
                class |= TransformClass::FLIP;
            }
            if self.m01.abs() == self.m10.abs() {
                if self.m01.abs() != one {
                    class |= TransformClass::UNIFORM_SCALE;
                }
            } else {
                class |= TransformClass::GENERAL_SCALE;
            }
        } else if self.m00 * self.m01 + self.m10 * self.m11 != zero {
            // columns not orthogonal: shear present
            class |= TransformClass::GENERAL_TRANSFORM;
            if det < zero {
                class |= TransformClass::FLIP;
            }
        } else {
            // orthogonal columns: a rotation, possibly scaled and/or flipped
            class |= TransformClass::GENERAL_ROTATION;
            if det < zero {
                class |= TransformClass::FLIP;
            }
            let col0 = self.m00 * self.m00 + self.m10 * self.m10;
            let col1 = self.m01 * self.m01 + self.m11 * self.m11;
            if col0 == col1 {
                if col0 != one {
                    class |= TransformClass::UNIFORM_SCALE;
                }
            } else {
                class |= TransformClass::GENERAL_SCALE;
            }
        }

        class
    }

    /// Concatenate `other` onto this transform: `self <- self o other`.
    ///
    /// The resulting transform applies `other` first, then the previous value of `self`.
    pub fn concatenate(&mut self, other: &Self) {
        let m00 = self.m00 * other.m00 + self.m01 * other.m10;
        let m10 = self.m10 * other.m00 + self.m11 * other.m10;
        let m01 = self.m00 * other.m01 + self.m01 * other.m11;
        let m11 = self.m10 * other.m01 + self.m11 * other.m11;
        let m02 = self.m00 * other.m02 + self.m01 * other.m12 + self.m02;
        let m12 = self.m10 * other.m02 + self.m11 * other.m12 + self.m12;
        *self = Self::new(m00, m10, m01, m11, m02, m12);
    }

    /// Pre-concatenate `other` onto this transform: `self <- other o self`.
    ///
    /// The resulting transform applies the previous value of `self` first, then `other`.
    pub fn pre_concatenate(&mut self, other: &Self) {
        let mut result = *other;
        result.concatenate(self);
        *self = result;
    }

    /// Returns `self o other` without mutating either operand.
    #[inline]
    pub fn then(&self, other: &Self) -> Self {
        let mut result = *self;
        result.concatenate(other);
        result
    }

    /// Concatenate a translation by `(tx, ty)`.
    #[inline]
    pub fn translate(&mut self, tx: T, ty: T) {
        self.concatenate(&Self::translation(tx, ty));
    }

    /// Concatenate a scale by `(sx, sy)`.
    #[inline]
    pub fn scale(&mut self, sx: T, sy: T) {
        self.concatenate(&Self::scaling(sx, sy));
    }

    /// Concatenate a rotation about the origin by `angle` radians.
    #[inline]
    pub fn rotate(&mut self, angle: T) {
        self.concatenate(&Self::rotation(angle));
    }

    /// Concatenate a shear.
    #[inline]
    pub fn shear(&mut self, shx: T, shy: T) {
        self.concatenate(&Self::shearing(shx, shy));
    }

    /// Reset this transform to identity.
    #[inline]
    pub fn set_to_identity(&mut self) {
        *self = Self::identity();
    }

    /// Returns the algebraic inverse of this transform.
    ///
    /// Fails with [Error::NonInvertible] when the determinant magnitude is at or near zero (the
    /// coefficients are floating point, so exact-zero comparison would be meaningless).
    pub fn inverse(&self) -> Result<Self, Error> {
        let det = self.determinant();
        if det.abs().fuzzy_eq_zero() {
            return Err(Error::NonInvertible);
        }

        Ok(Self::new(
            self.m11 / det,
            -self.m10 / det,
            -self.m01 / det,
            self.m00 / det,
            (self.m01 * self.m12 - self.m11 * self.m02) / det,
            (self.m10 * self.m02 - self.m00 * self.m12) / det,
        ))
    }

    /// Apply the full affine map to `point`.
    #[inline]
    pub fn transform_point(&self, point: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            self.m00 * point.x + self.m01 * point.y + self.m02,
            self.m10 * point.x + self.m11 * point.y + self.m12,
        )
    }

    /// Apply only the 2x2 linear part to `vector`, ignoring translation.
    ///
    /// Used for mapping direction vectors such as tangents and normals.
    #[inline]
    pub fn delta_transform(&self, vector: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            self.m00 * vector.x + self.m01 * vector.y,
            self.m10 * vector.x + self.m11 * vector.y,
        )
    }

    /// Map `point` through the inverse of this transform.
    ///
    /// Propagates [Error::NonInvertible] for a singular matrix.
    #[inline]
    pub fn inverse_transform_point(&self, point: Vector2<T>) -> Result<Vector2<T>, Error> {
        Ok(self.inverse()?.transform_point(point))
    }

    /// Apply the full affine map to every point of `points` in place.
    ///
    /// (Rust's aliasing rules make the classical overlapping source/destination buffer hazard of
    /// this operation unrepresentable; the in-place form covers that use.)
    pub fn transform_points(&self, points: &mut [Vector2<T>]) {
        for p in points.iter_mut() {
            *p = self.transform_point(*p);
        }
    }

    /// Map every point of `points` through the inverse of this transform in place.
    ///
    /// Fails with [Error::NonInvertible] before any point is written for a singular matrix.
    pub fn inverse_transform_points(&self, points: &mut [Vector2<T>]) -> Result<(), Error> {
        let inv = self.inverse()?;
        inv.transform_points(points);
        Ok(())
    }
}

// Hash is provided for the concrete float instantiations over the raw bit patterns so that
// exactly-equal transforms hash equally. Negative zero is normalized first since -0.0 == 0.0.
macro_rules! impl_transform_hash {
    ($ty:ty, $bits:ident) => {
        impl Hash for AffineTransform<$ty> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                #[inline]
                fn $bits(v: $ty) -> impl Hash {
                    if v == 0.0 {
                        (0.0 as $ty).to_bits()
                    } else {
                        v.to_bits()
                    }
                }
                $bits(self.m00).hash(state);
                $bits(self.m10).hash(state);
                $bits(self.m01).hash(state);
                $bits(self.m11).hash(state);
                $bits(self.m02).hash(state);
                $bits(self.m12).hash(state);
            }
        }
    };
}

impl_transform_hash!(f32, bits32);
impl_transform_hash!(f64, bits64);
