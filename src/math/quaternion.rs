use core::ops::Mul;

use crate::math::Vector2;

/// A rotation quaternion with vector part `(x, y, z)` and scalar `w`.
///
/// Only the operations [`Vector2::transform`] needs are carried here:
/// construction, inversion and the Hamilton product.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation by `angle` radians about the z axis, the only axis a
    /// 2D rotation uses.
    #[inline]
    pub fn from_z_rotation(angle: f32) -> Self {
        let half = angle * 0.5;
        Self::new(0.0, 0.0, half.sin(), half.cos())
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// `q^-1`, the conjugate over the squared length. A zero-length
    /// quaternion is returned unchanged.
    #[inline]
    pub fn invert(q: Self) -> Self {
        let length_sq = q.length_squared();
        if length_sq != 0.0 {
            let i = 1.0 / length_sq;
            Self::new(-q.x * i, -q.y * i, -q.z * i, q.w * i)
        } else {
            q
        }
    }

    /// Hamilton product `left * right`.
    #[inline]
    pub fn multiply(left: Self, right: Self) -> Self {
        Self::new(
            left.w * right.x + left.x * right.w + left.y * right.z - left.z * right.y,
            left.w * right.y - left.x * right.z + left.y * right.w + left.z * right.x,
            left.w * right.z + left.x * right.y - left.y * right.x + left.z * right.w,
            left.w * right.w - left.x * right.x - left.y * right.y - left.z * right.z,
        )
    }
}

impl Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::multiply(self, rhs)
    }
}

impl Mul<Vector2> for Quaternion {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::transform(rhs, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_multiplication() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Quaternion::multiply(q, Quaternion::IDENTITY), q);
        assert_eq!(Quaternion::multiply(Quaternion::IDENTITY, q), q);
    }

    #[test]
    fn inversion_round_trips() {
        let q = Quaternion::new(0.5, -1.0, 2.0, 0.25);
        let product = q * Quaternion::invert(q);
        assert_relative_eq!(product.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(product.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(product.z, 0.0, epsilon = 1e-6);
        assert_relative_eq!(product.w, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn invert_zero_is_a_no_op() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(Quaternion::invert(zero), zero);
    }

    #[test]
    fn z_rotation_turns_vectors() {
        let q = Quaternion::from_z_rotation(crate::math::scalar::PI_OVER_2);
        let out = q * Vector2::UNIT_X;
        assert_relative_eq!(out.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(out.y, 1.0, epsilon = 1e-6);

        let back = Quaternion::from_z_rotation(-crate::math::scalar::PI_OVER_2) * out;
        assert_relative_eq!(back.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(back.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn non_unit_rotation_still_rotates() {
        // invert() divides by the squared length, so conjugation by a
        // scaled quaternion is still a pure rotation.
        let q = Quaternion::from_z_rotation(1.0);
        let scaled = Quaternion::new(q.x * 3.0, q.y * 3.0, q.z * 3.0, q.w * 3.0);

        let a = q * Vector2::new(2.0, -1.0);
        let b = scaled * Vector2::new(2.0, -1.0);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
    }
}
