use core::ops::Mul;

use crate::math::Vector2;

/// A 2x2 matrix stored as two row vectors.
///
/// Row-major: `row0` is the top row. [`Vector2::transform_row`] treats
/// an operand vector as a row and combines these rows;
/// [`Vector2::transform_column`] applies the transposed sense.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Mat2 {
    pub row0: Vector2,
    pub row1: Vector2,
}

impl Mat2 {
    pub const IDENTITY: Self = Self::new(Vector2::UNIT_X, Vector2::UNIT_Y);

    #[inline]
    pub const fn new(row0: Vector2, row1: Vector2) -> Self {
        Self { row0, row1 }
    }

    /// Counter-clockwise rotation for the row-vector convention.
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self::new(Vector2::new(c, s), Vector2::new(-s, c))
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self::new(
            Vector2::new(self.row0.x, self.row1.x),
            Vector2::new(self.row0.y, self.row1.y),
        )
    }
}

impl Mul<Vector2> for Mat2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::transform_column(self, rhs)
    }
}
