use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::math::scalar::inverse_sqrt_fast;
use crate::math::{Mat2, MathError, Quaternion};

/// A 2-component single-precision vector.
///
/// Pure value type: copied on assignment, no identity beyond its field
/// values. NaN and infinity are legal components and propagate per
/// IEEE754. The `repr(C)` layout keeps `x` then `y` adjacent with no
/// padding, so a `Vector2` can be reinterpreted as a raw pair of `f32`
/// for buffer uploads.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Broadcasts one scalar into both components.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }

    /// Checked component read; `Err(IndexOutOfRange)` outside `{0, 1}`.
    #[inline]
    pub fn component(self, index: usize) -> Result<f32, MathError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(MathError::IndexOutOfRange(index)),
        }
    }

    /// Checked component write; `Err(IndexOutOfRange)` outside `{0, 1}`.
    #[inline]
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(MathError::IndexOutOfRange(index)),
        }
        Ok(())
    }

    /// Exact Euclidean norm.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Approximate norm via [`inverse_sqrt_fast`]; roughly 0.2%
    /// relative error.
    #[inline]
    pub fn length_fast(self) -> f32 {
        1.0 / inverse_sqrt_fast(self.length_squared())
    }

    /// Sum of squared components. No square root; prefer this for
    /// comparing magnitudes.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// The vector rotated a quarter turn clockwise: `(y, -x)`.
    #[inline]
    pub fn perpendicular_right(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// The vector rotated a quarter turn counter-clockwise: `(-y, x)`.
    #[inline]
    pub fn perpendicular_left(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Scales the receiver to unit length in place.
    #[inline]
    pub fn normalize(&mut self) {
        let scale = 1.0 / self.length();
        self.x *= scale;
        self.y *= scale;
    }

    /// Unit-length copy; the receiver is untouched.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut copy = self;
        copy.normalize();
        copy
    }

    /// In-place approximate normalization via [`inverse_sqrt_fast`].
    #[inline]
    pub fn normalize_fast(&mut self) {
        let scale = inverse_sqrt_fast(self.length_squared());
        self.x *= scale;
        self.y *= scale;
    }

    /// Approximately unit-length copy; the receiver is untouched.
    #[inline]
    pub fn normalized_fast(self) -> Self {
        let mut copy = self;
        copy.normalize_fast();
        copy
    }

    #[inline]
    pub fn add(left: Self, right: Self) -> Self {
        Self::new(left.x + right.x, left.y + right.y)
    }

    #[inline]
    pub fn add_into(left: Self, right: Self, result: &mut Self) {
        result.x = left.x + right.x;
        result.y = left.y + right.y;
    }

    #[inline]
    pub fn subtract(left: Self, right: Self) -> Self {
        Self::new(left.x - right.x, left.y - right.y)
    }

    #[inline]
    pub fn subtract_into(left: Self, right: Self, result: &mut Self) {
        result.x = left.x - right.x;
        result.y = left.y - right.y;
    }

    #[inline]
    pub fn multiply(vec: Self, scale: f32) -> Self {
        Self::new(vec.x * scale, vec.y * scale)
    }

    #[inline]
    pub fn multiply_into(vec: Self, scale: f32, result: &mut Self) {
        result.x = vec.x * scale;
        result.y = vec.y * scale;
    }

    /// Component-wise product.
    #[inline]
    pub fn multiply_components(left: Self, right: Self) -> Self {
        Self::new(left.x * right.x, left.y * right.y)
    }

    #[inline]
    pub fn multiply_components_into(left: Self, right: Self, result: &mut Self) {
        result.x = left.x * right.x;
        result.y = left.y * right.y;
    }

    #[inline]
    pub fn divide(vec: Self, scale: f32) -> Self {
        Self::new(vec.x / scale, vec.y / scale)
    }

    #[inline]
    pub fn divide_into(vec: Self, scale: f32, result: &mut Self) {
        result.x = vec.x / scale;
        result.y = vec.y / scale;
    }

    /// Component-wise quotient.
    #[inline]
    pub fn divide_components(left: Self, right: Self) -> Self {
        Self::new(left.x / right.x, left.y / right.y)
    }

    #[inline]
    pub fn divide_components_into(left: Self, right: Self, result: &mut Self) {
        result.x = left.x / right.x;
        result.y = left.y / right.y;
    }

    /// Per-component minimum. Raw `<` comparisons; NaN operands fall
    /// through to the right-hand side.
    #[inline]
    pub fn component_min(a: Self, b: Self) -> Self {
        Self::new(
            if a.x < b.x { a.x } else { b.x },
            if a.y < b.y { a.y } else { b.y },
        )
    }

    /// Per-component maximum, same comparison policy as
    /// [`component_min`](Self::component_min).
    #[inline]
    pub fn component_max(a: Self, b: Self) -> Self {
        Self::new(
            if a.x > b.x { a.x } else { b.x },
            if a.y > b.y { a.y } else { b.y },
        )
    }

    /// Whole-vector selection by squared length. Strict `<`: on a tie
    /// the second operand is returned.
    #[inline]
    pub fn magnitude_min(left: Self, right: Self) -> Self {
        if left.length_squared() < right.length_squared() {
            left
        } else {
            right
        }
    }

    /// Whole-vector selection by squared length. Uses `>=`: on a tie
    /// the first operand is returned. The asymmetry with
    /// [`magnitude_min`](Self::magnitude_min) is intentional.
    #[inline]
    pub fn magnitude_max(left: Self, right: Self) -> Self {
        if left.length_squared() >= right.length_squared() {
            left
        } else {
            right
        }
    }

    /// Independent per-component clamp (not a bounded-length clamp).
    #[inline]
    pub fn clamp(vec: Self, min: Self, max: Self) -> Self {
        Self::new(
            if vec.x < min.x {
                min.x
            } else if vec.x > max.x {
                max.x
            } else {
                vec.x
            },
            if vec.y < min.y {
                min.y
            } else if vec.y > max.y {
                max.y
            } else {
                vec.y
            },
        )
    }

    /// Exact Euclidean distance between two points.
    #[inline]
    pub fn distance(left: Self, right: Self) -> f32 {
        Self::distance_squared(left, right).sqrt()
    }

    #[inline]
    pub fn distance_squared(left: Self, right: Self) -> f32 {
        let dx = right.x - left.x;
        let dy = right.y - left.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn dot(left: Self, right: Self) -> f32 {
        left.x * right.x + left.y * right.y
    }

    /// Perpendicular dot (wedge) product, the signed parallelogram
    /// area: `left.x * right.y - left.y * right.x`.
    #[inline]
    pub fn perp_dot(left: Self, right: Self) -> f32 {
        left.x * right.y - left.y * right.x
    }

    /// Unclamped linear blend: `a + blend * (b - a)`.
    ///
    /// Unlike the scalar `lerp`, `blend` is not clamped into `[0, 1]`,
    /// so values outside that range extrapolate.
    #[inline]
    pub fn lerp(a: Self, b: Self, blend: f32) -> Self {
        Self::new(blend * (b.x - a.x) + a.x, blend * (b.y - a.y) + a.y)
    }

    /// Barycentric combination `a + u*(b - a) + v*(c - a)`.
    #[inline]
    pub fn barycentric(a: Self, b: Self, c: Self, u: f32, v: f32) -> Self {
        Self::add(
            Self::add(a, Self::multiply(Self::subtract(b, a), u)),
            Self::multiply(Self::subtract(c, a), v),
        )
    }

    /// Row-vector transform: `vec * mat`, combining the matrix rows.
    #[inline]
    pub fn transform_row(vec: Self, mat: Mat2) -> Self {
        Self::new(
            vec.x * mat.row0.x + vec.y * mat.row1.x,
            vec.x * mat.row0.y + vec.y * mat.row1.y,
        )
    }

    /// Column-vector transform: `mat * vec`, the transposed sense of
    /// [`transform_row`](Self::transform_row). The two conventions
    /// differ for non-symmetric matrices.
    #[inline]
    pub fn transform_column(mat: Mat2, vec: Self) -> Self {
        Self::new(
            mat.row0.x * vec.x + mat.row0.y * vec.y,
            mat.row1.x * vec.x + mat.row1.y * vec.y,
        )
    }

    /// Rotates the vector by a quaternion: embeds it as `(x, y, 0, 0)`
    /// and conjugates, `q * v * q^-1`.
    #[inline]
    pub fn transform(vec: Self, quat: Quaternion) -> Self {
        let v = Quaternion::new(vec.x, vec.y, 0.0, 0.0);
        let inverse = Quaternion::invert(quat);
        let rotated = Quaternion::multiply(Quaternion::multiply(quat, v), inverse);
        Self::new(rotated.x, rotated.y)
    }

    /// Swizzle read: the components in (y, x) order.
    #[inline]
    pub fn yx(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Swizzle write: `value.x` lands in `y` and `value.y` in `x`.
    #[inline]
    pub fn set_yx(&mut self, value: Self) {
        self.y = value.x;
        self.x = value.y;
    }

    /// Combines the component hashes with the 397 multiplier. Values
    /// that compare equal hash identically (`-0.0` is normalized to
    /// `0.0` first).
    #[inline]
    pub fn hash_code(self) -> i32 {
        #[inline]
        fn component_hash(v: f32) -> i32 {
            // -0.0 == 0.0 but their bit patterns differ.
            if v == 0.0 { 0 } else { v.to_bits() as i32 }
        }
        component_hash(self.x).wrapping_mul(397) ^ component_hash(self.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", MathError::IndexOutOfRange(index)),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("{}", MathError::IndexOutOfRange(index)),
        }
    }
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self * rhs.x, self * rhs.y)
    }
}

impl Mul for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl MulAssign<f32> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Mul<Mat2> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Mat2) -> Self {
        Self::transform_row(self, rhs)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<f32> for Vector2 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}
