use rand::Rng;

use crate::math::Vector2;
use crate::math::scalar::TWO_PI;

/// Random scalar in [-1, 1].
#[inline]
pub fn random_unit(rng: &mut impl Rng) -> f32 {
    rng.gen_range(-1.0..=1.0)
}

#[inline]
pub fn random_range(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    rng.gen_range(lo..=hi)
}

/// Random direction of unit length.
#[inline]
pub fn random_unit_vector(rng: &mut impl Rng) -> Vector2 {
    let angle = rng.gen_range(0.0..TWO_PI);
    Vector2::new(angle.cos(), angle.sin())
}
