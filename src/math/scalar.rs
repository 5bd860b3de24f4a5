//! Stateless scalar kernel: constants, fast approximate functions,
//! angle normalization and float-comparison primitives.
//!
//! Single-precision entry points use the f32 constants below so results
//! stay bit-reproducible across platforms; the f64 overloads use the
//! full-precision constants from `core`.

use crate::math::MathError;

/// Pi rounded to single precision.
pub const PI: f32 = 3.141592653589793;
/// Euler's number rounded to single precision.
pub const E: f32 = 2.718281828459045;
pub const PI_OVER_2: f32 = PI / 2.0;
pub const PI_OVER_3: f32 = PI / 3.0;
pub const PI_OVER_4: f32 = PI / 4.0;
pub const PI_OVER_6: f32 = PI / 6.0;
pub const TWO_PI: f32 = 2.0 * PI;
pub const THREE_PI_OVER_2: f32 = 3.0 * PI / 2.0;
pub const LOG10_E: f32 = 0.434294482;
pub const LOG2_E: f32 = 1.442695041;

/// Smallest power of two greater than or equal to `n`, computed as
/// `2^ceil(log2(n))`.
///
/// Fails with [`MathError::InvalidArgument`] for negative `n`. For
/// `n = 0` the formula degenerates (`log2(0)` is minus infinity) and
/// the result is 0, which is what `2^-inf` rounds to; callers that need
/// a usable power of two must treat 0 specially themselves.
pub fn next_power_of_two_i32(n: i32) -> Result<i32, MathError> {
    if n < 0 {
        return Err(MathError::InvalidArgument("n must be non-negative"));
    }
    Ok(2f64.powf((n as f64).log2().ceil()) as i32)
}

/// 64-bit integer variant of [`next_power_of_two_i32`].
pub fn next_power_of_two_i64(n: i64) -> Result<i64, MathError> {
    if n < 0 {
        return Err(MathError::InvalidArgument("n must be non-negative"));
    }
    Ok(2f64.powf((n as f64).log2().ceil()) as i64)
}

/// Single-precision variant of [`next_power_of_two_i32`].
pub fn next_power_of_two_f32(n: f32) -> Result<f32, MathError> {
    if n < 0.0 {
        return Err(MathError::InvalidArgument("n must be non-negative"));
    }
    Ok(2f64.powf((n as f64).log2().ceil()) as f32)
}

/// Double-precision variant of [`next_power_of_two_i32`].
pub fn next_power_of_two_f64(n: f64) -> Result<f64, MathError> {
    if n < 0.0 {
        return Err(MathError::InvalidArgument("n must be non-negative"));
    }
    Ok(2f64.powf(n.log2().ceil()))
}

/// `n!` as a 64-bit integer; returns 1 for `n <= 1`.
///
/// There is no overflow guard: beyond roughly `20!` the product wraps
/// per fixed-width integer arithmetic. This is a documented limitation.
pub fn factorial(n: i32) -> i64 {
    let mut result: i64 = 1;
    let mut n = n;
    while n > 1 {
        result = result.wrapping_mul(n as i64);
        n -= 1;
    }
    result
}

/// `n` choose `k`, via [`factorial`]; inherits its overflow limits.
pub fn binomial_coefficient(n: i32, k: i32) -> i64 {
    factorial(n) / (factorial(k).wrapping_mul(factorial(n - k)))
}

/// Approximate `1/sqrt(x)` via the fast inverse square root bit trick.
///
/// Reinterprets the IEEE754 bits of `x` as an integer, forms the guess
/// `0x5f375a86 - (bits >> 1)`, reinterprets back, then applies exactly
/// one Newton-Raphson step. Relative error stays within roughly 0.2%
/// for positive finite `x`; for `x <= 0` or non-finite `x` the bit
/// trick still produces a value but it is meaningless.
pub fn inverse_sqrt_fast(x: f32) -> f32 {
    let half = 0.5 * x;
    let bits = 0x5f37_5a86u32.wrapping_sub(x.to_bits() >> 1);
    let y = f32::from_bits(bits);
    y * (1.5 - half * y * y)
}

/// Double-precision [`inverse_sqrt_fast`], magic `0x5fe6eb50c7b537a9`.
pub fn inverse_sqrt_fast_f64(x: f64) -> f64 {
    let half = 0.5 * x;
    let bits = 0x5fe6_eb50_c7b5_37a9u64.wrapping_sub(x.to_bits() >> 1);
    let y = f64::from_bits(bits);
    y * (1.5 - half * y * y)
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

pub fn degrees_to_radians_f64(degrees: f64) -> f64 {
    degrees * (core::f64::consts::PI / 180.0)
}

pub fn radians_to_degrees_f64(radians: f64) -> f64 {
    radians * (180.0 / core::f64::consts::PI)
}

/// `max(min(n, max), min)`. Not validated for `min > max`; the
/// composition's result stands.
pub fn clamp_i32(n: i32, min: i32, max: i32) -> i32 {
    n.min(max).max(min)
}

pub fn clamp_f32(n: f32, min: f32, max: f32) -> f32 {
    n.min(max).max(min)
}

pub fn clamp_f64(n: f64, min: f64, max: f64) -> f64 {
    n.min(max).max(min)
}

/// Linearly rescales `value` from `[value_min, value_max]` into
/// `[result_min, result_max]`, clamping `value` into the source range
/// first. The intermediate product is widened to 64 bits so the scale
/// cannot overflow.
///
/// Fails with [`MathError::InvalidArgument`] when either range has
/// `min >= max`.
pub fn scale_value(
    value: i32,
    value_min: i32,
    value_max: i32,
    result_min: i32,
    result_max: i32,
) -> Result<i32, MathError> {
    if value_min >= value_max {
        return Err(MathError::InvalidArgument(
            "value_min must be less than value_max",
        ));
    }
    if result_min >= result_max {
        return Err(MathError::InvalidArgument(
            "result_min must be less than result_max",
        ));
    }

    let value = clamp_i32(value, value_min, value_max);
    let in_range = value_max as i64 - value_min as i64;
    let result_range = result_max as i64 - result_min as i64;
    let delta = (value as i64 - value_min as i64) * result_range / in_range;
    Ok((result_min as i64 + delta) as i32)
}

/// ULP-based approximate equality.
///
/// Each float's bit pattern is mapped to a signed-magnitude integer
/// (negatives become `i32::MIN - bits`, linearizing the ordering across
/// the zero crossing) and the absolute integer distance is compared
/// against `1 << max_delta_bits`.
pub fn approximately_equal(a: f32, b: f32, max_delta_bits: u32) -> bool {
    let mut a_int = a.to_bits() as i32;
    if a_int < 0 {
        a_int = i32::MIN - a_int;
    }
    let mut b_int = b.to_bits() as i32;
    if b_int < 0 {
        b_int = i32::MIN - b_int;
    }

    let int_diff = (a_int as i64 - b_int as i64).abs();
    // 1 << 63 would wrap negative; any tolerance that wide accepts
    // every pair of floats.
    let threshold = if max_delta_bits < 63 {
        1i64 << max_delta_bits
    } else {
        i64::MAX
    };
    int_diff <= threshold
}

/// Combined absolute/relative comparison.
///
/// Exact equality is a fast path (and handles infinities). When either
/// operand is zero, or the raw difference falls below the smallest
/// normal magnitude, the difference is compared against
/// `epsilon * MIN_POSITIVE`; otherwise the relative error
/// `|a - b| / min(|a| + |b|, MAX)` is compared against `epsilon`.
pub fn approximately_equal_epsilon(a: f32, b: f32, epsilon: f32) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if a == 0.0 || b == 0.0 || diff < f32::MIN_POSITIVE {
        return diff < epsilon * f32::MIN_POSITIVE;
    }
    diff / (a.abs() + b.abs()).min(f32::MAX) < epsilon
}

/// Double-precision [`approximately_equal_epsilon`].
pub fn approximately_equal_epsilon_f64(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if a == 0.0 || b == 0.0 || diff < f64::MIN_POSITIVE {
        return diff < epsilon * f64::MIN_POSITIVE;
    }
    diff / (a.abs() + b.abs()).min(f64::MAX) < epsilon
}

/// Plain absolute-difference tolerance test, no relative scaling.
pub fn approximately_equivalent(a: f32, b: f32, tolerance: f32) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= tolerance
}

/// Linear interpolation with `t` clamped into `[0, 1]` first.
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    let t = clamp_f32(t, 0.0, 1.0);
    start + t * (end - start)
}

/// Reduces an angle in degrees modulo a full turn into `[0, 360)`.
pub fn clamp_angle(degrees: f32) -> f32 {
    (degrees % 360.0).abs()
}

/// Reduces an angle in radians modulo a full turn into `[0, 2*pi)`.
pub fn clamp_radians(radians: f32) -> f32 {
    (radians % TWO_PI).abs()
}

/// Normalizes an angle in degrees into `(-180, 180]`.
pub fn normalize_angle(degrees: f32) -> f32 {
    let mut angle = clamp_angle(degrees);
    if angle > 180.0 {
        angle -= 360.0;
    }
    angle
}

/// Radian counterpart of [`normalize_angle`].
///
/// Note the threshold: the clamped angle is shifted down by `2*pi` when
/// it exceeds `pi/2`, not `pi` as the degree version's 180-of-360 would
/// suggest. The asymmetry is reproduced from the reference behavior
/// deliberately; do not "fix" it without revisiting every caller.
pub fn normalize_radians(radians: f32) -> f32 {
    let mut angle = clamp_radians(radians);
    if angle > PI_OVER_2 {
        angle -= TWO_PI;
    }
    angle
}
