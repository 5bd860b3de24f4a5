//! Single-precision 2D vector algebra and scalar numeric utilities.
//!
//! The crate has two layers: a stateless scalar kernel
//! ([`math::scalar`]) with constants, fast approximate functions and
//! float-comparison primitives, and the [`math::Vector2`] value type
//! built on top of it, together with the small [`math::Mat2`] and
//! [`math::Quaternion`] types its transform operations need.

pub mod math;
