pub mod error;
pub mod mat2;
pub mod quaternion;
pub mod scalar;
pub mod utils;
pub mod vec2;

pub use error::MathError;
pub use mat2::Mat2;
pub use quaternion::Quaternion;
pub use vec2::Vector2;
