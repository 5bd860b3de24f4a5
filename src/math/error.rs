use core::fmt;

/// Errors raised by the math kernel.
///
/// Numeric edge cases (division by zero, sqrt of a negative, factorial
/// overflow) are not errors: they propagate IEEE754 specials or wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A negative input to a power-of-two function, or degenerate range
    /// bounds (`min >= max`) passed to `scale_value`.
    InvalidArgument(&'static str),
    /// A vector component index outside `{0, 1}`.
    IndexOutOfRange(usize),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            MathError::IndexOutOfRange(index) => {
                write!(f, "component index out of range: {index}")
            }
        }
    }
}

impl std::error::Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        let e = MathError::InvalidArgument("n must be non-negative");
        assert_eq!(e.to_string(), "invalid argument: n must be non-negative");

        let e = MathError::IndexOutOfRange(2);
        assert_eq!(e.to_string(), "component index out of range: 2");
    }
}
