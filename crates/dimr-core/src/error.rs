//! Errors raised while resolving unit expressions

use thiserror::Error;

use crate::flatten::MAX_DEPTH;
use crate::term::MAX_TERMS;

/// Every way the algebra can refuse an expression.
///
/// In typed code these never reach run time: the associated constants of
/// [`crate::Resolved`], [`crate::Conversion`] and [`crate::Rescale`] call
/// [`AlgebraError::reject`], so a failure becomes a compile error. Run-time
/// callers (the [`crate::Analyzer`], tests) receive them as ordinary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("units of unequal dimension cannot be converted into each other")]
    DimensionMismatch,

    #[error("base `{0}` does not declare a dimension")]
    MissingDimension(&'static str),

    #[error("base `{0}` does not declare a factor")]
    MissingFactor(&'static str),

    #[error("base `{0}` declares a non-positive factor")]
    NonPositiveFactor(&'static str),

    #[error("unit expression has more than {} terms", MAX_TERMS)]
    TooManyTerms,

    #[error("unit expression is nested deeper than {} levels", MAX_DEPTH)]
    NestingTooDeep,

    #[error("exponent overflow while raising a unit expression")]
    ExponentOverflow,

    #[error("converted value does not fit in the value type")]
    ValueOutOfRange,
}

impl AlgebraError {
    /// Abort constant evaluation with a message naming the failure.
    pub const fn reject(self) -> ! {
        match self {
            AlgebraError::DimensionMismatch => {
                panic!("units of unequal dimension cannot be converted into each other")
            }
            AlgebraError::MissingDimension(_) => {
                panic!("a base unit in this expression does not declare a dimension")
            }
            AlgebraError::MissingFactor(_) => {
                panic!("a base in this expression does not declare a factor")
            }
            AlgebraError::NonPositiveFactor(_) => {
                panic!("a base unit in this expression declares a non-positive factor")
            }
            AlgebraError::TooManyTerms => panic!("unit expression has too many terms"),
            AlgebraError::NestingTooDeep => panic!("unit expression is nested too deeply"),
            AlgebraError::ExponentOverflow => {
                panic!("exponent overflow while raising a unit expression")
            }
            AlgebraError::ValueOutOfRange => panic!("converted value does not fit in the value type"),
        }
    }
}

/// `?` for `const fn`s, which cannot use the `Try` trait.
macro_rules! tri {
    ($e:expr) => {
        match $e {
            Ok(value) => value,
            Err(err) => return Err(err),
        }
    };
}

pub(crate) use tri;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_base() {
        let err = AlgebraError::MissingDimension("si::Metre");
        assert_eq!(err.to_string(), "base `si::Metre` does not declare a dimension");
        assert_eq!(
            AlgebraError::TooManyTerms.to_string(),
            format!("unit expression has more than {MAX_TERMS} terms")
        );
    }
}
