//! Conversion between units of equal dimension

use crate::equality::{equal, equal_dimension};
use crate::error::{tri, AlgebraError};
use crate::expr::UnitExpr;
use crate::factor::{factor_of, Factor};
use crate::scalar::Scalar;

/// The factor a value in `from` is multiplied by to express it in `to`.
///
/// Returns exactly `Integral(1)` when both expressions denote the same unit,
/// whatever their factors, so identity conversions never touch the value.
pub const fn ratio_between(from: &UnitExpr<'_>, to: &UnitExpr<'_>) -> Result<Factor, AlgebraError> {
    if !tri!(equal_dimension(from, to)) {
        return Err(AlgebraError::DimensionMismatch);
    }
    if tri!(equal(from, to)) {
        return Ok(Factor::ONE);
    }
    let from = tri!(factor_of(from));
    let to = tri!(factor_of(to));
    Ok(from.ratio(to))
}

/// Whether a value in `from` can be expressed in `to`.
pub const fn compatible(from: &UnitExpr<'_>, to: &UnitExpr<'_>) -> bool {
    matches!(equal_dimension(from, to), Ok(true))
}

/// Convert `value` from one unit to another.
///
/// This is the run-time face of the conversion; typed code goes through
/// [`crate::Rescale`], which resolves the ratio during compilation. Fails with
/// [`AlgebraError::ValueOutOfRange`] when the converted value does not fit in
/// `T`.
pub fn convert<T: Scalar>(from: &UnitExpr<'_>, to: &UnitExpr<'_>, value: T) -> Result<T, AlgebraError> {
    let ratio = ratio_between(from, to)?;
    value.scale(ratio).ok_or(AlgebraError::ValueOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Base;

    const LENGTH: UnitExpr<'static> = UnitExpr::Base(Base::dimension("length"));
    const TIME: UnitExpr<'static> = UnitExpr::Base(Base::dimension("time"));
    const METRE: UnitExpr<'static> = UnitExpr::Base(Base::unit("metre", &LENGTH, Factor::Integral(1)));
    const SECOND: UnitExpr<'static> = UnitExpr::Base(Base::unit("second", &TIME, Factor::Integral(1)));
    const MILE: UnitExpr<'static> = UnitExpr::Base(Base::unit("mile", &LENGTH, Factor::Floating(1609.344)));
    const KILOMETRE: UnitExpr<'static> =
        UnitExpr::Base(Base::unit("kilometre", &LENGTH, Factor::Integral(1000)));

    #[test]
    fn test_exact_ratio_stays_integral() {
        assert_eq!(ratio_between(&KILOMETRE, &METRE), Ok(Factor::Integral(1000)));
        assert_eq!(convert(&KILOMETRE, &METRE, 5_i32), Ok(5000));
    }

    #[test]
    fn test_out_of_range_value_is_an_error() {
        assert_eq!(convert(&KILOMETRE, &METRE, 3_000_000_i32), Err(AlgebraError::ValueOutOfRange));
        assert_eq!(convert(&KILOMETRE, &METRE, 3_000_000_i64), Ok(3_000_000_000));
        assert_eq!(convert(&METRE, &KILOMETRE, 2_000_u16), Ok(2));
    }

    #[test]
    fn test_inexact_ratio_is_floating() {
        assert_eq!(ratio_between(&METRE, &KILOMETRE), Ok(Factor::Floating(0.001)));
        let km = convert(&MILE, &KILOMETRE, 1.0_f64).unwrap();
        assert!((km - 1.609344).abs() < 1e-12);
    }

    #[test]
    fn test_identity_keeps_the_value() {
        assert_eq!(ratio_between(&MILE, &MILE), Ok(Factor::ONE));
        assert_eq!(convert(&MILE, &MILE, 0.1_f64), Ok(0.1));
        assert_eq!(convert(&MILE, &MILE, u8::MAX), Ok(u8::MAX));
    }

    #[test]
    fn test_mismatched_dimensions_are_refused() {
        assert_eq!(ratio_between(&METRE, &SECOND), Err(AlgebraError::DimensionMismatch));
        assert_eq!(convert(&METRE, &SECOND, 1.0_f64), Err(AlgebraError::DimensionMismatch));
        assert!(!compatible(&METRE, &SECOND));
        assert!(compatible(&MILE, &METRE));
    }
}
