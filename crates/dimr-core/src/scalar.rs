//! Numeric types a unit can be attached to

use crate::factor::Factor;

/// A numeric type that can be rescaled by a conversion [`Factor`].
///
/// `INTEGRAL`, `LOWER` and `UPPER` let [`crate::Rescale`] decide during
/// compilation whether a ratio is representable for the type. Whether the
/// scaled *value* fits is only known at run time, so `scale` reports it.
/// Typed code only hands integers integral ratios; the run-time
/// [`crate::convert()`] rounds floating ratios instead.
pub trait Scalar: Copy {
    /// Whether the type only holds whole numbers
    const INTEGRAL: bool;
    /// Smallest integral ratio the type can hold
    const LOWER: i128;
    /// Largest integral ratio the type can hold
    const UPPER: i128;

    /// Multiply by `factor`, or `None` if the result does not fit in `Self`.
    /// `Factor::ONE` must return `self` untouched.
    fn scale(self, factor: Factor) -> Option<Self>;

    /// Widen to `f64`, possibly losing precision
    fn to_f64(self) -> f64;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const INTEGRAL: bool = true;
                const LOWER: i128 = <$t>::MIN as i128;
                const UPPER: i128 = if <$t>::MAX as u128 > i128::MAX as u128 {
                    i128::MAX
                } else {
                    <$t>::MAX as i128
                };

                #[inline]
                fn scale(self, factor: Factor) -> Option<Self> {
                    match factor {
                        Factor::Integral(1) => Some(self),
                        Factor::Integral(n) => match <$t>::try_from(n) {
                            Ok(n) => self.checked_mul(n),
                            Err(_) => (self == 0).then_some(self),
                        },
                        Factor::Floating(x) => {
                            let scaled = (self as f64 * x).round();
                            // MAX + 1 is a power of two, exact in f64
                            let fits = scaled >= <$t>::MIN as f64 && scaled < <$t>::MAX as f64 + 1.0;
                            fits.then(|| scaled as $t)
                        }
                    }
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const INTEGRAL: bool = false;
                const LOWER: i128 = i128::MIN;
                const UPPER: i128 = i128::MAX;

                /// Never fails: overflow is an infinity, as for any float product.
                #[inline]
                fn scale(self, factor: Factor) -> Option<Self> {
                    match factor {
                        Factor::Integral(1) => Some(self),
                        _ => Some((self as f64 * factor.to_f64()) as $t),
                    }
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

#[cfg(feature = "decimal")]
mod decimal {
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
    use rust_decimal::Decimal;

    use super::Scalar;
    use crate::factor::Factor;

    // 2^96 - 1, the largest mantissa a Decimal holds
    const DECIMAL_MAX: i128 = 79_228_162_514_264_337_593_543_950_335;

    impl Scalar for Decimal {
        const INTEGRAL: bool = false;
        const LOWER: i128 = -DECIMAL_MAX;
        const UPPER: i128 = DECIMAL_MAX;

        fn scale(self, factor: Factor) -> Option<Self> {
            match factor {
                Factor::Integral(1) => Some(self),
                Factor::Integral(n) => match Decimal::try_from_i128_with_scale(n, 0) {
                    Ok(n) => self.checked_mul(n),
                    Err(_) => self.is_zero().then_some(self),
                },
                Factor::Floating(x) => self.checked_mul(Decimal::from_f64(x)?),
            }
        }

        fn to_f64(self) -> f64 {
            ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_untouched() {
        assert_eq!(7_u8.scale(Factor::ONE), Some(7));
        assert_eq!(0.1_f32.scale(Factor::ONE), Some(0.1));
        assert!(f64::NAN.scale(Factor::ONE).unwrap().is_nan());
    }

    #[test]
    fn test_integers_scale_exactly() {
        assert_eq!(5_i32.scale(Factor::Integral(1000)), Some(5000));
        assert_eq!((-3_i64).scale(Factor::Integral(60)), Some(-180));
        assert_eq!(1600_u32.scale(Factor::Floating(0.001)), Some(2));
    }

    #[test]
    fn test_integer_overflow_is_reported() {
        assert_eq!(3_000_000_i32.scale(Factor::Integral(1000)), None);
        assert_eq!(200_u8.scale(Factor::Floating(1.5)), None);
        assert_eq!(1_u8.scale(Factor::Integral(1 << 40)), None);
        assert_eq!(0_u8.scale(Factor::Integral(1 << 40)), Some(0));
        assert_eq!((-1_i8).scale(Factor::Floating(128.0)), Some(-128));
        assert_eq!(1_i8.scale(Factor::Floating(128.0)), None);
        assert_eq!(i64::MAX.scale(Factor::Floating(2.0)), None);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(<u8 as Scalar>::UPPER, 255);
        assert_eq!(<i16 as Scalar>::LOWER, -32768);
        assert_eq!(<u128 as Scalar>::UPPER, i128::MAX);
        assert_eq!(<u64 as Scalar>::LOWER, 0);
        assert!(!<f32 as Scalar>::INTEGRAL);
    }

    #[test]
    fn test_floats() {
        assert_eq!(2.0_f64.scale(Factor::Integral(3)), Some(6.0));
        assert!((1.0_f32.scale(Factor::Floating(0.3048)).unwrap() - 0.3048).abs() < 1e-6);
        assert_eq!(f32::MAX.scale(Factor::Integral(10)), Some(f32::INFINITY));
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn test_decimal() {
        use rust_decimal::Decimal;
        use std::str::FromStr;

        let d = Decimal::from_str("2.5").unwrap();
        // Decimal::scale is an inherent method, so name the trait
        assert_eq!(Scalar::scale(d, Factor::Integral(1000)), Some(Decimal::from(2500)));
        assert_eq!(Scalar::scale(d, Factor::Floating(0.5)), Some(Decimal::from_str("1.25").unwrap()));
        assert_eq!(Scalar::scale(Decimal::MAX, Factor::Integral(2)), None);
    }
}
