//! Units as types
//!
//! A unit is a zero-sized tag type implementing [`Unit`]. Its expression is an
//! associated constant, so everything derived from it ([`Resolved`],
//! [`Conversion`], [`Rescale`]) is computed during compilation. A failing
//! derivation is a compile error at the use site.
//!
//! Products are tuples, powers are [`Pow`], and `()` is dimensionless:
//!
//! ```
//! use dimr_core::{base_dimension, base_unit, Conversion, Factor, Per, Pow};
//!
//! base_dimension!(pub Length);
//! base_dimension!(pub Time);
//! base_unit! {
//!     pub Metre: Length = Factor::ONE;
//!     pub Second: Time = Factor::ONE;
//!     pub Minute: Time = Factor::Integral(60);
//! }
//!
//! type Acceleration = Per<Metre, Pow<Second, 2>>;
//! type Same = (Pow<Minute, -2>, Metre);
//!
//! assert_eq!(Conversion::<Same, Acceleration>::RATIO, Factor::Floating(1.0 / 3600.0));
//! ```

use std::marker::PhantomData;

use crate::convert::{compatible, ratio_between};
use crate::equality::equal;
use crate::error::AlgebraError;
use crate::expr::{UnitExpr, DIMENSIONLESS};
use crate::factor::{factor_of, Factor};
use crate::dimension::dimension_of;
use crate::scalar::Scalar;
use crate::simplify::{canonicalize, is_simplified, Canonical};
use crate::term::Base;

/// A type standing for a unit (or dimension) expression.
pub trait Unit: 'static {
    /// The expression this type stands for, as written
    const EXPR: UnitExpr<'static>;

    #[doc(hidden)]
    const EXPR_REF: &'static UnitExpr<'static> = &Self::EXPR;
}

/// `U` raised to the power `P`
pub struct Pow<U, const P: i32>(PhantomData<U>);

/// `U⁻¹`
pub type Inv<U> = Pow<U, -1>;

/// Product of two expressions, nested as written
pub type Join<A, B> = (A, B);

/// `A / B`
pub type Per<A, B> = (A, Inv<B>);

impl<U: Unit, const P: i32> Unit for Pow<U, P> {
    const EXPR: UnitExpr<'static> = UnitExpr::Power(U::EXPR_REF, P);
}

impl Unit for () {
    const EXPR: UnitExpr<'static> = DIMENSIONLESS;
}

// Factor list of a tuple product
trait Product {
    const PARTS: &'static [UnitExpr<'static>];
}

macro_rules! impl_product {
    ($($name:ident),+) => {
        impl<$($name: Unit),+> Product for ($($name,)+) {
            const PARTS: &'static [UnitExpr<'static>] = &[$($name::EXPR),+];
        }

        impl<$($name: Unit),+> Unit for ($($name,)+) {
            const EXPR: UnitExpr<'static> = UnitExpr::Product(<Self as Product>::PARTS);
        }
    };
}

impl_product!(A);
impl_product!(A, B);
impl_product!(A, B, C);
impl_product!(A, B, C, D);
impl_product!(A, B, C, D, E);
impl_product!(A, B, C, D, E, F);
impl_product!(A, B, C, D, E, F, G);
impl_product!(A, B, C, D, E, F, G, H);

/// The dimensionless ratio `N`, used to build prefixes and other exact
/// multiples: `(Pow<Multiple<10>, 3>, Gram)` is a kilogram.
pub struct Multiple<const N: i128>;

impl<const N: i128> Unit for Multiple<N> {
    const EXPR: UnitExpr<'static> = UnitExpr::Base(
        Base::unit("dimr_core::Multiple", <() as Unit>::EXPR_REF, Factor::Integral(N)).with_param(N),
    );
}

/// Everything the algebra knows about a single unit type.
pub struct Resolved<U>(PhantomData<U>);

impl<U: Unit> Resolved<U> {
    pub const CANONICAL: Canonical = match canonicalize(U::EXPR_REF) {
        Ok(canonical) => canonical,
        Err(err) => err.reject(),
    };

    pub const DIMENSION: Canonical = match dimension_of(U::EXPR_REF) {
        Ok(dimension) => dimension,
        Err(err) => err.reject(),
    };

    pub const FACTOR: Factor = match factor_of(U::EXPR_REF) {
        Ok(factor) => factor,
        Err(err) => err.reject(),
    };

    pub const IS_SIMPLIFIED: bool = match is_simplified(U::EXPR_REF) {
        Ok(simplified) => simplified,
        Err(err) => err.reject(),
    };

    pub const IS_DIMENSIONLESS: bool = Self::DIMENSION.is_dimensionless();
}

/// Relation between two unit types.
pub struct Conversion<From, To>(PhantomData<(From, To)>);

impl<From: Unit, To: Unit> Conversion<From, To> {
    /// Whether both denote the same unit
    pub const SAME: bool = match equal(From::EXPR_REF, To::EXPR_REF) {
        Ok(same) => same,
        Err(err) => err.reject(),
    };

    /// Whether both share a dimension. Never fails to compile.
    pub const COMPATIBLE: bool = compatible(From::EXPR_REF, To::EXPR_REF);

    /// Multiplier taking a value in `From` to `To`
    pub const RATIO: Factor = match ratio_between(From::EXPR_REF, To::EXPR_REF) {
        Ok(ratio) => ratio,
        Err(err) => err.reject(),
    };
}

/// A conversion ratio checked against the numeric type it will scale.
///
/// Integral types accept only integral ratios that fit in them; a ratio such
/// as metres to kilometres needs the value cast to a floating type first.
pub struct Rescale<From, To, T>(PhantomData<(From, To, T)>);

impl<From: Unit, To: Unit, T: Scalar> Rescale<From, To, T> {
    pub const FACTOR: Factor = {
        let ratio = Conversion::<From, To>::RATIO;
        match ratio {
            Factor::Integral(n) => {
                if n < T::LOWER || n > T::UPPER {
                    panic!("conversion ratio does not fit in the value type");
                }
            }
            Factor::Floating(_) => {
                if T::INTEGRAL {
                    panic!("lossy conversion of an integral value; cast it to a floating type first");
                }
            }
        }
        ratio
    };

    /// Convert `value` from `From` to `To`.
    ///
    /// # Panics
    ///
    /// If the converted value does not fit in `T`, in debug and release
    /// builds alike. Use [`Rescale::try_apply`] to handle that case.
    #[inline]
    pub fn apply(value: T) -> T {
        match value.scale(Self::FACTOR) {
            Some(scaled) => scaled,
            None => AlgebraError::ValueOutOfRange.reject(),
        }
    }

    /// Convert `value` from `From` to `To`, failing with
    /// [`AlgebraError::ValueOutOfRange`] if the result does not fit in `T`.
    #[inline]
    pub fn try_apply(value: T) -> Result<T, AlgebraError> {
        value.scale(Self::FACTOR).ok_or(AlgebraError::ValueOutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplify::Form;
    use crate::{base_dimension, base_unit};

    base_dimension!(Length);
    base_dimension!(Time);
    base_unit! {
        Metre: Length = Factor::ONE;
        Second: Time = Factor::ONE;
        Hour: Time = Factor::Integral(3600);
        Foot: Length = Factor::Floating(0.3048);
    }
    type Kilometre = (Pow<Multiple<10>, 3>, Metre);

    #[test]
    fn test_names_are_module_paths() {
        let UnitExpr::Base(base) = Metre::EXPR else {
            panic!("a base unit is a bare base");
        };
        assert_eq!(base.name(), concat!(module_path!(), "::Metre"));
    }

    #[test]
    fn test_resolved_constants() {
        type Speed = Per<Kilometre, Hour>;
        assert_eq!(Resolved::<Kilometre>::FACTOR, Factor::Integral(1000));
        assert!((Resolved::<Speed>::FACTOR.to_f64() - 1000.0 / 3600.0).abs() < 1e-12);
        assert_eq!(Resolved::<Speed>::DIMENSION.len(), 2);
        assert!(Resolved::<Per<Metre, Metre>>::CANONICAL.is_dimensionless());
        assert!(Resolved::<Per<Metre, Foot>>::IS_DIMENSIONLESS);
    }

    #[test]
    fn test_simplified_types() {
        assert!(Resolved::<Metre>::IS_SIMPLIFIED);
        assert!(Resolved::<()>::IS_SIMPLIFIED);
        assert!(Resolved::<(Metre, Pow<Second, -2>)>::IS_SIMPLIFIED);
        assert!(!Resolved::<(Metre,)>::IS_SIMPLIFIED);
        assert!(!Resolved::<Pow<Metre, 1>>::IS_SIMPLIFIED);
        assert!(!Resolved::<(Metre, Metre)>::IS_SIMPLIFIED);
    }

    #[test]
    fn test_pow_one_is_the_base() {
        assert!(Conversion::<Pow<Metre, 1>, Metre>::SAME);
        assert_eq!(
            Resolved::<Pow<Metre, 1>>::CANONICAL.form(),
            Form::Bare(match Metre::EXPR {
                UnitExpr::Base(base) => base,
                _ => unreachable!(),
            })
        );
    }

    #[test]
    fn test_conversion_constants() {
        assert!(Conversion::<Kilometre, Metre>::COMPATIBLE);
        assert!(!Conversion::<Metre, Second>::COMPATIBLE);
        assert!(Conversion::<(Metre, Second), (Second, Metre)>::SAME);
        assert_eq!(Conversion::<Kilometre, Metre>::RATIO, Factor::Integral(1000));
        assert_eq!(Conversion::<Foot, Foot>::RATIO, Factor::ONE);
    }

    #[test]
    fn test_rescale() {
        assert_eq!(Rescale::<Kilometre, Metre, i32>::apply(5), 5000);
        assert_eq!(Rescale::<Hour, Second, u16>::apply(2), 7200);
        assert!((Rescale::<Foot, Metre, f64>::apply(10.0) - 3.048).abs() < 1e-12);
        assert_eq!(Rescale::<Foot, Foot, u8>::apply(200), 200);
    }

    #[test]
    fn test_rescale_out_of_range() {
        assert_eq!(
            Rescale::<Kilometre, Metre, i32>::try_apply(3_000_000),
            Err(AlgebraError::ValueOutOfRange)
        );
        assert_eq!(Rescale::<Kilometre, Metre, i64>::try_apply(3_000_000), Ok(3_000_000_000));
    }

    #[test]
    #[should_panic(expected = "converted value does not fit in the value type")]
    fn test_rescale_overflow_panics() {
        Rescale::<Hour, Second, u16>::apply(20);
    }

    #[test]
    fn test_multiples_are_distinct_bases() {
        type Dozen = Multiple<12>;
        type Score = Multiple<20>;
        assert!(!Conversion::<Dozen, Score>::SAME);
        assert!(Conversion::<Dozen, Score>::COMPATIBLE);
        assert_eq!(Resolved::<(Dozen, Score)>::FACTOR, Factor::Integral(240));
        assert!(Resolved::<Per<Dozen, Dozen>>::CANONICAL.is_dimensionless());
    }
}
