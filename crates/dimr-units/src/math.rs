//! Math functions on quantities
//!
//! Unary functions act on the raw value and keep the unit. Binary functions
//! first convert the second operand into the unit of the first.

use std::num::FpCategory;
use std::ops::{Div, Rem, Sub};

use dimr_core::{Rescale, Scalar, Unit};

use crate::quantity::Quantity;

/// Floating-point types the math functions are defined for
pub trait Real: Scalar + PartialOrd + Sub<Output = Self> + Div<Output = Self> + Rem<Output = Self> {
    const ZERO: Self;

    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn trunc(self) -> Self;
    fn round(self) -> Self;
    fn abs(self) -> Self;
    fn signum(self) -> Self;
    fn copysign(self, sign: Self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn mul_add(self, a: Self, b: Self) -> Self;
    fn round_ties_even(self) -> Self;
    /// Truncating conversion; saturates at the bounds, NaN becomes zero
    fn to_i64(self) -> i64;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_normal(self) -> bool;
    fn is_sign_negative(self) -> bool;
    fn classify(self) -> FpCategory;
    /// The next representable value after `self` in the direction of `toward`
    fn next_after(self, toward: Self) -> Self;

    /// IEEE remainder: `self - n * other` with `n` the quotient rounded to
    /// even. Also returns `n`.
    fn remainder_quotient(self, other: Self) -> (Self, Self) {
        let n = (self / other).round_ties_even();
        (Self::mul_add(Self::ZERO - n, other, self), n)
    }
}

macro_rules! impl_real {
    ($($t:ident),*) => {
        $(
            impl Real for $t {
                const ZERO: Self = 0.0;

                fn floor(self) -> Self { $t::floor(self) }
                fn ceil(self) -> Self { $t::ceil(self) }
                fn trunc(self) -> Self { $t::trunc(self) }
                fn round(self) -> Self { $t::round(self) }
                fn abs(self) -> Self { $t::abs(self) }
                fn signum(self) -> Self { $t::signum(self) }
                fn copysign(self, sign: Self) -> Self { $t::copysign(self, sign) }
                fn min(self, other: Self) -> Self { $t::min(self, other) }
                fn max(self, other: Self) -> Self { $t::max(self, other) }
                fn hypot(self, other: Self) -> Self { $t::hypot(self, other) }
                fn mul_add(self, a: Self, b: Self) -> Self { $t::mul_add(self, a, b) }
                fn round_ties_even(self) -> Self { $t::round_ties_even(self) }
                fn to_i64(self) -> i64 { self as i64 }
                fn is_nan(self) -> bool { $t::is_nan(self) }
                fn is_infinite(self) -> bool { $t::is_infinite(self) }
                fn is_finite(self) -> bool { $t::is_finite(self) }
                fn is_normal(self) -> bool { $t::is_normal(self) }
                fn is_sign_negative(self) -> bool { $t::is_sign_negative(self) }
                fn classify(self) -> FpCategory { $t::classify(self) }

                fn next_after(self, toward: Self) -> Self {
                    if self.is_nan() || toward.is_nan() {
                        return self + toward;
                    }
                    if self == toward {
                        return toward;
                    }
                    if self == 0.0 {
                        return $t::copysign($t::from_bits(1), toward);
                    }
                    // Away from zero is one ulp up in the bit pattern
                    let bits = self.to_bits();
                    $t::from_bits(if (toward > self) == (self > 0.0) { bits + 1 } else { bits - 1 })
                }
            }
        )*
    };
}

impl_real!(f32, f64);

impl<U: Unit, T: Real> Quantity<U, T> {
    fn map(self, f: impl FnOnce(T) -> T) -> Self {
        Self::new(f(self.value()))
    }

    fn rescaled<V: Unit>(other: Quantity<V, T>) -> T {
        Rescale::<V, U, T>::apply(other.value())
    }

    pub fn floor(self) -> Self {
        self.map(Real::floor)
    }

    pub fn ceil(self) -> Self {
        self.map(Real::ceil)
    }

    pub fn trunc(self) -> Self {
        self.map(Real::trunc)
    }

    /// Round half away from zero
    pub fn round(self) -> Self {
        self.map(Real::round)
    }

    pub fn abs(self) -> Self {
        self.map(Real::abs)
    }

    pub fn signum(self) -> Quantity<(), T> {
        Quantity::new(Real::signum(self.value()))
    }

    /// Fractional and integral parts, both carrying the sign of `self`
    pub fn modf(self) -> (Self, Self) {
        let whole = Real::trunc(self.value());
        (Self::new(self.value() - whole), Self::new(whole))
    }

    /// Remainder of `self / other` with the sign of `self`
    pub fn fmod<V: Unit>(self, other: Quantity<V, T>) -> Self {
        Self::new(self.value() % Self::rescaled(other))
    }

    /// `self` with the sign of `sign`
    pub fn copysign<V: Unit>(self, sign: Quantity<V, T>) -> Self {
        Self::new(Real::copysign(self.value(), Self::rescaled(sign)))
    }

    pub fn fmin<V: Unit>(self, other: Quantity<V, T>) -> Self {
        Self::new(Real::min(self.value(), Self::rescaled(other)))
    }

    pub fn fmax<V: Unit>(self, other: Quantity<V, T>) -> Self {
        Self::new(Real::max(self.value(), Self::rescaled(other)))
    }

    /// Positive difference: `self - other` if that is positive, else zero
    pub fn fdim<V: Unit>(self, other: Quantity<V, T>) -> Self {
        let (x, y) = (self.value(), Self::rescaled(other));
        if x.is_nan() || y.is_nan() {
            return Self::new(x - y);
        }
        Self::new(if x > y { x - y } else { T::ZERO })
    }

    /// `sqrt(self² + other²)` without intermediate overflow
    pub fn hypot<V: Unit>(self, other: Quantity<V, T>) -> Self {
        Self::new(Real::hypot(self.value(), Self::rescaled(other)))
    }

    /// Round half to even (`rint`, `nearbyint`)
    pub fn round_ties_even(self) -> Self {
        self.map(Real::round_ties_even)
    }

    /// Round half away from zero to an `i64`, saturating
    pub fn lround(self) -> Quantity<U, i64> {
        Quantity::new(Real::round(self.value()).to_i64())
    }

    /// Round half to even to an `i64`, saturating
    pub fn lrint(self) -> Quantity<U, i64> {
        Quantity::new(Real::round_ties_even(self.value()).to_i64())
    }

    /// `self * factor + addend` with a single rounding. The product unit is
    /// `(U, V)`; `addend` is converted into it.
    pub fn mul_add<V: Unit, W: Unit>(self, factor: Quantity<V, T>, addend: Quantity<W, T>) -> Quantity<(U, V), T> {
        let addend = Rescale::<W, (U, V), T>::apply(addend.value());
        Quantity::new(Real::mul_add(self.value(), factor.value(), addend))
    }

    /// IEEE remainder of `self / other`, in `(-other/2, other/2]`
    pub fn remainder<V: Unit>(self, other: Quantity<V, T>) -> Self {
        self.remquo(other).0
    }

    /// Remainder as in [`Quantity::remainder`] together with the rounded
    /// quotient, saturated to `i32`.
    pub fn remquo<V: Unit>(self, other: Quantity<V, T>) -> (Self, i32) {
        let (rem, quotient) = self.value().remainder_quotient(Self::rescaled(other));
        (Self::new(rem), quotient.to_i64().clamp(i32::MIN.into(), i32::MAX.into()) as i32)
    }

    /// The next representable value after `self` toward `toward`
    pub fn next_after<V: Unit>(self, toward: Quantity<V, T>) -> Self {
        Self::new(Real::next_after(self.value(), Self::rescaled(toward)))
    }

    pub fn is_nan(&self) -> bool {
        Real::is_nan(self.value())
    }

    pub fn is_infinite(&self) -> bool {
        Real::is_infinite(self.value())
    }

    pub fn is_finite(&self) -> bool {
        Real::is_finite(self.value())
    }

    pub fn is_normal(&self) -> bool {
        Real::is_normal(self.value())
    }

    /// The sign bit, set for `-0.0` and negative NaNs too (`signbit`)
    pub fn is_sign_negative(&self) -> bool {
        Real::is_sign_negative(self.value())
    }

    pub fn classify(&self) -> FpCategory {
        Real::classify(self.value())
    }

    pub fn is_greater<V: Unit>(&self, other: Quantity<V, T>) -> bool {
        self.value() > Self::rescaled(other)
    }

    pub fn is_greater_equal<V: Unit>(&self, other: Quantity<V, T>) -> bool {
        self.value() >= Self::rescaled(other)
    }

    pub fn is_less<V: Unit>(&self, other: Quantity<V, T>) -> bool {
        self.value() < Self::rescaled(other)
    }

    pub fn is_less_equal<V: Unit>(&self, other: Quantity<V, T>) -> bool {
        self.value() <= Self::rescaled(other)
    }

    /// Less or greater, i.e. ordered and not equal
    pub fn is_less_greater<V: Unit>(&self, other: Quantity<V, T>) -> bool {
        let other = Self::rescaled(other);
        self.value() < other || self.value() > other
    }

    /// Whether either side is NaN
    pub fn is_unordered<V: Unit>(&self, other: Quantity<V, T>) -> bool {
        self.value().is_nan() || Real::is_nan(Self::rescaled(other))
    }
}
