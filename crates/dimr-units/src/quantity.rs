//! Unit-tagged values
//!
//! A [`Quantity`] is a number whose unit lives in its type. Adding,
//! subtracting, comparing and assigning quantities converts the right-hand
//! side into the left-hand unit; mixing dimensions does not compile:
//!
//! ```compile_fail
//! use dimr_units::prelude::*;
//!
//! let distance = Quantity::<Metre>::new(100.0);
//! let time = Quantity::<Second>::new(9.58);
//! let _ = distance + time;
//! ```
//!
//! A converted integer that does not fit in its type panics, like any other
//! integer overflow. [`Quantity::try_convert`] reports it instead:
//!
//! ```
//! use dimr_units::prelude::*;
//!
//! let far = Quantity::<Kilo<Metre>, i32>::new(3_000_000);
//! assert!(far.try_convert::<Metre>().is_err());
//! ```
//!
//! Multiplying and dividing quantities builds the product unit:
//!
//! ```
//! use dimr_units::prelude::*;
//!
//! let distance = Quantity::<Kilo<Metre>>::new(42.195);
//! let time = Quantity::<Hour>::new(2.0);
//! let speed: Quantity<Per<Kilo<Metre>, Hour>> = distance / time;
//!
//! let metres_per_second: Quantity<Per<Metre, Second>> = speed.convert();
//! assert!((metres_per_second.value() - 5.8604).abs() < 1e-4);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

use dimr_core::{AlgebraError, Inv, Rescale, Scalar, Unit};

/// A value of type `T` measured in unit `U`.
///
/// Only the value is stored, so a quantity has the size, alignment and ABI
/// of `T`.
#[repr(transparent)]
pub struct Quantity<U, T = f64> {
    value: T,
    unit: PhantomData<fn() -> U>,
}

impl<U, T> Quantity<U, T> {
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Mutable access to the raw value, bypassing the unit.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<U, T: Copy> Quantity<U, T> {
    /// The raw value in `U`. Never converts.
    pub fn value(&self) -> T {
        self.value
    }
}

impl<U: Unit, T: Scalar> Quantity<U, T> {
    /// Build from a quantity in any unit of the same dimension.
    ///
    /// # Panics
    ///
    /// If the converted value does not fit in `T`.
    pub fn from_quantity<V: Unit>(other: Quantity<V, T>) -> Self {
        Self::new(Rescale::<V, U, T>::apply(other.value))
    }

    /// Like [`Quantity::from_quantity`], but reports a value that does not
    /// fit in `T` as [`AlgebraError::ValueOutOfRange`].
    pub fn try_from_quantity<V: Unit>(other: Quantity<V, T>) -> Result<Self, AlgebraError> {
        Rescale::<V, U, T>::try_apply(other.value).map(Self::new)
    }

    /// Express this quantity in `V`.
    ///
    /// # Panics
    ///
    /// If the converted value does not fit in `T`.
    pub fn convert<V: Unit>(self) -> Quantity<V, T> {
        Quantity::from_quantity(self)
    }

    pub fn try_convert<V: Unit>(self) -> Result<Quantity<V, T>, AlgebraError> {
        Quantity::try_from_quantity(self)
    }

    /// Overwrite with a quantity in any unit of the same dimension.
    pub fn assign<V: Unit>(&mut self, other: Quantity<V, T>) {
        self.value = Rescale::<V, U, T>::apply(other.value);
    }

    /// Change the numeric type, keeping the unit.
    pub fn cast<S: Scalar + From<T>>(self) -> Quantity<U, S> {
        Quantity::new(S::from(self.value))
    }

    /// Widen to `f64`, keeping the unit. May lose precision for wide integers.
    pub fn to_f64(self) -> Quantity<U, f64> {
        Quantity::new(self.value.to_f64())
    }
}

impl<U, T: Clone> Clone for Quantity<U, T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<U, T: Copy> Copy for Quantity<U, T> {}

impl<U, T: Default> Default for Quantity<U, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<U, T: fmt::Debug> fmt::Debug for Quantity<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("unit", &type_name::<U>())
            .finish()
    }
}

impl<U, T: fmt::Display> fmt::Display for Quantity<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<U, T: FromStr> FromStr for Quantity<U, T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

impl<U, T: Serialize> Serialize for Quantity<U, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, U, T: Deserialize<'de>> Deserialize<'de> for Quantity<U, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<U: Unit, V: Unit, T: Scalar + PartialEq> PartialEq<Quantity<V, T>> for Quantity<U, T> {
    fn eq(&self, other: &Quantity<V, T>) -> bool {
        self.value == Rescale::<V, U, T>::apply(other.value)
    }
}

impl<U: Unit, T: Scalar + Eq> Eq for Quantity<U, T> {}

impl<U: Unit, V: Unit, T: Scalar + PartialOrd> PartialOrd<Quantity<V, T>> for Quantity<U, T> {
    fn partial_cmp(&self, other: &Quantity<V, T>) -> Option<Ordering> {
        self.value.partial_cmp(&Rescale::<V, U, T>::apply(other.value))
    }
}

impl<U: Unit, T: Scalar + Ord> Ord for Quantity<U, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// Same-dimension arithmetic: the right operand is converted to `U`
macro_rules! impl_converting_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<U: Unit, V: Unit, T: Scalar + $Op<Output = T>> $Op<Quantity<V, T>> for Quantity<U, T> {
            type Output = Quantity<U, T>;

            fn $op(self, rhs: Quantity<V, T>) -> Self::Output {
                Quantity::new(self.value.$op(Rescale::<V, U, T>::apply(rhs.value)))
            }
        }

        impl<U: Unit, V: Unit, T: Scalar + $Op<Output = T>> $OpAssign<Quantity<V, T>> for Quantity<U, T> {
            fn $op_assign(&mut self, rhs: Quantity<V, T>) {
                self.value = self.value.$op(Rescale::<V, U, T>::apply(rhs.value));
            }
        }
    };
}

impl_converting_op!(Add, add, AddAssign, add_assign);
impl_converting_op!(Sub, sub, SubAssign, sub_assign);

impl<U: Unit, V: Unit, T: Scalar + Rem<Output = T>> Rem<Quantity<V, T>> for Quantity<U, T> {
    type Output = Quantity<U, T>;

    fn rem(self, rhs: Quantity<V, T>) -> Self::Output {
        Quantity::new(self.value % Rescale::<V, U, T>::apply(rhs.value))
    }
}

// Like `*=`, `%=` only takes a dimensionless right operand
impl<U: Unit, V: Unit, T: Scalar + Rem<Output = T>> RemAssign<Quantity<V, T>> for Quantity<U, T> {
    fn rem_assign(&mut self, rhs: Quantity<V, T>) {
        self.value = self.value % Rescale::<V, (), T>::apply(rhs.value);
    }
}

impl<U: Unit, V: Unit, T: Mul<Output = T>> Mul<Quantity<V, T>> for Quantity<U, T> {
    type Output = Quantity<(U, V), T>;

    fn mul(self, rhs: Quantity<V, T>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<U: Unit, V: Unit, T: Div<Output = T>> Div<Quantity<V, T>> for Quantity<U, T> {
    type Output = Quantity<(U, Inv<V>), T>;

    fn div(self, rhs: Quantity<V, T>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

// Scaling by a dimensionless quantity keeps the unit
impl<U: Unit, V: Unit, T: Scalar + Mul<Output = T>> MulAssign<Quantity<V, T>> for Quantity<U, T> {
    fn mul_assign(&mut self, rhs: Quantity<V, T>) {
        self.value = self.value * Rescale::<V, (), T>::apply(rhs.value);
    }
}

impl<U: Unit, V: Unit, T: Scalar + Div<Output = T>> DivAssign<Quantity<V, T>> for Quantity<U, T> {
    fn div_assign(&mut self, rhs: Quantity<V, T>) {
        self.value = self.value / Rescale::<V, (), T>::apply(rhs.value);
    }
}

impl<U, T: Neg<Output = T>> Neg for Quantity<U, T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U: Unit, T: Scalar + Add<Output = T> + Default> Sum for Quantity<U, T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.fold(T::default(), |acc, q| acc + q.value))
    }
}

// Bare numbers scale a quantity without touching its unit
macro_rules! impl_number_ops {
    ($($t:ty),*) => {
        $(
            impl<U: Unit> Mul<$t> for Quantity<U, $t> {
                type Output = Self;

                fn mul(self, rhs: $t) -> Self {
                    Self::new(self.value * rhs)
                }
            }

            impl<U: Unit> Div<$t> for Quantity<U, $t> {
                type Output = Self;

                fn div(self, rhs: $t) -> Self {
                    Self::new(self.value / rhs)
                }
            }

            impl<U: Unit> Rem<$t> for Quantity<U, $t> {
                type Output = Self;

                fn rem(self, rhs: $t) -> Self {
                    Self::new(self.value % rhs)
                }
            }

            impl<U: Unit> RemAssign<$t> for Quantity<U, $t> {
                fn rem_assign(&mut self, rhs: $t) {
                    self.value = self.value % rhs;
                }
            }

            impl<U: Unit> MulAssign<$t> for Quantity<U, $t> {
                fn mul_assign(&mut self, rhs: $t) {
                    self.value = self.value * rhs;
                }
            }

            impl<U: Unit> DivAssign<$t> for Quantity<U, $t> {
                fn div_assign(&mut self, rhs: $t) {
                    self.value = self.value / rhs;
                }
            }

            impl<U: Unit> Mul<Quantity<U, $t>> for $t {
                type Output = Quantity<U, $t>;

                fn mul(self, rhs: Quantity<U, $t>) -> Quantity<U, $t> {
                    Quantity::new(self * rhs.value)
                }
            }

            impl<U: Unit> Div<Quantity<U, $t>> for $t {
                type Output = Quantity<Inv<U>, $t>;

                fn div(self, rhs: Quantity<U, $t>) -> Quantity<Inv<U>, $t> {
                    Quantity::new(self / rhs.value)
                }
            }
        )*
    };
}

impl_number_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(feature = "decimal")]
impl_number_ops!(rust_decimal::Decimal);
