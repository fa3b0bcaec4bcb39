//! dimr-units: Unit-tagged quantities
//!
//! [`Quantity`] attaches a unit to a number at the type level. Arithmetic
//! between compatible units rescales automatically; arithmetic between
//! incompatible units is a compile error. At run time a quantity is just its
//! number.
//!
//! # Example
//!
//! ```
//! use dimr_units::prelude::*;
//!
//! let mass = Quantity::<Kilo<Gram>, i32>::new(5);
//! let grams: Quantity<Gram, i32> = mass.convert();
//! assert_eq!(grams.value(), 5000);
//!
//! let force = Quantity::<Kilogram>::new(2.0) * Quantity::<Per<Metre, Pow<Second, 2>>>::new(9.81);
//! let newtons: Quantity<Newton> = force.convert();
//! assert!((newtons.value() - 19.62).abs() < 1e-12);
//!
//! let leg = Quantity::<Mile>::new(26.2);
//! assert!(leg > Quantity::<Kilo<Metre>>::new(42.0));
//! ```

pub mod audit;
pub mod imperial;
pub mod math;
pub mod quantity;
pub mod si;

pub use dimr_core;
pub use math::Real;
pub use quantity::Quantity;

pub mod prelude {
    pub use crate::imperial::*;
    pub use crate::quantity::Quantity;
    pub use crate::si::*;
    pub use dimr_core::{Inv, Join, Multiple, Per, Pow, Unit};
}
