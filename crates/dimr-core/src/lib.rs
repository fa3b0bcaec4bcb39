//! dimr-core: Unit algebra for dimr
//!
//! A unit is a product of base powers. This crate turns unit expressions into
//! their canonical form, projects them onto physical dimensions and computes
//! the scale factor between two units of the same dimension. Every operation
//! is a `const fn`, so unit tags ([`Unit`] types) are resolved entirely during
//! compilation and leave nothing behind at run time.
//!
//! # Example
//!
//! ```
//! use dimr_core::{base_dimension, base_unit, Conversion, Factor, Multiple, Per, Pow, Rescale};
//!
//! base_dimension!(pub Length);
//! base_dimension!(pub Time);
//! base_unit! {
//!     pub Metre: Length = Factor::ONE;
//!     pub Second: Time = Factor::ONE;
//! }
//! type Kilometre = (Pow<Multiple<10>, 3>, Metre);
//!
//! // Exact ratios stay integral
//! assert_eq!(Conversion::<Kilometre, Metre>::RATIO, Factor::Integral(1000));
//! assert_eq!(Rescale::<Kilometre, Metre, i32>::apply(5), 5000);
//!
//! // Term order and nesting do not matter
//! assert!(Conversion::<(Metre, Pow<Second, -1>), (Pow<Second, -1>, (Metre,))>::SAME);
//! assert!(!Conversion::<Per<Metre, Second>, Metre>::COMPATIBLE);
//! ```
//!
//! Converting between units of different dimensions does not compile:
//!
//! ```compile_fail
//! use dimr_core::{base_dimension, base_unit, Factor, Rescale};
//!
//! base_dimension!(pub Length);
//! base_dimension!(pub Time);
//! base_unit! {
//!     pub Metre: Length = Factor::ONE;
//!     pub Second: Time = Factor::ONE;
//! }
//!
//! let _ = Rescale::<Metre, Second, f64>::apply(1.0);
//! ```

mod macros;

pub mod analysis;
pub mod convert;
pub mod dimension;
pub mod equality;
pub mod error;
pub mod expr;
pub mod factor;
pub mod flatten;
pub mod scalar;
pub mod simplify;
pub mod tag;
pub mod term;

pub use analysis::{Analysis, Analyzer, TermRecord};
pub use convert::{compatible, convert, ratio_between};
pub use dimension::dimension_of;
pub use equality::{equal, equal_dimension, terms_equal};
pub use error::AlgebraError;
pub use expr::{UnitExpr, DIMENSIONLESS};
pub use factor::{factor_of, Factor};
pub use flatten::{flatten, MAX_DEPTH};
pub use scalar::Scalar;
pub use simplify::{canonicalize, is_simplified, simplify, Canonical, Form};
pub use tag::{Conversion, Inv, Join, Multiple, Per, Pow, Rescale, Resolved, Unit};
pub use term::{Base, BaseKind, Term, TermList, MAX_TERMS};
