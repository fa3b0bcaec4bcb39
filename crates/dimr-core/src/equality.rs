//! Order-independent equality of unit expressions

use crate::dimension::dimension_of;
use crate::error::{tri, AlgebraError};
use crate::expr::UnitExpr;
use crate::simplify::{canonicalize, Canonical};

/// Set equality of two canonical expressions.
///
/// Both sides must have the same number of terms and every term of `a` must
/// appear, with the same exponent, in `b`. Stops at the first term without a
/// match. Since canonical lists hold each base once, this is exact.
pub const fn terms_equal(a: &Canonical, b: &Canonical) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let terms = a.terms().as_slice();
    let mut i = 0;
    while i < terms.len() {
        if !b.terms().contains(&terms[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Whether two raw expressions denote the same unit, regardless of term order
/// or nesting.
pub const fn equal(a: &UnitExpr<'_>, b: &UnitExpr<'_>) -> Result<bool, AlgebraError> {
    let a = tri!(canonicalize(a));
    let b = tri!(canonicalize(b));
    Ok(terms_equal(&a, &b))
}

/// Whether two unit expressions project onto the same dimension.
///
/// This is the compatibility gate in front of every addition, subtraction,
/// comparison, assignment and conversion between tagged values.
pub const fn equal_dimension(a: &UnitExpr<'_>, b: &UnitExpr<'_>) -> Result<bool, AlgebraError> {
    let a = tri!(dimension_of(a));
    let b = tri!(dimension_of(b));
    Ok(terms_equal(&a, &b))
}
