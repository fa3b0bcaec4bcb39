//! Scale factors and the integral/floating promotion rule

use serde::Serialize;
use std::fmt;

use crate::error::{tri, AlgebraError};
use crate::expr::UnitExpr;
use crate::simplify::canonicalize;

/// Scale of a unit relative to its dimension's canonical unit.
///
/// A factor stays `Integral` as long as every step that produced it was exact.
/// Whether a conversion ratio is integral decides whether an integer value may
/// be converted at all, so the promotion points are explicit:
///
/// - products promote only on `i128` overflow;
/// - reciprocals stay integral only for `1` and `-1`;
/// - ratios stay integral only for exact division.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Factor {
    Integral(i128),
    Floating(f64),
}

impl Factor {
    pub const ONE: Factor = Factor::Integral(1);

    pub const fn is_integral(self) -> bool {
        matches!(self, Factor::Integral(_))
    }

    pub const fn is_positive(self) -> bool {
        match self {
            Factor::Integral(n) => n > 0,
            Factor::Floating(x) => x > 0.0,
        }
    }

    /// Exactly one, as opposed to a float that happens to be `1.0`
    pub const fn is_one(self) -> bool {
        matches!(self, Factor::Integral(1))
    }

    pub const fn to_f64(self) -> f64 {
        match self {
            Factor::Integral(n) => n as f64,
            Factor::Floating(x) => x,
        }
    }

    pub const fn mul(self, other: Factor) -> Factor {
        match (self, other) {
            (Factor::Integral(a), Factor::Integral(b)) => match a.checked_mul(b) {
                Some(product) => Factor::Integral(product),
                None => Factor::Floating(a as f64 * b as f64),
            },
            _ => Factor::Floating(self.to_f64() * other.to_f64()),
        }
    }

    pub const fn recip(self) -> Factor {
        match self {
            Factor::Integral(n @ (1 | -1)) => Factor::Integral(n),
            _ => Factor::Floating(1.0 / self.to_f64()),
        }
    }

    /// Raise to an integer power by repeated squaring.
    ///
    /// A negative exponent raises to `|n|` and takes the reciprocal, so
    /// `Integral(10).powi(-3)` is `Floating(0.001)`.
    pub const fn powi(self, n: i32) -> Factor {
        let mut result = Factor::ONE;
        let mut base = self;
        let mut e = n.unsigned_abs();
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(base);
            }
        }
        if n < 0 {
            result.recip()
        } else {
            result
        }
    }

    /// `self / other`, integral only when both are integral and the division is exact
    pub const fn ratio(self, other: Factor) -> Factor {
        match (self, other) {
            (Factor::Integral(t), Factor::Integral(u)) if matches!(t.checked_rem(u), Some(0)) => {
                Factor::Integral(t / u)
            }
            _ => Factor::Floating(self.to_f64() / other.to_f64()),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factor::Integral(n) => write!(f, "{}", n),
            Factor::Floating(x) => write!(f, "{}", x),
        }
    }
}

/// Numeric scale of a unit expression.
///
/// The product, over the canonical terms, of each base's declared factor
/// raised to the term's exponent. Dimension bases have no factor.
pub const fn factor_of(expr: &UnitExpr<'_>) -> Result<Factor, AlgebraError> {
    let canonical = tri!(canonicalize(expr));
    let terms = canonical.terms().as_slice();
    let mut factor = Factor::ONE;
    let mut i = 0;
    while i < terms.len() {
        let base = tri!(terms[i].base.declared_factor());
        factor = factor.mul(base.powi(terms[i].exponent));
        i += 1;
    }
    Ok(factor)
}
