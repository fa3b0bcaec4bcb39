//! Bases, terms and flat term lists
//!
//! A [`Term`] is a base raised to an integer power. A [`TermList`] is a product
//! of terms in a fixed-capacity buffer so every operation on it can run inside
//! constant evaluation.

use std::fmt;

use crate::error::AlgebraError;
use crate::expr::UnitExpr;
use crate::factor::Factor;

/// Maximum number of terms a flat expression may hold.
pub const MAX_TERMS: usize = 32;

/// What a base stands for
#[derive(Debug, Clone, Copy)]
pub enum BaseKind {
    /// A physical dimension (length, mass, ...). Carries no data.
    Dimension,
    /// A unit with its dimension and its scale relative to the dimension's
    /// canonical unit. Either fact may be missing from a partial declaration.
    Unit {
        dimension: Option<&'static UnitExpr<'static>>,
        factor: Option<Factor>,
    },
}

/// An atomic leaf of the algebra.
///
/// Identity is `(name, param)`: two bases are the same iff both match.
/// `param` tells apart the members of a parameterized family such as
/// `Multiple<10>` and `Multiple<60>`; it is `0` everywhere else.
#[derive(Debug, Clone, Copy)]
pub struct Base {
    name: &'static str,
    param: i128,
    kind: BaseKind,
}

impl Base {
    /// Declare a dimension anchor
    pub const fn dimension(name: &'static str) -> Self {
        Self {
            name,
            param: 0,
            kind: BaseKind::Dimension,
        }
    }

    /// Declare a unit of the given dimension.
    ///
    /// `dimension` may be a dimension expression or a unit expression, in which
    /// case the unit shares that unit's dimension.
    pub const fn unit(name: &'static str, dimension: &'static UnitExpr<'static>, factor: Factor) -> Self {
        Self {
            name,
            param: 0,
            kind: BaseKind::Unit {
                dimension: Some(dimension),
                factor: Some(factor),
            },
        }
    }

    /// Declare a unit that may lack its dimension or its factor.
    pub const fn partial(
        name: &'static str,
        dimension: Option<&'static UnitExpr<'static>>,
        factor: Option<Factor>,
    ) -> Self {
        Self {
            name,
            param: 0,
            kind: BaseKind::Unit { dimension, factor },
        }
    }

    /// Same base, distinguished from its siblings by `param`.
    pub const fn with_param(self, param: i128) -> Self {
        Self { param, ..self }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn param(&self) -> i128 {
        self.param
    }

    pub const fn kind(&self) -> BaseKind {
        self.kind
    }

    pub const fn is_dimension(&self) -> bool {
        matches!(self.kind, BaseKind::Dimension)
    }

    /// Identity comparison
    pub const fn same(&self, other: &Base) -> bool {
        self.param == other.param && str_eq(self.name, other.name)
    }

    /// The factor this base contributes, if it is a unit that declares one.
    pub const fn declared_factor(&self) -> Result<Factor, AlgebraError> {
        match self.kind {
            BaseKind::Unit {
                factor: Some(factor),
                ..
            } => {
                if factor.is_positive() {
                    Ok(factor)
                } else {
                    Err(AlgebraError::NonPositiveFactor(self.name))
                }
            }
            _ => Err(AlgebraError::MissingFactor(self.name)),
        }
    }
}

impl PartialEq for Base {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Base {}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// A base raised to an integer power
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub base: Base,
    pub exponent: i32,
}

impl Term {
    pub const fn new(base: Base, exponent: i32) -> Self {
        Self { base, exponent }
    }

    /// Same base and same exponent
    pub const fn matches(&self, other: &Term) -> bool {
        self.exponent == other.exponent && self.base.same(&other.base)
    }

    // Placeholder for unused buffer slots
    const VACANT: Term = Term::new(Base::dimension(""), 0);
}

/// A product of terms, stored flat.
///
/// The list is raw: it may repeat bases and hold zero exponents until it goes
/// through [`crate::simplify`].
#[derive(Clone, Copy)]
pub struct TermList {
    terms: [Term; MAX_TERMS],
    len: usize,
}

impl TermList {
    /// The empty product, i.e. the dimensionless unit
    pub const EMPTY: TermList = TermList {
        terms: [Term::VACANT; MAX_TERMS],
        len: 0,
    };

    pub const fn single(term: Term) -> Self {
        let mut list = Self::EMPTY;
        list.terms[0] = term;
        list.len = 1;
        list
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn as_slice(&self) -> &[Term] {
        self.terms.as_slice().split_at(self.len).0
    }

    /// Append a term without merging it into an existing one.
    pub const fn push(mut self, term: Term) -> Result<Self, AlgebraError> {
        if self.len == MAX_TERMS {
            return Err(AlgebraError::TooManyTerms);
        }
        self.terms[self.len] = term;
        self.len += 1;
        Ok(self)
    }

    /// Concatenate two products. No deduplication happens here.
    pub const fn join(self, other: &TermList) -> Result<Self, AlgebraError> {
        let mut list = self;
        let mut i = 0;
        while i < other.len {
            list = match list.push(other.terms[i]) {
                Ok(list) => list,
                Err(err) => return Err(err),
            };
            i += 1;
        }
        Ok(list)
    }

    /// Negate every exponent, keeping bases and order.
    pub const fn invert(mut self) -> Self {
        let mut i = 0;
        while i < self.len {
            self.terms[i].exponent = -self.terms[i].exponent;
            i += 1;
        }
        self
    }

    /// Multiply every exponent by `power`.
    pub const fn raise(mut self, power: i32) -> Result<Self, AlgebraError> {
        let mut i = 0;
        while i < self.len {
            self.terms[i].exponent = match self.terms[i].exponent.checked_mul(power) {
                Some(exponent) => exponent,
                None => return Err(AlgebraError::ExponentOverflow),
            };
            i += 1;
        }
        Ok(self)
    }

    /// Drop the term at `index`, keeping the order of the rest.
    pub(crate) const fn remove(mut self, index: usize) -> Self {
        let mut i = index;
        while i + 1 < self.len {
            self.terms[i] = self.terms[i + 1];
            i += 1;
        }
        self.len -= 1;
        self.terms[self.len] = Term::VACANT;
        self
    }

    pub(crate) const fn set_exponent(mut self, index: usize, exponent: i32) -> Self {
        self.terms[index].exponent = exponent;
        self
    }

    /// Position of the term over `base`, if any.
    pub const fn position(&self, base: &Base) -> Option<usize> {
        let mut i = 0;
        while i < self.len {
            if self.terms[i].base.same(base) {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    /// Whether some term has the same base and exponent as `term`.
    pub const fn contains(&self, term: &Term) -> bool {
        let mut i = 0;
        while i < self.len {
            if self.terms[i].matches(term) {
                return true;
            }
            i += 1;
        }
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.as_slice().iter()
    }
}

impl Default for TermList {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for TermList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|t| (t.base.name(), t.exponent)))
            .finish()
    }
}

impl<'a> IntoIterator for &'a TermList {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRE: Base = Base::dimension("metre");
    const SECOND: Base = Base::dimension("second");

    fn list(terms: &[(Base, i32)]) -> TermList {
        terms.iter().fold(TermList::EMPTY, |acc, (base, exp)| {
            acc.push(Term::new(*base, *exp)).unwrap()
        })
    }

    #[test]
    fn test_join_concatenates_without_merging() {
        let a = TermList::single(Term::new(METRE, 1));
        let b = list(&[(METRE, 1), (SECOND, -1)]);
        let joined = a.join(&b).unwrap();
        assert_eq!(
            joined.as_slice(),
            &[Term::new(METRE, 1), Term::new(METRE, 1), Term::new(SECOND, -1)]
        );
    }

    #[test]
    fn test_invert_keeps_order() {
        let inverted = list(&[(SECOND, -2), (METRE, 1)]).invert();
        assert_eq!(inverted.as_slice(), &[Term::new(SECOND, 2), Term::new(METRE, -1)]);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let full = (0..MAX_TERMS).fold(TermList::EMPTY, |acc, _| acc.push(Term::new(METRE, 1)).unwrap());
        assert_eq!(full.push(Term::new(METRE, 1)).err(), Some(AlgebraError::TooManyTerms));
        assert_eq!(full.join(&TermList::single(Term::new(SECOND, 1))).err(), Some(AlgebraError::TooManyTerms));
    }

    #[test]
    fn test_raise_detects_overflow() {
        let big = TermList::single(Term::new(METRE, i32::MAX));
        assert_eq!(big.raise(2).err(), Some(AlgebraError::ExponentOverflow));
        assert_eq!(big.raise(-1).unwrap().as_slice(), &[Term::new(METRE, -i32::MAX)]);
    }

    #[test]
    fn test_remove_shifts_left() {
        let removed = list(&[(METRE, 1), (SECOND, 2), (METRE, 3)]).remove(1);
        assert_eq!(removed.as_slice(), &[Term::new(METRE, 1), Term::new(METRE, 3)]);
    }

    #[test]
    fn test_identity_uses_param() {
        let ten = Base::dimension("multiple").with_param(10);
        let sixty = Base::dimension("multiple").with_param(60);
        assert_ne!(ten, sixty);
        assert_eq!(ten, Base::dimension("multiple").with_param(10));
    }
}
