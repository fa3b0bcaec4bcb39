//! Simplify: flat term list to canonical form

use crate::error::{tri, AlgebraError};
use crate::expr::UnitExpr;
use crate::flatten::MAX_DEPTH;
use crate::term::{Base, Term, TermList};

/// A flat product in which every base appears at most once and no exponent
/// is zero. Obtained through [`simplify`] or [`canonicalize`].
#[derive(Debug, Clone, Copy)]
pub struct Canonical(TermList);

impl PartialEq for Canonical {
    fn eq(&self, other: &Self) -> bool {
        crate::equality::terms_equal(self, other)
    }
}

/// How a canonical expression presents itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form<'a> {
    /// No terms left
    Dimensionless,
    /// A single base to the first power, unwrapped
    Bare(Base),
    /// Anything else
    List(&'a [Term]),
}

impl Canonical {
    pub const DIMENSIONLESS: Canonical = Canonical(TermList::EMPTY);

    // `terms` must already hold each base once with a non-zero exponent
    pub(crate) const fn from_terms(terms: TermList) -> Self {
        Canonical(terms)
    }

    pub const fn terms(&self) -> &TermList {
        &self.0
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.0.is_empty()
    }

    pub const fn form(&self) -> Form<'_> {
        match self.0.len() {
            0 => Form::Dimensionless,
            1 if self.0.as_slice()[0].exponent == 1 => Form::Bare(self.0.as_slice()[0].base),
            _ => Form::List(self.0.as_slice()),
        }
    }

    /// Exponent of `base`, zero if absent
    pub const fn exponent_of(&self, base: &Base) -> i32 {
        match self.0.position(base) {
            Some(i) => self.0.as_slice()[i].exponent,
            None => 0,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.0.iter()
    }
}

/// Merge same-base terms, drop zero exponents.
///
/// Terms are folded left to right into an accumulator. An incoming term whose
/// base is already accumulated (anywhere, not only in the last slot) adds its
/// exponent to that entry, and the entry disappears if the sum is zero. Any
/// other term is appended unless its own exponent is zero.
pub const fn simplify(flat: &TermList) -> Result<Canonical, AlgebraError> {
    Ok(Canonical(tri!(merge_all(TermList::EMPTY, flat))))
}

/// Fold one term into an already canonical accumulator.
pub(crate) const fn merge(acc: TermList, term: Term) -> Result<TermList, AlgebraError> {
    match acc.position(&term.base) {
        Some(at) => {
            let sum = match acc.as_slice()[at].exponent.checked_add(term.exponent) {
                Some(sum) => sum,
                None => return Err(AlgebraError::ExponentOverflow),
            };
            Ok(if sum == 0 {
                acc.remove(at)
            } else {
                acc.set_exponent(at, sum)
            })
        }
        None if term.exponent == 0 => Ok(acc),
        None => acc.push(term),
    }
}

/// Fold every term of `terms`, in order, into a canonical accumulator.
pub(crate) const fn merge_all(mut acc: TermList, terms: &TermList) -> Result<TermList, AlgebraError> {
    let terms = terms.as_slice();
    let mut i = 0;
    while i < terms.len() {
        acc = tri!(merge(acc, terms[i]));
        i += 1;
    }
    Ok(acc)
}

/// Simplify∘Flatten, fused.
///
/// Leaves are merged into the result as the tree is walked, so the term
/// capacity bounds the number of distinct bases only. The result is the one
/// `simplify(&flatten(expr)?)` gives whenever the raw list fits.
pub const fn canonicalize(expr: &UnitExpr<'_>) -> Result<Canonical, AlgebraError> {
    Ok(Canonical(tri!(fold(expr, 1, TermList::EMPTY, 0))))
}

/// Merge `expr^power` into `acc`, leaf by leaf.
pub(crate) const fn fold(
    expr: &UnitExpr<'_>,
    power: i32,
    acc: TermList,
    depth: usize,
) -> Result<TermList, AlgebraError> {
    if depth > MAX_DEPTH {
        return Err(AlgebraError::NestingTooDeep);
    }
    match *expr {
        UnitExpr::Base(base) => merge(acc, Term::new(base, power)),
        UnitExpr::Power(inner, exponent) => {
            let power = match power.checked_mul(exponent) {
                Some(power) => power,
                None => return Err(AlgebraError::ExponentOverflow),
            };
            fold(inner, power, acc, depth + 1)
        }
        UnitExpr::Product(parts) => {
            let mut acc = acc;
            let mut i = 0;
            while i < parts.len() {
                acc = tri!(fold(&parts[i], power, acc, depth + 1));
                i += 1;
            }
            Ok(acc)
        }
    }
}

/// Whether `expr` is already written in its canonical presentation.
///
/// Holds iff simplifying the flattened expression gives back the same
/// structure: `()` for dimensionless, a bare base for a single first power,
/// otherwise a product of `base` / `Power(base, n)` entries in canonical order.
pub const fn is_simplified(expr: &UnitExpr<'_>) -> Result<bool, AlgebraError> {
    let canonical = tri!(canonicalize(expr));
    Ok(match canonical.form() {
        Form::Dimensionless => matches!(*expr, UnitExpr::Product(parts) if parts.is_empty()),
        Form::Bare(base) => matches!(*expr, UnitExpr::Base(b) if b.same(&base)),
        Form::List(terms) => match *expr {
            UnitExpr::Product(parts) => {
                if parts.len() != terms.len() {
                    false
                } else {
                    let mut i = 0;
                    let mut same = true;
                    while same && i < parts.len() {
                        same = is_term(&parts[i], &terms[i]);
                        i += 1;
                    }
                    same
                }
            }
            _ => false,
        },
    })
}

const fn is_term(expr: &UnitExpr<'_>, term: &Term) -> bool {
    match *expr {
        UnitExpr::Base(base) => term.exponent == 1 && base.same(&term.base),
        UnitExpr::Power(inner, exponent) => {
            exponent == term.exponent && matches!(*inner, UnitExpr::Base(b) if b.same(&term.base))
        }
        UnitExpr::Product(_) => false,
    }
}
