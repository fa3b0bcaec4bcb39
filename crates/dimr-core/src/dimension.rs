//! Dimension projection

use crate::error::{tri, AlgebraError};
use crate::expr::UnitExpr;
use crate::flatten::MAX_DEPTH;
use crate::simplify::{canonicalize, fold, merge, Canonical};
use crate::term::{BaseKind, TermList};

/// Map a unit expression onto its dimension expression.
///
/// Every unit base is replaced by its declared dimension raised to the term's
/// exponent; dimension bases stay as they are. A unit may declare the
/// dimension of another unit (an electron-volt has the dimension of a joule),
/// so the replacement recurses until only dimensions are left. The result is
/// canonical.
pub const fn dimension_of(expr: &UnitExpr<'_>) -> Result<Canonical, AlgebraError> {
    let units = tri!(canonicalize(expr));
    Ok(Canonical::from_terms(tri!(project_into(TermList::EMPTY, units.terms(), 0))))
}

// Merges the projection of every term into `acc`, so only distinct
// dimensions count against the term capacity.
const fn project_into(mut acc: TermList, terms: &TermList, depth: usize) -> Result<TermList, AlgebraError> {
    if depth > MAX_DEPTH {
        return Err(AlgebraError::NestingTooDeep);
    }
    let terms = terms.as_slice();
    let mut i = 0;
    while i < terms.len() {
        let term = terms[i];
        acc = match term.base.kind() {
            BaseKind::Dimension => tri!(merge(acc, term)),
            BaseKind::Unit {
                dimension: Some(dimension),
                ..
            } => {
                let declared = tri!(fold(dimension, term.exponent, TermList::EMPTY, depth + 1));
                tri!(project_into(acc, &declared, depth + 1))
            }
            BaseKind::Unit { dimension: None, .. } => {
                return Err(AlgebraError::MissingDimension(term.base.name()))
            }
        };
        i += 1;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::terms_equal;
    use crate::expr::DIMENSIONLESS;
    use crate::factor::Factor;
    use crate::simplify::Form;
    use crate::term::{Base, Term};

    const LENGTH_BASE: Base = Base::dimension("length");
    const TIME_BASE: Base = Base::dimension("time");
    const LENGTH: UnitExpr<'static> = UnitExpr::Base(LENGTH_BASE);
    const TIME: UnitExpr<'static> = UnitExpr::Base(TIME_BASE);
    const SPEED_DIM: UnitExpr<'static> = UnitExpr::Product(&[LENGTH, UnitExpr::Power(&TIME, -1)]);

    const METRE: UnitExpr<'static> = UnitExpr::Base(Base::unit("metre", &LENGTH, Factor::Integral(1)));
    const SECOND: UnitExpr<'static> = UnitExpr::Base(Base::unit("second", &TIME, Factor::Integral(1)));
    const KNOT: UnitExpr<'static> =
        UnitExpr::Base(Base::unit("knot", &SPEED_DIM, Factor::Floating(0.514444)));
    const TEN: UnitExpr<'static> =
        UnitExpr::Base(Base::unit("ten", &DIMENSIONLESS, Factor::Integral(10)).with_param(10));

    #[test]
    fn test_projects_unit_to_dimension() {
        assert_eq!(dimension_of(&METRE).unwrap().form(), Form::Bare(LENGTH_BASE));
    }

    #[test]
    fn test_exponents_are_carried() {
        const ACCEL: UnitExpr<'static> = UnitExpr::Product(&[METRE, UnitExpr::Power(&SECOND, -2)]);
        let dim = dimension_of(&ACCEL).unwrap();
        assert_eq!(
            dim.terms().as_slice(),
            &[Term::new(LENGTH_BASE, 1), Term::new(TIME_BASE, -2)]
        );
    }

    #[test]
    fn test_dimensionless_bases_vanish() {
        const KILOMETRE: UnitExpr<'static> = UnitExpr::Product(&[UnitExpr::Power(&TEN, 3), METRE]);
        assert!(terms_equal(
            &dimension_of(&KILOMETRE).unwrap(),
            &dimension_of(&METRE).unwrap()
        ));
    }

    #[test]
    fn test_compound_dimension_declaration_recurses() {
        const PER_SECOND: UnitExpr<'static> = UnitExpr::Product(&[METRE, UnitExpr::Power(&SECOND, -1)]);
        const KNOT_SQUARED: UnitExpr<'static> = UnitExpr::Power(&KNOT, 2);
        assert!(terms_equal(
            &dimension_of(&KNOT).unwrap(),
            &dimension_of(&PER_SECOND).unwrap()
        ));
        assert_eq!(
            dimension_of(&KNOT_SQUARED).unwrap().terms().as_slice(),
            &[Term::new(LENGTH_BASE, 2), Term::new(TIME_BASE, -2)]
        );
    }

    #[test]
    fn test_missing_dimension() {
        const ORPHAN: UnitExpr<'static> =
            UnitExpr::Base(Base::partial("orphan", None, Some(Factor::Integral(1))));
        const MIXED: UnitExpr<'static> = UnitExpr::Product(&[METRE, ORPHAN]);
        assert_eq!(
            dimension_of(&MIXED).err(),
            Some(AlgebraError::MissingDimension("orphan"))
        );
    }

    #[test]
    fn test_dimension_of_dimension_is_itself() {
        assert_eq!(dimension_of(&SPEED_DIM).unwrap().len(), 2);
        assert!(dimension_of(&DIMENSIONLESS).unwrap().is_dimensionless());
    }
}
