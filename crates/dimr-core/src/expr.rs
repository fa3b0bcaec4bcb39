//! Raw unit expressions

use crate::term::Base;

/// A unit or dimension expression as it was written.
///
/// Raw expressions nest freely: products may contain products, and a whole
/// product may be raised to a power. Bases may repeat. [`crate::flatten`] and
/// [`crate::simplify`] turn one into its canonical form.
///
/// Children are borrowed so expressions can live in constants:
///
/// ```
/// use dimr_core::{Base, UnitExpr};
///
/// const LENGTH: UnitExpr<'static> = UnitExpr::Base(Base::dimension("length"));
/// const TIME: UnitExpr<'static> = UnitExpr::Base(Base::dimension("time"));
/// const SPEED: UnitExpr<'static> = UnitExpr::Product(&[LENGTH, UnitExpr::Power(&TIME, -1)]);
///
/// assert_eq!(dimr_core::flatten(&SPEED).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum UnitExpr<'a> {
    Base(Base),
    Power(&'a UnitExpr<'a>, i32),
    Product(&'a [UnitExpr<'a>]),
}

/// The empty product
pub const DIMENSIONLESS: UnitExpr<'static> = UnitExpr::Product(&[]);

impl<'a> UnitExpr<'a> {
    /// Number of nodes in the tree, counting this one
    pub fn node_count(&self) -> usize {
        match self {
            UnitExpr::Base(_) => 1,
            UnitExpr::Power(inner, _) => 1 + inner.node_count(),
            UnitExpr::Product(parts) => 1 + parts.iter().map(UnitExpr::node_count).sum::<usize>(),
        }
    }
}
