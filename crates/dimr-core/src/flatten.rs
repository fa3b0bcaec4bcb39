//! Flatten: nested expression to flat term list

use crate::error::{tri, AlgebraError};
use crate::expr::UnitExpr;
use crate::term::{Term, TermList};

/// Deepest nesting [`flatten`] follows before giving up.
pub const MAX_DEPTH: usize = 64;

/// Expand a raw expression into a flat list of `(base, exponent)` terms.
///
/// Nested products are spliced in place and a power distributes over every
/// term of its operand, so `(A·B)^p` becomes `A^p · B^p`. Repeated bases are
/// kept; merging them is [`crate::simplify`]'s job.
pub const fn flatten(expr: &UnitExpr<'_>) -> Result<TermList, AlgebraError> {
    flatten_into(expr, 1, TermList::EMPTY, 0)
}

const fn flatten_into(
    expr: &UnitExpr<'_>,
    power: i32,
    acc: TermList,
    depth: usize,
) -> Result<TermList, AlgebraError> {
    if depth > MAX_DEPTH {
        return Err(AlgebraError::NestingTooDeep);
    }
    match *expr {
        UnitExpr::Base(base) => acc.push(Term::new(base, power)),
        UnitExpr::Power(inner, exponent) => {
            let power = match power.checked_mul(exponent) {
                Some(power) => power,
                None => return Err(AlgebraError::ExponentOverflow),
            };
            flatten_into(inner, power, acc, depth + 1)
        }
        UnitExpr::Product(parts) => {
            let mut acc = acc;
            let mut i = 0;
            while i < parts.len() {
                acc = tri!(flatten_into(&parts[i], power, acc, depth + 1));
                i += 1;
            }
            Ok(acc)
        }
    }
}
