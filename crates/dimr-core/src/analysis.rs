//! Run-time analysis of unit types
//!
//! Typed code never needs this: every fact about a unit is a constant. The
//! analyzer exists for tooling, such as verifying a whole catalog in one pass
//! and dumping what the algebra made of each unit. Results are memoized per
//! type, and a unit the algebra refuses comes back as an [`AlgebraError`]
//! instead of a compile error.

use serde::Serialize;
use std::any::{type_name, TypeId};
use std::collections::HashMap;

use crate::dimension::dimension_of;
use crate::equality::terms_equal;
use crate::error::AlgebraError;
use crate::expr::UnitExpr;
use crate::factor::{factor_of, Factor};
use crate::simplify::{canonicalize, is_simplified, Canonical};
use crate::tag::Unit;

/// One term of an analysed expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRecord {
    pub base: String,
    pub exponent: i32,
}

/// What the algebra made of a unit type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Rust type name of the tag
    pub unit: &'static str,
    pub canonical: Vec<TermRecord>,
    pub dimension: Vec<TermRecord>,
    pub factor: Factor,
    /// Whether the tag is already written in canonical form
    pub simplified: bool,
    /// Size of the expression tree as written
    pub nodes: usize,
    #[serde(skip)]
    dimension_terms: Canonical,
}

impl Analysis {
    fn of(unit: &'static str, expr: &UnitExpr<'_>) -> Result<Self, AlgebraError> {
        let canonical = canonicalize(expr)?;
        let dimension = dimension_of(expr)?;
        Ok(Self {
            unit,
            canonical: records(&canonical),
            dimension: records(&dimension),
            factor: factor_of(expr)?,
            simplified: is_simplified(expr)?,
            nodes: expr.node_count(),
            dimension_terms: dimension,
        })
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_empty()
    }
}

fn records(canonical: &Canonical) -> Vec<TermRecord> {
    canonical
        .iter()
        .map(|term| TermRecord {
            base: match term.base.param() {
                0 => term.base.name().to_string(),
                param => format!("{}<{}>", term.base.name(), param),
            },
            exponent: term.exponent,
        })
        .collect()
}

/// Memoizing analyzer over unit types
#[derive(Debug, Default)]
pub struct Analyzer {
    analyses: HashMap<TypeId, Analysis>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyse `U`, or return the memoized analysis.
    pub fn analyze<U: Unit>(&mut self) -> Result<&Analysis, AlgebraError> {
        let id = TypeId::of::<U>();
        if self.analyses.contains_key(&id) {
            tracing::trace!(unit = type_name::<U>(), "analysis cache hit");
            return Ok(&self.analyses[&id]);
        }

        let unit = type_name::<U>();
        let analysis = match Analysis::of(unit, &U::EXPR) {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::warn!(unit, %err, "unit rejected");
                return Err(err);
            }
        };
        tracing::debug!(
            unit,
            factor = %analysis.factor,
            terms = analysis.canonical.len(),
            simplified = analysis.simplified,
            "analysed unit"
        );
        Ok(self.analyses.entry(id).or_insert(analysis))
    }

    /// Whether `A` and `B` share a dimension
    pub fn compatible<A: Unit, B: Unit>(&mut self) -> Result<bool, AlgebraError> {
        let a = self.analyze::<A>()?.dimension_terms;
        let b = self.analyze::<B>()?.dimension_terms;
        Ok(terms_equal(&a, &b))
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    /// Every analysis so far, ordered by unit name
    pub fn report(&self) -> Vec<&Analysis> {
        let mut report: Vec<_> = self.analyses.values().collect();
        report.sort_by_key(|analysis| analysis.unit);
        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.report())
    }

    pub fn clear(&mut self) {
        self.analyses.clear();
    }
}
