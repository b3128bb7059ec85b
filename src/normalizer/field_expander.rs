use tracing::{debug, trace};

use crate::{
    ast::{Expr, Location, Query, QueryExpr, Source},
    normalizer::{NormalizeError, NormalizeReason},
};

/// Replaces bare positional variables in grouping and distinct clauses
/// with the variable's fields.
pub struct FieldExpander;

impl FieldExpander {
    /// Expand every entry of `exprs` against the resolved `sources`.
    pub fn expand(exprs: &[QueryExpr], sources: &[Source]) -> Result<Vec<QueryExpr>, NormalizeError> {
        exprs.iter().map(|entry| Self::expand_entry(entry, sources)).collect()
    }

    pub fn expand_entry(entry: &QueryExpr, sources: &[Source]) -> Result<QueryExpr, NormalizeError> {
        let mut terms = Vec::with_capacity(entry.expr.len());
        for term in &entry.expr {
            terms.extend(Self::expand_term(term, &entry.location, sources)?);
        }

        Ok(QueryExpr { expr: terms, location: entry.location.clone() })
    }

    /// `&i` becomes `&i.f` for each field `f` of source `i`; other terms are kept.
    pub fn expand_term(term: &Expr, location: &Location, sources: &[Source]) -> Result<Vec<Expr>, NormalizeError> {
        let Some(index) = term.as_var() else {
            return Ok(vec![term.clone()]);
        };

        let entity = sources.get(index).and_then(Source::entity).ok_or_else(|| {
            debug!(var = index, location = %location, "cannot expand untyped source");
            NormalizeError::new(location.clone(), NormalizeReason::UntypedExpansion { var: index })
        })?;

        let fields = entity.field_names();
        trace!(var = index, fields = fields.len(), "expanded variable");
        Ok(fields.into_iter().map(|field| Expr::var_field(index, field)).collect())
    }

    pub fn expand_distincts(query: &Query) -> Result<Query, NormalizeError> {
        let distincts = Self::expand(&query.distincts, &query.sources)?;
        Ok(Query { distincts, ..query.clone() })
    }

    pub fn expand_group_bys(query: &Query) -> Result<Query, NormalizeError> {
        let group_bys = Self::expand(&query.group_bys, &query.sources)?;
        Ok(Query { group_bys, ..query.clone() })
    }
}
