use tracing::trace;

use crate::{ast::{Expr, Query}, normalizer::NormalizeOptions};

/// Defaults the projection to the primary source.
pub struct AutoSelector;

impl AutoSelector {
    pub fn select(query: &Query, options: &NormalizeOptions) -> Query {
        if query.select.is_some() || options.skip_select {
            return query.clone();
        }

        trace!("defaulting projection to &0");
        Query { select: Some(Expr::var(0)), ..query.clone() }
    }
}
