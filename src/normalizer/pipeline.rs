use tracing::{debug, debug_span};

use crate::{
    ast::Query,
    normalizer::{AutoSelector, FieldExpander, JoinNormalizer, NormalizeError, NormalizeOptions, SourceResolver},
};

/// Runs the normalization stages in order:
/// resolve sources, normalize joins, default the projection, expand
/// distinct clauses, expand grouping clauses.
pub struct Normalizer;

impl Normalizer {
    pub fn normalize(query: &Query, options: &NormalizeOptions) -> Result<Query, NormalizeError> {
        let span = debug_span!("normalize", joins = query.joins.len(), skip_select = options.skip_select);
        let _enter = span.enter();

        let query = SourceResolver::resolve(query);
        let query = JoinNormalizer::normalize_joins(&query)
            .inspect_err(|err| debug!(%err, "join normalization failed"))?;
        let query = AutoSelector::select(&query, options);
        let query = FieldExpander::expand_distincts(&query)
            .and_then(|query| FieldExpander::expand_group_bys(&query))
            .inspect_err(|err| debug!(%err, "field expansion failed"))?;

        debug!(sources = query.sources.len(), "query normalized");
        Ok(query)
    }
}
