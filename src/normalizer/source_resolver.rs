use tracing::trace;

use crate::ast::{JoinSource, Query, Source};

/// Binds every positional variable of a query to its source.
pub struct SourceResolver;

impl SourceResolver {
    /// Returns a copy of `query` with `sources` populated. Never fails:
    /// joins that cannot be resolved get an [`Source::Unresolved`]
    /// placeholder and are reported by the join normalizer instead.
    pub fn resolve(query: &Query) -> Query {
        let sources = Self::resolve_sources(query);
        Query { sources, ..query.clone() }
    }

    pub fn resolve_sources(query: &Query) -> Vec<Source> {
        let mut sources = Vec::with_capacity(query.binding_count());
        if let Some(from) = &query.from {
            sources.push(from.clone());
        }

        for join in &query.joins {
            // only variables bound before this join are visible
            let source = Self::resolve_join_source(&join.source, &sources);
            trace!(position = sources.len(), source = %source, "bound join source");
            sources.push(source);
        }

        sources
    }

    fn resolve_join_source(source: &JoinSource, bound: &[Source]) -> Source {
        match source {
            JoinSource::Relationship { base_var, name } => bound
                .get(*base_var)
                .and_then(Source::entity)
                .and_then(|entity| entity.relationship(name))
                .map(|rel| Source::Entity(rel.related_entity))
                .unwrap_or(Source::Unresolved),
            JoinSource::RawName(name) => Source::Raw(name.clone()),
            JoinSource::EntityRef(entity) => Source::Entity(entity.clone()),
            JoinSource::Unresolved => Source::Unresolved,
        }
    }
}
