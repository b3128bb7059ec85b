use tracing::{debug, trace};

use crate::{
    ast::{Expr, Join, JoinSource, Query, Source},
    normalizer::{NormalizeError, NormalizeReason},
};

/// Rewrites relationship joins into concrete joins with explicit conditions.
pub struct JoinNormalizer;

impl JoinNormalizer {
    /// Normalize every join of a resolved query. Aborts at the first failing join.
    pub fn normalize_joins(query: &Query) -> Result<Query, NormalizeError> {
        let offset = query.join_offset();
        let joins = query.joins.iter()
            .enumerate()
            .map(|(i, join)| Self::normalize_join(join, offset + i, &query.sources))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Query { joins, ..query.clone() })
    }

    /// Normalize the join binding positional variable `position`.
    ///
    /// A relationship join `assoc(&base, name)` becomes a join on the related
    /// entity with condition `&position.related_key == &base.owning_key`,
    /// and-ed after any condition the join already had. Concrete joins are
    /// kept, with a missing condition filled in as `true`.
    pub fn normalize_join(join: &Join, position: usize, sources: &[Source]) -> Result<Join, NormalizeError> {
        match &join.source {
            JoinSource::RawName(_) | JoinSource::EntityRef(_) => match join.on {
                Some(_) => Ok(join.clone()),
                None => Ok(Join { on: Some(Expr::lit(true)), ..join.clone() }),
            },
            JoinSource::Unresolved => {
                debug!(position, location = %join.location, "join has no source");
                Err(NormalizeError::new(join.location.clone(), NormalizeReason::MissingJoinSource))
            }
            JoinSource::Relationship { base_var, name } => {
                let bound = &sources[..position.min(sources.len())];
                let entity = bound.get(*base_var)
                    .and_then(Source::entity)
                    .ok_or_else(|| {
                        debug!(position, base_var, location = %join.location, "association join without a model");
                        NormalizeError::new(join.location.clone(), NormalizeReason::MissingModel)
                    })?;

                let rel = entity.relationship(name).ok_or_else(|| {
                    debug!(position, association = %name, model = entity.source_name(), "unknown association");
                    NormalizeError::new(
                        join.location.clone(),
                        NormalizeReason::UnknownAssociation {
                            association: name.clone(),
                            model: entity.source_name().to_string(),
                        },
                    )
                })?;

                let condition = Expr::eq(
                    Expr::var_field(position, &rel.related_key),
                    Expr::var_field(*base_var, &rel.owning_key),
                );
                let on = match &join.on {
                    Some(extra) => Expr::and(extra.clone(), condition),
                    None => condition,
                };
                trace!(position, on = %on, "association join rewritten");

                Ok(Join {
                    kind: join.kind,
                    source: JoinSource::EntityRef(rel.related_entity),
                    on: Some(on),
                    location: join.location.clone(),
                })
            }
        }
    }
}
