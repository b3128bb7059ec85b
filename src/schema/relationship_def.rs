use serde::{Deserialize, Serialize};

use crate::schema::EntityDef;

/// Cardinality of a declared relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// The declaring entity holds the key pointing at the related entity.
    BelongsTo,
    /// The related entity holds one row pointing back at the declaring entity.
    HasOne,
    /// The related entity holds many rows pointing back at the declaring entity.
    HasMany,
}

/// A relationship as written in a schema document.
///
/// `owning_key` is the field on the declaring entity, `related_key` the
/// field on the `related` entity. Either may be omitted and is then inferred
/// from the relationship kind, see [`RelationshipDef::resolve_keys`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDef {
    pub kind: RelationshipKind,
    pub related: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owning_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_key: Option<String>,
}

impl RelationshipDef {
    pub fn new(kind: RelationshipKind, related: &str) -> Self {
        Self { kind, related: related.to_string(), owning_key: None, related_key: None }
    }

    pub fn belongs_to(related: &str) -> Self {
        Self::new(RelationshipKind::BelongsTo, related)
    }

    pub fn has_one(related: &str) -> Self {
        Self::new(RelationshipKind::HasOne, related)
    }

    pub fn has_many(related: &str) -> Self {
        Self::new(RelationshipKind::HasMany, related)
    }

    pub fn with_keys(mut self, owning_key: &str, related_key: &str) -> Self {
        self.owning_key = Some(owning_key.to_string());
        self.related_key = Some(related_key.to_string());
        self
    }

    /// Returns `(owning_key, related_key)`, filling the missing ones.
    ///
    /// - `belongs_to`: `"{name}_{owner pk}"` on the owner, the related primary key.
    /// - `has_one` / `has_many`: the owner primary key, the owner's reference
    ///   column name on the related entity.
    pub fn resolve_keys(&self, name: &str, owner: &EntityDef, related: &EntityDef) -> (String, String) {
        let (default_owning, default_related) = match self.kind {
            RelationshipKind::BelongsTo => (
                format!("{}_{}", name, related.primary_key),
                related.primary_key.clone(),
            ),
            RelationshipKind::HasOne | RelationshipKind::HasMany => (
                owner.primary_key.clone(),
                owner.reference_column_name(),
            ),
        };

        (
            self.owning_key.clone().unwrap_or(default_owning),
            self.related_key.clone().unwrap_or(default_related),
        )
    }
}
