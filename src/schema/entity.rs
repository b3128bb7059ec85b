use std::{fmt, sync::Arc};

/// Capability set of a queryable entity, as seen by the normalization pass.
///
/// Implementations must be referentially stable: two calls with the same
/// arguments during one normalization return the same answer.
pub trait Entity: Send + Sync {
    /// Name identifying the entity inside its schema.
    fn name(&self) -> &str;

    /// Name of the storage source (table, collection) backing the entity.
    fn source_name(&self) -> &str;

    /// Ordered field identifiers of the entity.
    fn field_names(&self) -> Vec<String>;

    /// Named relationship from this entity to another one, if declared.
    fn relationship(&self, name: &str) -> Option<Relationship>;
}

/// Shared handle to an entity's capability set.
pub type EntityHandle = Arc<dyn Entity>;

impl fmt::Debug for dyn Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.source_name())
    }
}

/// Entities are identified by their name; several entities may share a source.
pub fn same_entity(a: &EntityHandle, b: &EntityHandle) -> bool {
    a.name() == b.name() && a.source_name() == b.source_name()
}

/// Descriptor of a relationship between two entities.
///
/// Joining through the relationship matches `related_key` on the related
/// entity against `owning_key` on the entity that declares it.
#[derive(Clone)]
pub struct Relationship {
    pub owning_key: String,
    pub related_key: String,
    pub related_entity: EntityHandle,
}

impl Relationship {
    pub fn new(owning_key: impl Into<String>, related_key: impl Into<String>, related_entity: EntityHandle) -> Self {
        Self {
            owning_key: owning_key.into(),
            related_key: related_key.into(),
            related_entity,
        }
    }
}

impl PartialEq for Relationship {
    fn eq(&self, other: &Self) -> bool {
        self.owning_key == other.owning_key
            && self.related_key == other.related_key
            && same_entity(&self.related_entity, &other.related_entity)
    }
}

impl fmt::Debug for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Relationship({}.{} = {})",
            self.related_entity.source_name(),
            self.related_key,
            self.owning_key
        )
    }
}
