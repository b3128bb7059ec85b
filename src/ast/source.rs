use std::fmt;

use crate::schema::{same_entity, EntityHandle};

/// A queryable origin bound to one positional variable.
#[derive(Clone)]
pub enum Source {
    /// Placeholder for a source that could not be resolved.
    Unresolved,
    /// Raw, untyped source given by name only.
    Raw(String),
    /// Typed entity.
    Entity(EntityHandle),
}

impl Source {
    pub fn raw(name: impl Into<String>) -> Self {
        Source::Raw(name.into())
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Source::Unresolved => None,
            Source::Raw(name) => Some(name.as_str()),
            Source::Entity(entity) => Some(entity.source_name()),
        }
    }

    pub fn entity(&self) -> Option<&EntityHandle> {
        match self {
            Source::Entity(entity) => Some(entity),
            _ => None,
        }
    }
}

impl From<EntityHandle> for Source {
    fn from(entity: EntityHandle) -> Self {
        Source::Entity(entity)
    }
}

impl PartialEq for Source {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Source::Unresolved, Source::Unresolved) => true,
            (Source::Raw(a), Source::Raw(b)) => a == b,
            (Source::Entity(a), Source::Entity(b)) => same_entity(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Unresolved => write!(f, "?"),
            Source::Raw(name) => write!(f, "\"{}\"", name),
            Source::Entity(entity) => write!(f, "{}", entity.source_name()),
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Unresolved => write!(f, "Unresolved"),
            Source::Raw(_) => write!(f, "Raw({})", self),
            Source::Entity(_) => write!(f, "Entity({})", self),
        }
    }
}
