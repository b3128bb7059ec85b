use std::fmt;

use crate::{ast::{Expr, Location}, schema::{same_entity, EntityHandle}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinKind::Inner => write!(f, "inner"),
            JoinKind::Left => write!(f, "left"),
            JoinKind::Right => write!(f, "right"),
            JoinKind::Full => write!(f, "full"),
            JoinKind::Cross => write!(f, "cross"),
        }
    }
}

/// What a join ranges over, before normalization.
#[derive(Clone)]
pub enum JoinSource {
    /// No target given.
    Unresolved,
    /// Relationship `name` of the entity bound to `base_var`.
    Relationship { base_var: usize, name: String },
    RawName(String),
    EntityRef(EntityHandle),
}

impl JoinSource {
    pub fn relationship(base_var: usize, name: impl Into<String>) -> Self {
        JoinSource::Relationship { base_var, name: name.into() }
    }

    pub fn raw(name: impl Into<String>) -> Self {
        JoinSource::RawName(name.into())
    }

    /// Raw names and entity references are concrete.
    pub fn is_concrete(&self) -> bool {
        matches!(self, JoinSource::RawName(_) | JoinSource::EntityRef(_))
    }
}

impl From<EntityHandle> for JoinSource {
    fn from(entity: EntityHandle) -> Self {
        JoinSource::EntityRef(entity)
    }
}

impl PartialEq for JoinSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JoinSource::Unresolved, JoinSource::Unresolved) => true,
            (
                JoinSource::Relationship { base_var: a, name: x },
                JoinSource::Relationship { base_var: b, name: y },
            ) => a == b && x == y,
            (JoinSource::RawName(a), JoinSource::RawName(b)) => a == b,
            (JoinSource::EntityRef(a), JoinSource::EntityRef(b)) => same_entity(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for JoinSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinSource::Unresolved => write!(f, "?"),
            JoinSource::Relationship { base_var, name } => write!(f, "assoc(&{}, {})", base_var, name),
            JoinSource::RawName(name) => write!(f, "\"{}\"", name),
            JoinSource::EntityRef(entity) => write!(f, "{}", entity.source_name()),
        }
    }
}

impl fmt::Debug for JoinSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinSource::Unresolved => write!(f, "Unresolved"),
            JoinSource::Relationship { .. } => write!(f, "Relationship({})", self),
            JoinSource::RawName(_) => write!(f, "RawName({})", self),
            JoinSource::EntityRef(_) => write!(f, "EntityRef({})", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub source: JoinSource,
    pub on: Option<Expr>,
    pub location: Location,
}

impl Join {
    pub fn new(kind: JoinKind, source: JoinSource, on: Option<Expr>, location: Location) -> Self {
        Self { kind, source, on, location }
    }

    pub fn is_concrete(&self) -> bool {
        self.source.is_concrete()
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.on {
            Some(on) => write!(f, "{} join {} on {}", self.kind, self.source, on),
            None => write!(f, "{} join {}", self.kind, self.source),
        }
    }
}
