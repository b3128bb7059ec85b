use thiserror::Error;

use crate::ast::Location;

/// Failure of a normalization call. Carries the location of the offending
/// clause; the call returns no partial query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {reason}")]
pub struct NormalizeError {
    pub location: Location,
    pub reason: NormalizeReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeReason {
    /// Relationship join whose base variable is not bound to a typed entity.
    #[error("association join cannot be performed without a model")]
    MissingModel,

    #[error("could not find association `{association}` on model `{model}`")]
    UnknownAssociation { association: String, model: String },

    /// Bare variable in a grouping/distinct clause whose source has no entity.
    #[error("cannot expand fields of `&{var}`: source is untyped")]
    UntypedExpansion { var: usize },

    #[error("join has no source")]
    MissingJoinSource,
}

impl NormalizeError {
    pub fn new(location: Location, reason: NormalizeReason) -> Self {
        Self { location, reason }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn reason(&self) -> &NormalizeReason {
        &self.reason
    }
}
