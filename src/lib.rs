pub mod schema;
pub use schema::{Entity, EntityDef, EntityHandle, Relationship, RelationshipDef, Schema, SchemaError};

pub mod ast;
pub use ast::{Expr, Join, JoinKind, JoinSource, Location, Query, QueryExpr, Source};

pub mod normalizer;
pub use normalizer::{NormalizeError, NormalizeOptions, NormalizeReason, Normalizer};
