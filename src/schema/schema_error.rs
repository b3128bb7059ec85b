use thiserror::Error;

/// Failures while building or loading a [`Schema`](crate::schema::Schema).
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),

    #[error("entity `{0}` is already defined")]
    DuplicateEntity(String),

    #[error("primary key `{key}` is not a field of entity `{entity}`")]
    UnknownPrimaryKey { entity: String, key: String },

    #[error("relationship `{relationship}` on entity `{entity}` targets unknown entity `{related}`")]
    UnknownRelated {
        entity: String,
        relationship: String,
        related: String,
    },

    #[error("relationship `{relationship}` on entity `{entity}` uses key `{key}` which is not a field of `{owner}`")]
    UnknownKey {
        entity: String,
        relationship: String,
        key: String,
        owner: String,
    },

    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read schema file: {0}")]
    Io(#[from] std::io::Error),
}
