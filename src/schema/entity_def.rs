use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::{FieldInfo, FieldType, RelationshipDef};

fn default_primary_key() -> String {
    "id".to_string()
}

/// Declarative description of one entity.
///
/// - `name` identifies the entity inside its schema.
/// - `source` is the storage source backing it; defaults to `name`.
/// - `primary_key` is used to infer relationship keys; defaults to `"id"`.
/// - `fields` keeps declaration order, which is the order wildcard
///   expansion produces fields in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default = "default_primary_key")]
    pub primary_key: String,
    #[serde(default)]
    pub fields: IndexMap<String, FieldInfo>,
    #[serde(default)]
    pub relationships: IndexMap<String, RelationshipDef>,
}

impl EntityDef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            source: None,
            primary_key: default_primary_key(),
            fields: IndexMap::new(),
            relationships: IndexMap::new(),
        }
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_primary_key(mut self, primary_key: &str) -> Self {
        self.primary_key = primary_key.to_string();
        self
    }

    pub fn with_field(mut self, name: &str, ty: FieldType) -> Self {
        self.fields.insert(name.to_string(), FieldInfo::new(ty));
        self
    }

    pub fn with_relationship(mut self, name: &str, relationship: RelationshipDef) -> Self {
        self.relationships.insert(name.to_string(), relationship);
        self
    }

    pub fn source_name(&self) -> &str {
        self.source.as_deref().unwrap_or(&self.name)
    }

    /// Column other entities use to point at this one, e.g. `orders` -> `order_id`.
    pub fn reference_column_name(&self) -> String {
        let name = match self.name.strip_suffix('s') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => self.name.as_str(),
        };

        format!("{}_{}", name, self.primary_key)
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}
