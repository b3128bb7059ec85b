use std::{path::Path, sync::Arc};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::schema::{Entity, EntityDef, EntityHandle, Relationship, SchemaError};

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

fn check_identifier(name: &str) -> Result<(), SchemaError> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(SchemaError::InvalidIdentifier(name.to_string()))
    }
}

#[derive(Deserialize)]
struct SchemaDocument {
    entities: Vec<EntityDef>,
}

/// Registry of entity definitions, keyed by entity name in declaration order.
///
/// A schema is built mutably, then frozen behind an `Arc` with
/// [`Schema::into_shared`]; entity handles point back into that shared
/// registry so relationships may form cycles.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entities: IndexMap<String, EntityDef>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity. Names are checked; cross-entity references are
    /// checked later by [`Schema::validate`].
    pub fn add_entity(&mut self, def: EntityDef) -> Result<(), SchemaError> {
        check_identifier(&def.name)?;
        check_identifier(def.source_name())?;
        check_identifier(&def.primary_key)?;
        for field in def.fields.keys() {
            check_identifier(field)?;
        }
        for (name, rel) in &def.relationships {
            check_identifier(name)?;
            for key in rel.owning_key.iter().chain(rel.related_key.iter()) {
                check_identifier(key)?;
            }
        }

        if self.entities.contains_key(&def.name) {
            return Err(SchemaError::DuplicateEntity(def.name));
        }

        self.entities.insert(def.name.clone(), def);
        Ok(())
    }

    pub fn with_entity(mut self, def: EntityDef) -> Result<Self, SchemaError> {
        self.add_entity(def)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&EntityDef> {
        self.entities.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Check that every relationship targets a known entity and that every
    /// key it resolves to is a declared field.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for def in self.entities.values() {
            if !def.fields.is_empty() && !def.has_field(&def.primary_key) {
                return Err(SchemaError::UnknownPrimaryKey {
                    entity: def.name.clone(),
                    key: def.primary_key.clone(),
                });
            }

            for (name, rel) in &def.relationships {
                let related = self.entities.get(&rel.related).ok_or_else(|| SchemaError::UnknownRelated {
                    entity: def.name.clone(),
                    relationship: name.clone(),
                    related: rel.related.clone(),
                })?;

                let (owning_key, related_key) = rel.resolve_keys(name, def, related);
                for (key, owner) in [(owning_key, def), (related_key, related)] {
                    if !owner.has_field(&key) {
                        return Err(SchemaError::UnknownKey {
                            entity: def.name.clone(),
                            relationship: name.clone(),
                            key,
                            owner: owner.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Validate and freeze the schema so entity handles can be created.
    pub fn into_shared(self) -> Result<Arc<Schema>, SchemaError> {
        self.validate()?;
        debug!(entities = self.entities.len(), "schema loaded");
        Ok(Arc::new(self))
    }

    /// Parse a schema document of the form `{ "entities": [ ... ] }`.
    pub fn from_json(text: &str) -> Result<Arc<Schema>, SchemaError> {
        let document: SchemaDocument = serde_json::from_str(text)?;
        let mut schema = Schema::new();
        for def in document.entities {
            schema.add_entity(def)?;
        }
        schema.into_shared()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Arc<Schema>, SchemaError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Handle to the entity named `name`, if registered.
    pub fn entity(self: &Arc<Self>, name: &str) -> Option<EntityHandle> {
        let index = self.entities.get_index_of(name)?;
        Some(Arc::new(SchemaEntity { schema: Arc::clone(self), index }))
    }
}

/// [`Entity`] backed by a definition inside a shared [`Schema`].
struct SchemaEntity {
    schema: Arc<Schema>,
    index: usize,
}

impl SchemaEntity {
    fn def(&self) -> &EntityDef {
        &self.schema.entities[self.index]
    }
}

impl Entity for SchemaEntity {
    fn name(&self) -> &str {
        &self.def().name
    }

    fn source_name(&self) -> &str {
        self.def().source_name()
    }

    fn field_names(&self) -> Vec<String> {
        self.def().field_names()
    }

    fn relationship(&self, name: &str) -> Option<Relationship> {
        let def = self.def();
        let rel = def.relationships.get(name)?;
        let index = self.schema.entities.get_index_of(&rel.related)?;
        let related = &self.schema.entities[index];
        let (owning_key, related_key) = rel.resolve_keys(name, def, related);

        Some(Relationship::new(
            owning_key,
            related_key,
            Arc::new(SchemaEntity { schema: Arc::clone(&self.schema), index }),
        ))
    }
}
