use serde::{Deserialize, Serialize};

use crate::schema::FieldType;

/// Metadata of a single entity field.
///
/// In a schema document a field may be written either as a bare type name
/// (`"age": "int"`) or as an object (`"age": { "ty": "int", "nullable": true }`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "FieldSpec")]
pub struct FieldInfo {
    pub ty: FieldType,
    pub nullable: bool,
}

impl FieldInfo {
    pub fn new(ty: FieldType) -> Self {
        Self { ty, nullable: false }
    }

    pub fn nullable(ty: FieldType) -> Self {
        Self { ty, nullable: true }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldSpec {
    Type(FieldType),
    Full {
        #[serde(default)]
        ty: FieldType,
        #[serde(default)]
        nullable: bool,
    },
}

impl From<FieldSpec> for FieldInfo {
    fn from(spec: FieldSpec) -> Self {
        match spec {
            FieldSpec::Type(ty) => FieldInfo::new(ty),
            FieldSpec::Full { ty, nullable } => FieldInfo { ty, nullable },
        }
    }
}
