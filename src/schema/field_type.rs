use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared storage type of an entity field.
///
/// The normalization pass never looks at field types; they are carried so a
/// schema document can be round-tripped and inspected by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Any value (untyped column)
    #[default]
    Any,
    /// Boolean
    Bool,
    /// Integer number
    Int,
    /// Floating-point number
    Float,
    /// String
    String,
    /// Nested object (map)
    Object,
    /// Array
    Array,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Any => "any",
            FieldType::Bool => "bool",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::String => "string",
            FieldType::Object => "object",
            FieldType::Array => "array",
        };
        write!(f, "{}", name)
    }
}
