pub mod field_type;
pub use field_type::*;

pub mod field_info;
pub use field_info::*;

pub mod entity;
pub use entity::*;

pub mod relationship_def;
pub use relationship_def::*;

pub mod entity_def;
pub use entity_def::*;

pub mod schema_error;
pub use schema_error::*;

pub mod registry;
pub use registry::*;
