pub mod normalize_error;
pub use normalize_error::*;

pub mod normalize_options;
pub use normalize_options::*;

pub mod source_resolver;
pub use source_resolver::*;

pub mod join_normalizer;
pub use join_normalizer::*;

pub mod auto_selector;
pub use auto_selector::*;

pub mod field_expander;
pub use field_expander::*;

pub mod pipeline;
pub use pipeline::*;

#[cfg(test)]
pub mod _tests;
#[cfg(test)]
pub use _tests::fixtures;
