pub mod literal;
pub use literal::*;

pub mod operators;
pub use operators::*;

pub mod expr;
pub use expr::*;

pub mod location;
pub use location::*;

pub mod query_expr;
pub use query_expr::*;

pub mod source;
pub use source::*;

pub mod join;
pub use join::*;

pub mod query;
pub use query::*;
