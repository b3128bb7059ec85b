use std::fmt;

use crate::ast::{Expr, Location};

fn join_terms(terms: &[Expr]) -> String {
    terms.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ")
}

/// Entry of a grouping or distinct clause: an ordered list of terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryExpr {
    pub expr: Vec<Expr>,
    pub location: Location,
}

impl QueryExpr {
    pub fn new(expr: Vec<Expr>, location: Location) -> Self {
        Self { expr, location }
    }

    #[track_caller]
    pub fn located(expr: Vec<Expr>) -> Self {
        Self::new(expr, Location::caller())
    }

    /// True when some term is a bare positional variable.
    pub fn has_bare_var(&self) -> bool {
        self.expr.iter().any(|term| term.as_var().is_some())
    }
}

impl fmt::Display for QueryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", join_terms(&self.expr))
    }
}

/// A filter clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanExpr {
    pub expr: Expr,
    pub location: Location,
}

impl BooleanExpr {
    pub fn new(expr: Expr, location: Location) -> Self {
        Self { expr, location }
    }
}

impl fmt::Display for BooleanExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub expr: Expr,
    pub direction: Direction,
    pub location: Location,
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Asc => write!(f, "{} asc", self.expr),
            Direction::Desc => write!(f, "{} desc", self.expr),
        }
    }
}
