use std::fmt;

use crate::ast::{ComparatorOp, Literal};

/// Expression tree used in projections, conditions and grouping clauses.
///
/// Only [`Expr::Var`] and [`Expr::Field`] carry meaning for normalization;
/// every other node is passed through as-is.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(Literal),
    /// Positional variable: the i-th source of the query.
    Var(usize),
    /// Field access, normally on a positional variable.
    Field { source: Box<Expr>, name: String },
    Compare { left: Box<Expr>, op: ComparatorOp, right: Box<Expr> },
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
    Function { name: String, args: Vec<Expr> },
}

impl Expr {
    pub fn var(index: usize) -> Expr {
        Expr::Var(index)
    }

    pub fn field(source: Expr, name: impl Into<String>) -> Expr {
        Expr::Field { source: Box::new(source), name: name.into() }
    }

    /// Shorthand for `field(var(index), name)`.
    pub fn var_field(index: usize, name: impl Into<String>) -> Expr {
        Expr::field(Expr::var(index), name)
    }

    pub fn lit(value: impl Into<Literal>) -> Expr {
        Expr::Literal(value.into())
    }

    pub fn compare(left: Expr, op: ComparatorOp, right: Expr) -> Expr {
        Expr::Compare { left: Box::new(left), op, right: Box::new(right) }
    }

    pub fn eq(left: Expr, right: Expr) -> Expr {
        Expr::compare(left, ComparatorOp::Eq, right)
    }

    pub fn and(left: Expr, right: Expr) -> Expr {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Expr {
        Expr::Or(Box::new(left), Box::new(right))
    }

    pub fn not(expr: Expr) -> Expr {
        Expr::Not(Box::new(expr))
    }

    pub fn function(name: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Function { name: name.into(), args }
    }

    /// Index of a bare positional variable.
    pub fn as_var(&self) -> Option<usize> {
        match self {
            Expr::Var(index) => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(l) => write!(f, "{}", l),
            Expr::Var(i) => write!(f, "&{}", i),
            Expr::Field { source, name } => write!(f, "{}.{}", source, name),
            Expr::Compare { left, op, right } => write!(f, "{} {} {}", left, op, right),
            Expr::And(left, right) => write!(f, "({} and {})", left, right),
            Expr::Or(left, right) => write!(f, "({} or {})", left, right),
            Expr::Not(expr) => write!(f, "not({})", expr),
            Expr::Function { name, args } => {
                let args = args.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "{}({})", name, args)
            }
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(_) => write!(f, "Literal({})", self),
            Expr::Var(_) => write!(f, "Var({})", self),
            Expr::Field { .. } => write!(f, "Field({})", self),
            Expr::Compare { .. } => write!(f, "Compare({})", self),
            Expr::And(..) => write!(f, "And{}", self),
            Expr::Or(..) => write!(f, "Or{}", self),
            Expr::Not(_) => write!(f, "Not({})", self),
            Expr::Function { .. } => write!(f, "Function({})", self),
        }
    }
}
