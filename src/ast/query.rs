use std::fmt;

use crate::{
    ast::{BooleanExpr, Direction, Expr, Join, JoinKind, JoinSource, Location, OrderBy, QueryExpr, Source},
    normalizer::{NormalizeError, NormalizeOptions, Normalizer},
    schema::EntityHandle,
};

/// Declarative query value.
///
/// Positional variable `i` refers to the i-th source: `from` first, then
/// each join in declaration order. `sources` is empty until the query has
/// gone through source resolution.
#[derive(Default, Clone, PartialEq)]
pub struct Query {
    pub from: Option<Source>,
    pub joins: Vec<Join>,
    pub select: Option<Expr>,
    pub wheres: Vec<BooleanExpr>,
    pub group_bys: Vec<QueryExpr>,
    pub distincts: Vec<QueryExpr>,
    pub order_bys: Vec<OrderBy>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub sources: Vec<Source>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_source(source: Source) -> Self {
        Self { from: Some(source), ..Self::default() }
    }

    pub fn from_entity(entity: EntityHandle) -> Self {
        Self::from_source(Source::Entity(entity))
    }

    pub fn from_name(name: impl Into<String>) -> Self {
        Self::from_source(Source::Raw(name.into()))
    }

    #[track_caller]
    pub fn join(mut self, kind: JoinKind, source: impl Into<JoinSource>, on: Option<Expr>) -> Self {
        self.joins.push(Join::new(kind, source.into(), on, Location::caller()));
        self
    }

    /// Join through relationship `name` of the entity bound to `base_var`.
    #[track_caller]
    pub fn assoc_join(mut self, kind: JoinKind, base_var: usize, name: &str, on: Option<Expr>) -> Self {
        self.joins.push(Join::new(kind, JoinSource::relationship(base_var, name), on, Location::caller()));
        self
    }

    pub fn select(mut self, expr: Expr) -> Self {
        self.select = Some(expr);
        self
    }

    #[track_caller]
    pub fn filter(mut self, expr: Expr) -> Self {
        self.wheres.push(BooleanExpr::new(expr, Location::caller()));
        self
    }

    #[track_caller]
    pub fn group_by(mut self, terms: Vec<Expr>) -> Self {
        self.group_bys.push(QueryExpr::located(terms));
        self
    }

    #[track_caller]
    pub fn distinct(mut self, terms: Vec<Expr>) -> Self {
        self.distincts.push(QueryExpr::located(terms));
        self
    }

    #[track_caller]
    pub fn order_by(mut self, expr: Expr, direction: Direction) -> Self {
        self.order_bys.push(OrderBy { expr, direction, location: Location::caller() });
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Positional variable bound by the first join.
    pub fn join_offset(&self) -> usize {
        usize::from(self.from.is_some())
    }

    /// Number of positional variables the query binds.
    pub fn binding_count(&self) -> usize {
        self.join_offset() + self.joins.len()
    }

    pub fn normalize(&self, options: &NormalizeOptions) -> Result<Query, NormalizeError> {
        Normalizer::normalize(self, options)
    }
}

fn list<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = match &self.from { Some(s) => s.to_string(), None => "None".to_string() };
        let select = match &self.select { Some(s) => s.to_string(), None => "None".to_string() };

        write!(f, "Query(from={}, joins=[{}], select={}, wheres=[{}], group_bys=[{}], distincts=[{}], order_bys=[{}], limit={:?}, offset={:?}, sources=[{}])",
               from, list(&self.joins), select, list(&self.wheres), list(&self.group_bys),
               list(&self.distincts), list(&self.order_bys), self.limit, self.offset, list(&self.sources))
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
