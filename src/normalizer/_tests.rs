#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use serde_json::json;

    use crate::schema::{EntityHandle, Schema};

    /// person (people) 1-n order (orders) n-1 product (products)
    pub fn shop_schema() -> Arc<Schema> {
        let document = json!({
            "entities": [
                {
                    "name": "person",
                    "source": "people",
                    "fields": { "id": "int", "full_name": "string", "age": "int", "city": "string" },
                    "relationships": {
                        "orders": { "kind": "has_many", "related": "order" }
                    }
                },
                {
                    "name": "order",
                    "source": "orders",
                    "fields": {
                        "id": "int",
                        "person_id": "int",
                        "product_id": "int",
                        "quantity": "int",
                        "status": "string"
                    },
                    "relationships": {
                        "person": { "kind": "belongs_to", "related": "person" },
                        "product": { "kind": "belongs_to", "related": "product" },
                        "buyer": {
                            "kind": "belongs_to",
                            "related": "person",
                            "owning_key": "person_id",
                            "related_key": "id"
                        }
                    }
                },
                {
                    "name": "product",
                    "source": "products",
                    "fields": { "id": "int", "name": "string", "category": "string", "price": "float" },
                    "relationships": {
                        "orders": { "kind": "has_many", "related": "order" }
                    }
                }
            ]
        });

        Schema::from_json(&document.to_string()).unwrap()
    }

    pub fn person() -> EntityHandle {
        shop_schema().entity("person").unwrap()
    }

    pub fn order() -> EntityHandle {
        shop_schema().entity("order").unwrap()
    }

    pub fn product() -> EntityHandle {
        shop_schema().entity("product").unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;
    use crate::{
        ast::{Direction, Expr, JoinKind, JoinSource, Query, Source},
        normalizer::{NormalizeError, NormalizeOptions, NormalizeReason, Normalizer},
    };

    #[test]
    fn test_full_pipeline() {
        let query = Query::from_entity(fixtures::person())
            .assoc_join(JoinKind::Inner, 0, "orders", Some(Expr::eq(Expr::var_field(1, "status"), Expr::lit("new"))))
            .assoc_join(JoinKind::Left, 1, "product", None)
            .filter(Expr::eq(Expr::var_field(0, "city"), Expr::lit("Porto")))
            .group_by(vec![Expr::var(0), Expr::var_field(2, "category")])
            .distinct(vec![Expr::var(2)])
            .order_by(Expr::var_field(0, "full_name"), Direction::Desc)
            .limit(20);

        let normalized = Normalizer::normalize(&query, &NormalizeOptions::new()).unwrap();

        assert_eq!(
            normalized.sources,
            vec![
                Source::from(fixtures::person()),
                Source::from(fixtures::order()),
                Source::from(fixtures::product()),
            ]
        );

        assert_eq!(normalized.joins[0].source, JoinSource::from(fixtures::order()));
        assert_eq!(
            normalized.joins[0].on,
            Some(Expr::and(
                Expr::eq(Expr::var_field(1, "status"), Expr::lit("new")),
                Expr::eq(Expr::var_field(1, "person_id"), Expr::var_field(0, "id")),
            ))
        );
        assert_eq!(normalized.joins[0].kind, JoinKind::Inner);
        assert_eq!(normalized.joins[1].source, JoinSource::from(fixtures::product()));
        assert_eq!(
            normalized.joins[1].on,
            Some(Expr::eq(Expr::var_field(2, "id"), Expr::var_field(1, "product_id")))
        );
        assert_eq!(normalized.joins[1].kind, JoinKind::Left);

        assert_eq!(normalized.select, Some(Expr::var(0)));

        assert_eq!(
            normalized.group_bys[0].expr,
            vec![
                Expr::var_field(0, "id"),
                Expr::var_field(0, "full_name"),
                Expr::var_field(0, "age"),
                Expr::var_field(0, "city"),
                Expr::var_field(2, "category"),
            ]
        );
        assert_eq!(
            normalized.distincts[0].expr,
            vec![
                Expr::var_field(2, "id"),
                Expr::var_field(2, "name"),
                Expr::var_field(2, "category"),
                Expr::var_field(2, "price"),
            ]
        );

        // untouched clauses
        assert_eq!(normalized.wheres, query.wheres);
        assert_eq!(normalized.order_bys, query.order_bys);
        assert_eq!(normalized.limit, Some(20));
        assert_eq!(normalized.from, query.from);
    }

    #[test]
    fn test_input_query_is_left_untouched() {
        let query = Query::from_entity(fixtures::person())
            .assoc_join(JoinKind::Inner, 0, "orders", None)
            .group_by(vec![Expr::var(1)]);
        let before = query.clone();

        let _ = query.normalize(&NormalizeOptions::new()).unwrap();

        assert_eq!(query, before);
        assert!(query.sources.is_empty());
        assert!(query.select.is_none());
    }

    #[test]
    fn test_source_count_matches_bindings() {
        let with_from = Query::from_name("people")
            .join(JoinKind::Inner, JoinSource::raw("orders"), None)
            .join(JoinKind::Cross, fixtures::product(), None);
        let without_from = Query::new()
            .join(JoinKind::Inner, JoinSource::raw("orders"), None);

        for query in [with_from, without_from] {
            let normalized = query.normalize(&NormalizeOptions::skip_select()).unwrap();
            assert_eq!(normalized.sources.len(), query.binding_count());
            assert_eq!(normalized.joins.len(), query.joins.len());
        }
    }

    #[test]
    fn test_missing_model_aborts_pipeline() {
        let query = Query::from_name("people");
        let expected_line = line!() + 1;
        let query = query.assoc_join(JoinKind::Inner, 0, "orders", None);

        let err = query.normalize(&NormalizeOptions::new()).unwrap_err();

        assert_eq!(err.reason, NormalizeReason::MissingModel);
        assert_eq!(err.location().line, expected_line);
        assert!(err.location().file.ends_with("_tests.rs"));
    }

    #[test]
    fn test_unknown_association_aborts_pipeline() {
        let query = Query::from_entity(fixtures::person())
            .assoc_join(JoinKind::Inner, 0, "bogus", None);

        let err = query.normalize(&NormalizeOptions::new()).unwrap_err();

        assert_eq!(
            err,
            NormalizeError::new(
                query.joins[0].location.clone(),
                NormalizeReason::UnknownAssociation {
                    association: "bogus".to_string(),
                    model: "people".to_string(),
                },
            )
        );
    }

    #[test]
    fn test_first_failing_join_wins() {
        let query = Query::from_entity(fixtures::person())
            .assoc_join(JoinKind::Inner, 0, "bogus", None)
            .assoc_join(JoinKind::Inner, 5, "orders", None);

        let err = query.normalize(&NormalizeOptions::new()).unwrap_err();
        assert!(matches!(err.reason, NormalizeReason::UnknownAssociation { .. }));
    }

    #[test]
    fn test_untyped_expansion_fails() {
        let query = Query::from_name("people").group_by(vec![Expr::var(0)]);

        let err = query.normalize(&NormalizeOptions::new()).unwrap_err();

        assert_eq!(
            err,
            NormalizeError::new(query.group_bys[0].location.clone(), NormalizeReason::UntypedExpansion { var: 0 })
        );
    }

    #[test]
    fn test_skip_select() {
        let query = Query::from_entity(fixtures::person());

        let normalized = query.normalize(&NormalizeOptions::skip_select()).unwrap();
        assert!(normalized.select.is_none());

        let normalized = query.normalize(&NormalizeOptions::new()).unwrap();
        assert_eq!(normalized.select, Some(Expr::var(0)));
    }

    #[test]
    fn test_idempotent_on_normal_query() {
        let query = Query::from_entity(fixtures::order())
            .join(JoinKind::Inner, fixtures::person(), Some(Expr::eq(Expr::var_field(1, "id"), Expr::var_field(0, "person_id"))))
            .select(Expr::var_field(0, "id"))
            .group_by(vec![Expr::var_field(1, "city")])
            .distinct(vec![Expr::var_field(0, "status")]);

        let once = query.normalize(&NormalizeOptions::new()).unwrap();
        let twice = once.normalize(&NormalizeOptions::new()).unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.joins, query.joins);
        assert_eq!(once.group_bys, query.group_bys);
        assert_eq!(once.distincts, query.distincts);
    }

    #[test]
    fn test_normalized_output_is_a_fixed_point() {
        let query = Query::from_entity(fixtures::product())
            .assoc_join(JoinKind::Inner, 0, "orders", None)
            .assoc_join(JoinKind::Inner, 1, "buyer", None)
            .group_by(vec![Expr::var(2)]);

        let once = query.normalize(&NormalizeOptions::new()).unwrap();
        let twice = once.normalize(&NormalizeOptions::new()).unwrap();

        assert_eq!(once, twice);
        assert!(once.joins.iter().all(|j| j.is_concrete() && j.on.is_some()));
        assert!(once.group_bys.iter().all(|g| !g.has_bare_var()));
    }
}
