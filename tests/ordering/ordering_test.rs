use querykit::sql::{
    col, count_star, lit_int, Dialect, Expression, Ordering, OrderingTerm, SqlCompiler,
    TableAlias,
};

fn sqlite(term: &OrderingTerm) -> String {
    term.to_sql(Dialect::Sqlite).unwrap()
}

#[test]
fn test_reverse_then_qualify() {
    let t0 = TableAlias::new("t0");
    let term = col("age").asc().reversed().qualified(&t0);
    assert!(matches!(term, Ordering::Desc(_)));
    assert_eq!(term.to_sql(Dialect::Sqlite).unwrap(), "t0.age DESC");
}

#[test]
fn test_qualify_keeps_ascending() {
    let t0 = TableAlias::new("t0");
    let term = col("age").asc().qualified(&t0);
    assert_eq!(term.to_sql(Dialect::Sqlite).unwrap(), "t0.age ASC");
}

#[test]
fn test_reverse_and_qualify_commute() {
    let t0 = TableAlias::new("t0");
    let terms = [
        OrderingTerm::from(col("age")),
        OrderingTerm::from(col("age").asc()),
        OrderingTerm::from(col("age").desc()),
    ];
    for term in &terms {
        let a = term.reversed().qualified(&t0);
        let b = term.qualified(&t0).reversed();
        assert_eq!(sqlite(&a), sqlite(&b));
    }
}

#[test]
fn test_reverse_twice_restores_direction() {
    for ordering in [col("x").asc(), col("x").desc()] {
        let twice = ordering.reversed().reversed();
        assert_eq!(twice.is_ascending(), ordering.is_ascending());
        assert_eq!(
            twice.to_sql(Dialect::Sqlite).unwrap(),
            ordering.to_sql(Dialect::Sqlite).unwrap()
        );
    }
}

#[test]
fn test_bare_expression_term() {
    let term = OrderingTerm::from(col("name"));
    assert_eq!(sqlite(&term), "name");

    let reversed = term.reversed();
    let ordering = reversed.downcast_ref::<Ordering>().unwrap();
    assert!(!ordering.is_ascending());
    assert_eq!(sqlite(&reversed), "name DESC");
}

#[test]
fn test_qualified_expression_term_stays_bare() {
    let t = TableAlias::new("t");
    let term = OrderingTerm::from(col("name")).qualified(&t);
    assert!(term.downcast_ref::<Expression>().is_some());
    assert!(term.downcast_ref::<Ordering>().is_none());
    assert_eq!(sqlite(&term), "t.name");
}

#[test]
fn test_ordering_by_compound_expression() {
    let term = count_star().gt(lit_int(1)).desc();
    assert_eq!(
        term.to_sql(Dialect::Postgres).unwrap(),
        "COUNT(*) > 1 DESC"
    );
}

#[test]
fn test_order_by_clause() {
    let t0 = TableAlias::new("t0");
    let terms: Vec<OrderingTerm> = vec![
        col("score").desc().into(),
        col("name").into(),
    ];
    let qualified: Vec<_> = terms.iter().map(|t| t.qualified(&t0)).collect();
    let sql = SqlCompiler::new(Dialect::MySql)
        .compile_order_by(&qualified)
        .unwrap();
    assert_eq!(sql, "ORDER BY `t0`.`score` DESC, `t0`.`name`");
}

#[test]
fn test_original_term_untouched() {
    let term = col("age").asc();
    let _ = term.reversed();
    let _ = term.qualified(&TableAlias::new("t0"));
    assert_eq!(term.to_sql(Dialect::Sqlite).unwrap(), "age ASC");
}
