use querykit::sql::{col, lit_bool, raw_sql, Dialect, Expression, Negation, TableAlias};

fn sqlite(expr: &Expression) -> String {
    expr.to_sql(Dialect::Sqlite).unwrap()
}

#[test]
fn test_negate_boolean_column() {
    let negated = col("favorite").negated();
    assert_eq!(sqlite(&negated), "NOT favorite");

    let inner = negated.downcast_ref::<Negation>().unwrap().inner();
    assert_eq!(sqlite(inner), "favorite");
}

#[test]
fn test_negation_leaves_original_untouched() {
    let original = col("favorite");
    let _ = original.negated();
    assert_eq!(sqlite(&original), "favorite");
}

#[test]
fn test_double_negation_is_kept() {
    let twice = col("favorite").negated().negated();
    assert!(twice.downcast_ref::<Negation>().is_some());
    assert_eq!(sqlite(&twice), "NOT (NOT favorite)");
}

#[test]
fn test_negated_then_qualified() {
    let alias = TableAlias::new("t0");
    let expr = col("favorite").negated().qualified(&alias);
    assert_eq!(sqlite(&expr), "NOT t0.favorite");

    let other = col("favorite").qualified(&alias).negated();
    assert_eq!(sqlite(&other), sqlite(&expr));
}

#[test]
fn test_negated_literal() {
    let expr = lit_bool(true).negated();
    assert!(!expr.is_trivial_true());
    assert_eq!(expr.to_sql(Dialect::Postgres).unwrap(), "NOT true");
}

#[test]
fn test_negated_comparison_uses_complement() {
    assert_eq!(sqlite(&col("age").gte(18).negated()), "age < 18");
    assert_eq!(sqlite(&col("age").ne(18).negated()), "age = 18");
}

#[test]
fn test_negated_compound() {
    let expr = col("a").eq(1).or(col("b").is_null()).negated();
    assert_eq!(sqlite(&expr), "NOT (a = 1 OR b IS NULL)");
}

#[test]
fn test_negated_raw_is_parenthesized() {
    assert_eq!(sqlite(&raw_sql("a = b").negated()), "NOT (a = b)");
}
