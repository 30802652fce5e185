use querykit::config::Settings;
use querykit::sql::{
    col, count_distinct, count_star, lit_bool, lit_float, lit_int, lit_null, lit_str, raw_sql,
    table_col, Column, CompileError, Dialect, Expression, Literal, Selectable, SqlCompiler,
    TableAlias,
};

fn sqlite(expr: &Expression) -> String {
    expr.to_sql(Dialect::Sqlite).unwrap()
}

#[test]
fn test_literals_per_dialect() {
    let expr = col("active").eq(lit_bool(true));
    assert_eq!(sqlite(&expr), "active = 1");
    assert_eq!(
        expr.to_sql(Dialect::Postgres).unwrap(),
        "\"active\" = true"
    );
    assert_eq!(sqlite(&lit_null()), "NULL");
    assert_eq!(sqlite(&lit_float(0.5)), "0.5");
    assert_eq!(
        lit_str("Zoë").to_sql(Dialect::TSql).unwrap(),
        "N'Zoë'"
    );
}

#[test]
fn test_non_finite_float_is_an_error() {
    let err = col("ratio").gt(lit_float(f64::INFINITY)).to_sql(Dialect::Sqlite);
    assert!(matches!(err, Err(CompileError::NonFiniteFloat(_))));
}

#[test]
fn test_keyword_identifiers_are_quoted_in_sqlite() {
    assert_eq!(sqlite(&col("order")), "\"order\"");
    assert_eq!(sqlite(&col("first name")), "\"first name\"");
    assert_eq!(
        sqlite(&col("current_date").negated()),
        "NOT \"current_date\""
    );
    assert_eq!(sqlite(&col("returning").negated()), "NOT \"returning\"");
}

#[test]
fn test_trivial_true_filter_can_be_elided() {
    let filters = vec![lit_bool(true), col("age").gte(18), lit_bool(true)];
    let kept: Vec<_> = filters.iter().filter(|f| !f.is_trivial_true()).collect();
    assert_eq!(kept.len(), 1);
    assert_eq!(sqlite(kept[0]), "age >= 18");
}

#[test]
fn test_count_spec_from_selection() {
    let email = col("email");
    assert!(email.count_spec(false).is_all());

    let spec = email.count_spec(true);
    assert_eq!(spec.to_sql(Dialect::Sqlite).unwrap(), "COUNT(DISTINCT email)");

    // the counted expression is the selected one, not a copy with new bindings
    let counted = spec.distinct_expression().unwrap();
    assert!(counted.downcast_ref::<Column>().unwrap().qualifier().is_none());
}

#[test]
fn test_count_helpers() {
    assert_eq!(sqlite(&count_star()), "COUNT(*)");
    let alias = TableAlias::new("o");
    assert_eq!(
        sqlite(&count_distinct(table_col(&alias, "customer_id"))),
        "COUNT(DISTINCT o.customer_id)"
    );
}

#[test]
fn test_selectable_compile() {
    let items = [
        Selectable::from(col("id")),
        count_star().alias("total"),
        Selectable::all_columns(),
    ];
    let sql: Vec<_> = items
        .iter()
        .map(|item| item.to_sql(Dialect::Postgres).unwrap())
        .collect();
    assert_eq!(sql, vec!["\"id\"", "COUNT(*) AS \"total\"", "*"]);
}

#[test]
fn test_raw_sql_passthrough() {
    assert_eq!(sqlite(&raw_sql("length(name) > 3")), "length(name) > 3");
    assert_eq!(
        sqlite(&raw_sql("length(name) > 3").and(col("id").eq(lit_int(1)))),
        "(length(name) > 3) AND id = 1"
    );
}

#[test]
fn test_compiler_from_settings() {
    let settings = Settings::from_toml_str("[compiler]\ndialect = \"duckdb\"\n").unwrap();
    let sql = SqlCompiler::from_settings(&settings)
        .compile_expression(&col("name").eq("Ada"))
        .unwrap();
    assert_eq!(sql, "\"name\" = 'Ada'");
}

#[test]
fn test_literal_downcast() {
    let expr = lit_int(7);
    assert!(matches!(expr.downcast_ref::<Literal>(), Some(Literal::Int(7))));
}
