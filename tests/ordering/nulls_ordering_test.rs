use querykit::sql::{col, Dialect, Ordering, OrderingTerm, SqlCompiler, TableAlias};
use sqlparser::dialect::{DuckDbDialect, PostgreSqlDialect, SQLiteDialect};
use sqlparser::parser::Parser;

fn parses(sql: &str, dialect: Dialect) -> bool {
    let parser_dialect: Box<dyn sqlparser::dialect::Dialect> = match dialect {
        Dialect::Sqlite => Box::new(SQLiteDialect {}),
        Dialect::DuckDb => Box::new(DuckDbDialect {}),
        Dialect::Postgres => Box::new(PostgreSqlDialect {}),
        other => panic!("no NULLS ordering parser for {}", other),
    };
    Parser::parse_sql(&*parser_dialect, sql).is_ok()
}

#[test]
fn test_nulls_variants_render() {
    assert_eq!(
        col("score").asc_nulls_last().to_sql(Dialect::Postgres).unwrap(),
        "\"score\" ASC NULLS LAST"
    );
    assert_eq!(
        col("score").desc_nulls_first().to_sql(Dialect::Sqlite).unwrap(),
        "score DESC NULLS FIRST"
    );
}

#[test]
fn test_nulls_variants_reverse_in_pairs() {
    let asc = Ordering::AscNullsLast(col("score"));
    assert!(matches!(asc.reversed(), Ordering::DescNullsFirst(_)));
    assert!(matches!(asc.reversed().reversed(), Ordering::AscNullsLast(_)));
    assert!(asc.is_ascending());
    assert!(!asc.reversed().is_ascending());
}

#[test]
fn test_nulls_variant_qualifies() {
    let t0 = TableAlias::new("t0");
    let term = OrderingTerm::from(col("score").desc_nulls_first())
        .qualified(&t0)
        .reversed();
    assert_eq!(
        term.to_sql(Dialect::DuckDb).unwrap(),
        "\"t0\".\"score\" ASC NULLS LAST"
    );
}

#[test]
fn test_nulls_placement_dropped_where_unsupported() {
    let term = col("score").asc_nulls_last();
    assert_eq!(term.to_sql(Dialect::MySql).unwrap(), "`score` ASC");
    assert_eq!(term.to_sql(Dialect::TSql).unwrap(), "[score] ASC");
}

#[test]
fn test_nulls_order_by_parses() {
    let t0 = TableAlias::new("t0");
    let terms: Vec<OrderingTerm> = vec![
        col("score").desc_nulls_first().into(),
        col("name").asc_nulls_last().into(),
        col("id").into(),
    ];
    let terms: Vec<_> = terms.iter().map(|t| t.qualified(&t0)).collect();

    for dialect in [Dialect::Sqlite, Dialect::DuckDb, Dialect::Postgres] {
        let order_by = SqlCompiler::new(dialect).compile_order_by(&terms).unwrap();
        assert!(order_by.contains("DESC NULLS FIRST"), "{}", order_by);
        assert!(order_by.contains("ASC NULLS LAST"), "{}", order_by);

        let sql = format!("SELECT * FROM players AS t0 {}", order_by);
        assert!(parses(&sql, dialect), "{}", sql);
    }
}
