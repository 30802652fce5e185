use querykit::sql::{
    col, count_star, lit_int, AsExpression, BinaryOp, Column, CompileError, CompileResult,
    Count, Dialect, Expression, ExpressionVisitor, InList, IsNull, Literal, Negation, Ordering,
    OrderingTerm, OrderingVisitor, RawSql, SqlExpression, SqlOrderingTerm, TableAlias,
};

/// An expression kind defined outside the crate: `LOWER(expr)`.
#[derive(Debug, Clone)]
struct Lower(Expression);

impl SqlExpression for Lower {
    fn qualified(&self, alias: &TableAlias) -> Expression {
        Expression::new(Lower(self.0.qualified(alias)))
    }

    fn accept(&self, visitor: &mut dyn ExpressionVisitor) -> CompileResult<()> {
        visitor.visit_other(self)
    }
}

/// An ordering term defined outside the crate: `RANDOM()`.
#[derive(Debug, Clone)]
struct Shuffle;

impl SqlOrderingTerm for Shuffle {
    fn reversed(&self) -> OrderingTerm {
        OrderingTerm::new(Shuffle)
    }

    fn qualified(&self, _alias: &TableAlias) -> OrderingTerm {
        OrderingTerm::new(Shuffle)
    }

    fn accept(&self, visitor: &mut dyn OrderingVisitor) -> CompileResult<()> {
        visitor.visit_other_term(self)
    }
}

/// Records the column names an expression references.
#[derive(Default)]
struct ColumnCollector {
    columns: Vec<String>,
    unknown: usize,
}

impl ExpressionVisitor for ColumnCollector {
    fn visit_column(&mut self, column: &Column) -> CompileResult<()> {
        let name = match column.qualifier() {
            Some(alias) => format!("{}.{}", alias, column.name()),
            None => column.name().to_string(),
        };
        self.columns.push(name);
        Ok(())
    }

    fn visit_literal(&mut self, _literal: &Literal) -> CompileResult<()> {
        Ok(())
    }

    fn visit_negation(&mut self, negation: &Negation) -> CompileResult<()> {
        negation.inner().accept(self)
    }

    fn visit_binary(&mut self, binary: &BinaryOp) -> CompileResult<()> {
        binary.left().accept(self)?;
        binary.right().accept(self)
    }

    fn visit_in_list(&mut self, in_list: &InList) -> CompileResult<()> {
        in_list.expr().accept(self)?;
        for value in in_list.values() {
            value.accept(self)?;
        }
        Ok(())
    }

    fn visit_is_null(&mut self, is_null: &IsNull) -> CompileResult<()> {
        is_null.expr().accept(self)
    }

    fn visit_count(&mut self, count: &Count) -> CompileResult<()> {
        match count.spec().distinct_expression() {
            Some(expr) => expr.accept(self),
            None => Ok(()),
        }
    }

    fn visit_raw(&mut self, _raw: &RawSql) -> CompileResult<()> {
        self.unknown += 1;
        Ok(())
    }

    fn visit_other(&mut self, expression: &dyn SqlExpression) -> CompileResult<()> {
        match expression.as_any().downcast_ref::<Lower>() {
            Some(lower) => lower.0.accept(self),
            None => {
                self.unknown += 1;
                Ok(())
            }
        }
    }
}

/// Counts which visitor method each ordering term dispatched to.
#[derive(Default)]
struct DispatchLog(Vec<&'static str>);

impl OrderingVisitor for DispatchLog {
    fn visit_expression(&mut self, _expression: &Expression) -> CompileResult<()> {
        self.0.push("expression");
        Ok(())
    }

    fn visit_ordering(&mut self, _ordering: &Ordering) -> CompileResult<()> {
        self.0.push("ordering");
        Ok(())
    }

    fn visit_other_term(&mut self, _term: &dyn SqlOrderingTerm) -> CompileResult<()> {
        self.0.push("other");
        Ok(())
    }
}

#[test]
fn test_custom_visitor_walks_tree() {
    let t = TableAlias::new("t");
    let expr = Expression::new(Lower(col("email")))
        .eq(col("login"))
        .and(col("banned").negated())
        .and(col("id").in_list(vec![lit_int(1), col("owner_id")]))
        .or(count_star().gt(1))
        .qualified(&t);

    let mut collector = ColumnCollector::default();
    expr.accept(&mut collector).unwrap();
    assert_eq!(
        collector.columns,
        vec!["t.email", "t.login", "t.banned", "t.id", "t.owner_id"]
    );
    assert_eq!(collector.unknown, 0);
}

#[test]
fn test_third_party_kind_gets_default_negation() {
    let negated = Expression::new(Lower(col("name"))).negated();
    let inner = negated.downcast_ref::<Negation>().unwrap().inner();
    assert!(inner.downcast_ref::<Lower>().is_some());
}

#[test]
fn test_third_party_kind_gets_default_count_spec() {
    let lower = Lower(col("name"));
    assert!(lower.count_spec(false).is_all());
    let spec = lower.count_spec(true);
    let counted = spec.distinct_expression().unwrap();
    assert!(counted.downcast_ref::<Lower>().is_some());
    assert!(lower.to_expression().downcast_ref::<Lower>().is_some());
}

#[test]
fn test_compiler_rejects_unknown_expression() {
    let expr = Expression::new(Lower(col("name"))).eq("ada");
    let err = expr.to_sql(Dialect::Sqlite).unwrap_err();
    match err {
        CompileError::UnsupportedExpression(debug) => assert!(debug.contains("Lower"), "{}", debug),
        other => panic!("Expected UnsupportedExpression, got {:?}", other),
    }
}

#[test]
fn test_compiler_rejects_unknown_ordering_term() {
    let err = OrderingTerm::new(Shuffle).to_sql(Dialect::Sqlite).unwrap_err();
    assert!(matches!(err, CompileError::UnsupportedOrdering(_)));
    assert!(err.to_string().contains("Shuffle"), "{}", err);
}

#[test]
fn test_each_term_dispatches_once() {
    let terms = [
        OrderingTerm::from(col("a")),
        OrderingTerm::from(col("a").desc()),
        OrderingTerm::new(Shuffle),
        OrderingTerm::from(col("a")).reversed(),
        OrderingTerm::new(Shuffle).reversed(),
    ];
    let mut log = DispatchLog::default();
    for term in &terms {
        term.accept(&mut log).unwrap();
    }
    assert_eq!(
        log.0,
        vec!["expression", "ordering", "other", "ordering", "other"]
    );
}
