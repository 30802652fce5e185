//! COUNT aggregates derived from selected expressions.

use super::{Expression, SqlExpression};
use crate::sql::alias::TableAlias;
use crate::sql::compiler::SqlCompiler;
use crate::sql::dialect::Dialect;
use crate::sql::error::CompileResult;
use crate::sql::visitor::ExpressionVisitor;

/// How a selection maps to a COUNT aggregate.
#[derive(Debug, Clone)]
pub enum CountSpec {
    /// `COUNT(*)`
    All,
    /// `COUNT(DISTINCT expr)`
    Distinct(Expression),
}

impl CountSpec {
    pub fn is_all(&self) -> bool {
        matches!(self, CountSpec::All)
    }

    /// The counted expression of a `Distinct` spec.
    pub fn distinct_expression(&self) -> Option<&Expression> {
        match self {
            CountSpec::All => None,
            CountSpec::Distinct(expr) => Some(expr),
        }
    }

    /// The COUNT aggregate as an expression node.
    pub fn into_expression(self) -> Expression {
        Expression::new(Count::new(self))
    }

    pub fn to_sql(&self, dialect: Dialect) -> CompileResult<String> {
        SqlCompiler::new(dialect).compile_expression(&self.clone().into_expression())
    }
}

/// A COUNT aggregate: `COUNT(*)` or `COUNT(DISTINCT expr)`.
#[derive(Debug, Clone)]
pub struct Count {
    spec: CountSpec,
}

impl Count {
    pub fn new(spec: CountSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &CountSpec {
        &self.spec
    }
}

impl SqlExpression for Count {
    fn qualified(&self, alias: &TableAlias) -> Expression {
        let spec = match &self.spec {
            CountSpec::All => CountSpec::All,
            CountSpec::Distinct(expr) => CountSpec::Distinct(expr.qualified(alias)),
        };
        Expression::new(Count::new(spec))
    }

    fn accept(&self, visitor: &mut dyn ExpressionVisitor) -> CompileResult<()> {
        visitor.visit_count(self)
    }
}

/// COUNT(*)
pub fn count_star() -> Expression {
    CountSpec::All.into_expression()
}

/// COUNT(DISTINCT expr)
pub fn count_distinct(expr: Expression) -> Expression {
    CountSpec::Distinct(expr).into_expression()
}
