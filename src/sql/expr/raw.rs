//! Raw SQL fragments.

use super::{Expression, SqlExpression};
use crate::sql::alias::TableAlias;
use crate::sql::error::CompileResult;
use crate::sql::visitor::ExpressionVisitor;

/// Raw SQL expression passed directly to output without escaping.
///
/// # Security Warning
///
/// **Never pass user input to this node.** Raw SQL is not sanitized and can
/// lead to SQL injection vulnerabilities. Qualification cannot see inside the
/// text, so column references in it stay as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSql {
    sql: String,
}

impl RawSql {
    pub fn new(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }
}

impl SqlExpression for RawSql {
    fn qualified(&self, _alias: &TableAlias) -> Expression {
        Expression::new(self.clone())
    }

    fn accept(&self, visitor: &mut dyn ExpressionVisitor) -> CompileResult<()> {
        visitor.visit_raw(self)
    }
}

/// Raw SQL expression (pass-through, no parsing).
///
/// # Example
/// ```ignore
/// raw_sql("CURRENT_TIMESTAMP")
/// ```
pub fn raw_sql(sql: &str) -> Expression {
    Expression::new(RawSql::new(sql))
}
