//! Column references - the only leaves qualification rewrites.

use super::{Expression, SqlExpression};
use crate::sql::alias::TableAlias;
use crate::sql::error::CompileResult;
use crate::sql::visitor::ExpressionVisitor;

/// A column reference, optionally bound to a table alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    qualifier: Option<TableAlias>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualifier: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The alias this column is bound to, if any.
    pub fn qualifier(&self) -> Option<&TableAlias> {
        self.qualifier.as_ref()
    }
}

impl SqlExpression for Column {
    fn qualified(&self, alias: &TableAlias) -> Expression {
        // Already-bound columns keep their alias.
        if self.qualifier.is_some() {
            return Expression::new(self.clone());
        }
        Expression::new(Column {
            name: self.name.clone(),
            qualifier: Some(alias.clone()),
        })
    }

    fn accept(&self, visitor: &mut dyn ExpressionVisitor) -> CompileResult<()> {
        visitor.visit_column(self)
    }
}

/// Create a column reference.
pub fn col(name: &str) -> Expression {
    Expression::new(Column::new(name))
}

/// Create a column reference already bound to `alias`.
pub fn table_col(alias: &TableAlias, name: &str) -> Expression {
    Expression::new(Column {
        name: name.into(),
        qualifier: Some(alias.clone()),
    })
}
