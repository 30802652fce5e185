//! SELECT list items.

use super::alias::TableAlias;
use super::compiler::SqlCompiler;
use super::dialect::Dialect;
use super::error::CompileResult;
use super::expr::{CountSpec, Expression};

/// One item of a SELECT list.
#[derive(Debug, Clone)]
pub enum Selectable {
    /// A plain expression.
    Expression(Expression),
    /// `expr AS name`
    Aliased { expr: Expression, name: String },
    /// `*` or `alias.*`
    AllColumns { qualifier: Option<TableAlias> },
}

impl Selectable {
    /// Unqualified `*`.
    pub fn all_columns() -> Self {
        Selectable::AllColumns { qualifier: None }
    }

    /// The item with its column references bound to `alias`.
    ///
    /// `*` becomes `alias.*` unless it already has a qualifier.
    pub fn qualified(&self, alias: &TableAlias) -> Selectable {
        match self {
            Selectable::Expression(expr) => Selectable::Expression(expr.qualified(alias)),
            Selectable::Aliased { expr, name } => Selectable::Aliased {
                expr: expr.qualified(alias),
                name: name.clone(),
            },
            Selectable::AllColumns { qualifier } => Selectable::AllColumns {
                qualifier: Some(qualifier.clone().unwrap_or_else(|| alias.clone())),
            },
        }
    }

    /// How this item maps to a COUNT aggregate.
    ///
    /// `SELECT DISTINCT *` has no single-expression count, so it yields `None`.
    pub fn count_spec(&self, distinct: bool) -> Option<CountSpec> {
        match self {
            Selectable::Expression(expr) | Selectable::Aliased { expr, .. } => {
                Some(expr.count_spec(distinct))
            }
            Selectable::AllColumns { .. } if distinct => None,
            Selectable::AllColumns { .. } => Some(CountSpec::All),
        }
    }

    pub fn to_sql(&self, dialect: Dialect) -> CompileResult<String> {
        SqlCompiler::new(dialect).compile_selectable(self)
    }
}

impl From<Expression> for Selectable {
    fn from(expr: Expression) -> Self {
        Selectable::Expression(expr)
    }
}
