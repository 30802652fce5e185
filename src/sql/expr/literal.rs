//! Literal values.

use super::{Expression, SqlExpression};
use crate::sql::alias::TableAlias;
use crate::sql::error::CompileResult;
use crate::sql::visitor::ExpressionVisitor;

/// Literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
}

impl SqlExpression for Literal {
    fn qualified(&self, _alias: &TableAlias) -> Expression {
        Expression::new(self.clone())
    }

    fn accept(&self, visitor: &mut dyn ExpressionVisitor) -> CompileResult<()> {
        visitor.visit_literal(self)
    }
}

/// Create an integer literal.
pub fn lit_int(n: i64) -> Expression {
    Expression::new(Literal::Int(n))
}

/// Create a float literal.
pub fn lit_float(f: f64) -> Expression {
    Expression::new(Literal::Float(f))
}

/// Create a string literal.
pub fn lit_str(s: &str) -> Expression {
    Expression::new(Literal::String(s.into()))
}

/// Create a boolean literal.
pub fn lit_bool(b: bool) -> Expression {
    Expression::new(Literal::Bool(b))
}

/// Create a NULL literal.
pub fn lit_null() -> Expression {
    Expression::new(Literal::Null)
}
