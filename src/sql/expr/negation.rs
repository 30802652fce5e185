//! The generic `NOT` node.

use super::{Expression, SqlExpression};
use crate::sql::alias::TableAlias;
use crate::sql::error::CompileResult;
use crate::sql::visitor::ExpressionVisitor;

/// Logical negation of one inner expression: `NOT inner`.
///
/// This is what the default [`SqlExpression::negated`] produces. It keeps
/// the default itself, so negating a `Negation` nests another one instead
/// of unwrapping to the inner expression.
#[derive(Debug, Clone)]
pub struct Negation {
    inner: Expression,
}

impl Negation {
    pub fn new(inner: Expression) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &Expression {
        &self.inner
    }
}

impl SqlExpression for Negation {
    fn qualified(&self, alias: &TableAlias) -> Expression {
        Expression::new(Negation::new(self.inner.qualified(alias)))
    }

    fn accept(&self, visitor: &mut dyn ExpressionVisitor) -> CompileResult<()> {
        visitor.visit_negation(self)
    }
}
