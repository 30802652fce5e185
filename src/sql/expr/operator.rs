//! Operator expressions: comparisons, AND/OR, membership and NULL tests.
//!
//! These kinds override negation with their complement form, so
//! `NOT (a = b)` is emitted as `a <> b` and `NOT (x IN (...))` as
//! `x NOT IN (...)`.

use super::{AsExpression, Expression, Negation, SqlExpression};
use crate::sql::alias::TableAlias;
use crate::sql::error::CompileResult;
use crate::sql::token::Token;
use crate::sql::visitor::ExpressionVisitor;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,
    // Logical
    And,
    Or,
}

impl BinaryOperator {
    /// The operator whose result is the negation of this one.
    ///
    /// Comparisons have one under SQL's three-valued logic (a NULL operand
    /// yields NULL either way); AND/OR do not.
    pub fn complement(self) -> Option<BinaryOperator> {
        match self {
            BinaryOperator::Eq => Some(BinaryOperator::Ne),
            BinaryOperator::Ne => Some(BinaryOperator::Eq),
            BinaryOperator::Lt => Some(BinaryOperator::Gte),
            BinaryOperator::Gte => Some(BinaryOperator::Lt),
            BinaryOperator::Gt => Some(BinaryOperator::Lte),
            BinaryOperator::Lte => Some(BinaryOperator::Gt),
            BinaryOperator::And | BinaryOperator::Or => None,
        }
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }

    pub(crate) fn to_token(self) -> Token {
        match self {
            BinaryOperator::Eq => Token::Eq,
            BinaryOperator::Ne => Token::Ne,
            BinaryOperator::Lt => Token::Lt,
            BinaryOperator::Gt => Token::Gt,
            BinaryOperator::Lte => Token::Lte,
            BinaryOperator::Gte => Token::Gte,
            BinaryOperator::And => Token::And,
            BinaryOperator::Or => Token::Or,
        }
    }
}

/// Binary operation: left op right
#[derive(Debug, Clone)]
pub struct BinaryOp {
    left: Expression,
    op: BinaryOperator,
    right: Expression,
}

impl BinaryOp {
    pub fn new(left: Expression, op: BinaryOperator, right: Expression) -> Self {
        Self { left, op, right }
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn op(&self) -> BinaryOperator {
        self.op
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl SqlExpression for BinaryOp {
    fn negated(&self) -> Expression {
        match self.op.complement() {
            Some(op) => {
                Expression::new(BinaryOp::new(self.left.clone(), op, self.right.clone()))
            }
            None => Expression::new(Negation::new(self.to_expression())),
        }
    }

    fn qualified(&self, alias: &TableAlias) -> Expression {
        Expression::new(BinaryOp::new(
            self.left.qualified(alias),
            self.op,
            self.right.qualified(alias),
        ))
    }

    fn accept(&self, visitor: &mut dyn ExpressionVisitor) -> CompileResult<()> {
        visitor.visit_binary(self)
    }
}

/// IN: expr [NOT] IN (values...)
#[derive(Debug, Clone)]
pub struct InList {
    expr: Expression,
    values: Vec<Expression>,
    negated: bool,
}

impl InList {
    pub fn new(expr: Expression, values: Vec<Expression>, negated: bool) -> Self {
        Self {
            expr,
            values,
            negated,
        }
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn values(&self) -> &[Expression] {
        &self.values
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl SqlExpression for InList {
    fn negated(&self) -> Expression {
        Expression::new(InList {
            negated: !self.negated,
            ..self.clone()
        })
    }

    fn qualified(&self, alias: &TableAlias) -> Expression {
        Expression::new(InList {
            expr: self.expr.qualified(alias),
            values: self.values.iter().map(|v| v.qualified(alias)).collect(),
            negated: self.negated,
        })
    }

    fn accept(&self, visitor: &mut dyn ExpressionVisitor) -> CompileResult<()> {
        visitor.visit_in_list(self)
    }
}

/// IS NULL / IS NOT NULL
#[derive(Debug, Clone)]
pub struct IsNull {
    expr: Expression,
    negated: bool,
}

impl IsNull {
    pub fn new(expr: Expression, negated: bool) -> Self {
        Self { expr, negated }
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl SqlExpression for IsNull {
    fn negated(&self) -> Expression {
        Expression::new(IsNull::new(self.expr.clone(), !self.negated))
    }

    fn qualified(&self, alias: &TableAlias) -> Expression {
        Expression::new(IsNull::new(self.expr.qualified(alias), self.negated))
    }

    fn accept(&self, visitor: &mut dyn ExpressionVisitor) -> CompileResult<()> {
        visitor.visit_is_null(self)
    }
}
