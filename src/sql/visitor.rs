//! Visitor interfaces consumed by `accept`.
//!
//! Every node kind dispatches to exactly one method. Kinds defined outside
//! this crate have no dedicated method and land in the required catch-all,
//! where a visitor either handles them or reports them as unsupported.

use super::error::CompileResult;
use super::expr::{
    BinaryOp, Column, Count, Expression, InList, IsNull, Literal, Negation, RawSql,
    SqlExpression,
};
use super::ordering::{Ordering, SqlOrderingTerm};

/// Compiles expression nodes.
pub trait ExpressionVisitor {
    fn visit_column(&mut self, column: &Column) -> CompileResult<()>;

    fn visit_literal(&mut self, literal: &Literal) -> CompileResult<()>;

    /// The visitor may inspect [`Negation::inner`] to pick a compact rendering.
    fn visit_negation(&mut self, negation: &Negation) -> CompileResult<()>;

    fn visit_binary(&mut self, binary: &BinaryOp) -> CompileResult<()>;

    fn visit_in_list(&mut self, in_list: &InList) -> CompileResult<()>;

    fn visit_is_null(&mut self, is_null: &IsNull) -> CompileResult<()>;

    fn visit_count(&mut self, count: &Count) -> CompileResult<()>;

    fn visit_raw(&mut self, raw: &RawSql) -> CompileResult<()>;

    /// Catch-all for expression kinds this trait has no method for.
    fn visit_other(&mut self, expression: &dyn SqlExpression) -> CompileResult<()>;
}

/// Compiles ORDER BY terms.
pub trait OrderingVisitor {
    /// A bare expression used as an ordering term (implicitly ascending).
    fn visit_expression(&mut self, expression: &Expression) -> CompileResult<()>;

    fn visit_ordering(&mut self, ordering: &Ordering) -> CompileResult<()>;

    /// Catch-all for ordering term kinds this trait has no method for.
    fn visit_other_term(&mut self, term: &dyn SqlOrderingTerm) -> CompileResult<()>;
}
