//! Expression capability - the contract every SQL expression node satisfies.
//!
//! Expression kinds form an open set: any type implementing [`SqlExpression`]
//! can be placed in a tree, rewritten and compiled. Trees are held through
//! [`Expression`], a cheap-to-clone shared handle. Nodes are immutable;
//! every rewrite returns a new tree and leaves the original untouched.
//!
//! ```text
//! build tree ──▶ qualify / negate ──▶ accept(visitor) ──▶ SQL text
//! ```
//!
//! Only `qualified` and `accept` must be written by hand. Negation and COUNT
//! derivation come from default methods, which a kind may override when it
//! has a more natural form (e.g. `x IN (...)` negates to `x NOT IN (...)`).

mod column;
mod count;
mod literal;
mod negation;
mod operator;
mod raw;

pub use column::{col, table_col, Column};
pub use count::{count_distinct, count_star, Count, CountSpec};
pub use literal::{lit_bool, lit_float, lit_int, lit_null, lit_str, Literal};
pub use negation::Negation;
pub use operator::{BinaryOp, BinaryOperator, InList, IsNull};
pub use raw::{raw_sql, RawSql};

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::alias::TableAlias;
use super::compiler::SqlCompiler;
use super::dialect::Dialect;
use super::error::CompileResult;
use super::ordering::Ordering;
use super::selectable::Selectable;
use super::visitor::ExpressionVisitor;

// =============================================================================
// Capability
// =============================================================================

/// A node representing one SQL expression.
///
/// Implementors must be `Clone`; [`AsExpression`] is then provided for them.
pub trait SqlExpression: AsExpression + fmt::Debug + Send + Sync + 'static {
    /// The expression, negated.
    ///
    /// The default wraps the expression in a [`Negation`]:
    ///
    /// ```text
    /// favorite      ──negated──▶  NOT favorite
    /// ```
    fn negated(&self) -> Expression {
        Expression::new(Negation::new(self.to_expression()))
    }

    /// An equivalent expression whose unqualified column references are
    /// bound to `alias`. Node kind and arity never change.
    fn qualified(&self, alias: &TableAlias) -> Expression;

    /// Calls the one visitor method matching this node's kind.
    fn accept(&self, visitor: &mut dyn ExpressionVisitor) -> CompileResult<()>;

    /// How this expression, selected, maps to a COUNT aggregate.
    fn count_spec(&self, distinct: bool) -> CountSpec {
        if distinct {
            // SELECT DISTINCT expr ... -> SELECT COUNT(DISTINCT expr) ...
            CountSpec::Distinct(self.to_expression())
        } else {
            // SELECT expr ... -> SELECT COUNT(*) ...
            CountSpec::All
        }
    }
}

/// Conversions every expression node gets for free from `Clone`.
pub trait AsExpression {
    /// A new handle holding a copy of this node.
    fn to_expression(&self) -> Expression;

    fn as_any(&self) -> &dyn Any;
}

impl<T> AsExpression for T
where
    T: SqlExpression + Clone,
{
    fn to_expression(&self) -> Expression {
        Expression::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Handle
// =============================================================================

/// A shared handle to an expression tree.
#[derive(Clone)]
pub struct Expression(Arc<dyn SqlExpression>);

impl Expression {
    pub fn new(node: impl SqlExpression) -> Self {
        Self(Arc::new(node))
    }

    /// The node behind this handle.
    pub fn node(&self) -> &dyn SqlExpression {
        &*self.0
    }

    /// Downcast to a concrete node kind.
    pub fn downcast_ref<T: SqlExpression>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    pub fn negated(&self) -> Expression {
        self.0.negated()
    }

    pub fn qualified(&self, alias: &TableAlias) -> Expression {
        self.0.qualified(alias)
    }

    pub fn accept(&self, visitor: &mut dyn ExpressionVisitor) -> CompileResult<()> {
        self.0.accept(visitor)
    }

    /// Like [`SqlExpression::count_spec`], but a `Distinct` spec counts this
    /// handle's tree itself rather than a copy of the node.
    pub fn count_spec(&self, distinct: bool) -> CountSpec {
        match self.0.count_spec(distinct) {
            CountSpec::Distinct(_) => CountSpec::Distinct(self.clone()),
            CountSpec::All => CountSpec::All,
        }
    }

    /// True iff both handles point at the same node.
    pub fn ptr_eq(&self, other: &Expression) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// True iff this is the literal boolean `true`, which filters can elide.
    pub fn is_trivial_true(&self) -> bool {
        matches!(self.downcast_ref::<Literal>(), Some(Literal::Bool(true)))
    }

    /// Compile to SQL for the given dialect.
    pub fn to_sql(&self, dialect: Dialect) -> CompileResult<String> {
        SqlCompiler::new(dialect).compile_expression(self)
    }

    // Comparison operators
    pub fn eq(self, other: impl Into<Expression>) -> Expression {
        BinaryOp::new(self, BinaryOperator::Eq, other.into()).into()
    }

    pub fn ne(self, other: impl Into<Expression>) -> Expression {
        BinaryOp::new(self, BinaryOperator::Ne, other.into()).into()
    }

    pub fn lt(self, other: impl Into<Expression>) -> Expression {
        BinaryOp::new(self, BinaryOperator::Lt, other.into()).into()
    }

    pub fn lte(self, other: impl Into<Expression>) -> Expression {
        BinaryOp::new(self, BinaryOperator::Lte, other.into()).into()
    }

    pub fn gt(self, other: impl Into<Expression>) -> Expression {
        BinaryOp::new(self, BinaryOperator::Gt, other.into()).into()
    }

    pub fn gte(self, other: impl Into<Expression>) -> Expression {
        BinaryOp::new(self, BinaryOperator::Gte, other.into()).into()
    }

    // Logical operators
    pub fn and(self, other: impl Into<Expression>) -> Expression {
        BinaryOp::new(self, BinaryOperator::And, other.into()).into()
    }

    pub fn or(self, other: impl Into<Expression>) -> Expression {
        BinaryOp::new(self, BinaryOperator::Or, other.into()).into()
    }

    // Membership and NULL checks
    pub fn in_list(self, values: Vec<Expression>) -> Expression {
        InList::new(self, values, false).into()
    }

    pub fn not_in_list(self, values: Vec<Expression>) -> Expression {
        InList::new(self, values, true).into()
    }

    pub fn is_null(self) -> Expression {
        IsNull::new(self, false).into()
    }

    pub fn is_not_null(self) -> Expression {
        IsNull::new(self, true).into()
    }

    // Ordering
    pub fn asc(self) -> Ordering {
        Ordering::Asc(self)
    }

    pub fn desc(self) -> Ordering {
        Ordering::Desc(self)
    }

    #[cfg(feature = "nulls-ordering")]
    pub fn asc_nulls_last(self) -> Ordering {
        Ordering::AscNullsLast(self)
    }

    #[cfg(feature = "nulls-ordering")]
    pub fn desc_nulls_first(self) -> Ordering {
        Ordering::DescNullsFirst(self)
    }

    /// Alias this expression (for SELECT list).
    pub fn alias(self, name: &str) -> Selectable {
        Selectable::Aliased {
            expr: self,
            name: name.into(),
        }
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl std::ops::Not for Expression {
    type Output = Expression;

    fn not(self) -> Expression {
        self.negated()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<E: SqlExpression> From<E> for Expression {
    fn from(node: E) -> Self {
        Expression::new(node)
    }
}

impl From<i64> for Expression {
    fn from(n: i64) -> Self {
        lit_int(n)
    }
}

impl From<i32> for Expression {
    fn from(n: i32) -> Self {
        lit_int(n as i64)
    }
}

impl From<f64> for Expression {
    fn from(f: f64) -> Self {
        lit_float(f)
    }
}

impl From<&str> for Expression {
    fn from(s: &str) -> Self {
        lit_str(s)
    }
}

impl From<String> for Expression {
    fn from(s: String) -> Self {
        Expression::new(Literal::String(s))
    }
}

impl From<bool> for Expression {
    fn from(b: bool) -> Self {
        lit_bool(b)
    }
}
