//! ORDER BY terms.
//!
//! An ordering term is anything that can sit in an ORDER BY clause: a bare
//! [`Expression`] (implicitly ascending) or an explicit [`Ordering`].
//! Terms can be reversed and qualified without losing their direction.
//!
//! The NULLS-placement variants exist only when the crate is built with the
//! `nulls-ordering` feature.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::alias::TableAlias;
use super::compiler::SqlCompiler;
use super::dialect::Dialect;
use super::error::CompileResult;
use super::expr::Expression;
use super::visitor::OrderingVisitor;

// =============================================================================
// Capability
// =============================================================================

/// A node representing one ORDER BY item.
pub trait SqlOrderingTerm: AsOrderingTerm + fmt::Debug + Send + Sync + 'static {
    /// The term sorting the opposite way.
    fn reversed(&self) -> OrderingTerm;

    /// The term with its expression qualified by `alias`.
    fn qualified(&self, alias: &TableAlias) -> OrderingTerm;

    /// Calls the one visitor method matching this term's kind.
    fn accept(&self, visitor: &mut dyn OrderingVisitor) -> CompileResult<()>;
}

/// Provided for every ordering term.
pub trait AsOrderingTerm {
    fn as_any(&self) -> &dyn Any;
}

impl<T: SqlOrderingTerm> AsOrderingTerm for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Handle
// =============================================================================

/// A shared handle to an ordering term.
#[derive(Clone)]
pub struct OrderingTerm(Arc<dyn SqlOrderingTerm>);

impl OrderingTerm {
    pub fn new(term: impl SqlOrderingTerm) -> Self {
        Self(Arc::new(term))
    }

    pub fn term(&self) -> &dyn SqlOrderingTerm {
        &*self.0
    }

    /// Downcast to a concrete term kind.
    pub fn downcast_ref<T: SqlOrderingTerm>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    pub fn reversed(&self) -> OrderingTerm {
        self.0.reversed()
    }

    pub fn qualified(&self, alias: &TableAlias) -> OrderingTerm {
        self.0.qualified(alias)
    }

    pub fn accept(&self, visitor: &mut dyn OrderingVisitor) -> CompileResult<()> {
        self.0.accept(visitor)
    }

    /// Compile to SQL for the given dialect.
    pub fn to_sql(&self, dialect: Dialect) -> CompileResult<String> {
        SqlCompiler::new(dialect).compile_ordering(self)
    }
}

impl fmt::Debug for OrderingTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: SqlOrderingTerm> From<T> for OrderingTerm {
    fn from(term: T) -> Self {
        OrderingTerm::new(term)
    }
}

// =============================================================================
// Canonical ordering node
// =============================================================================

/// An expression with an explicit sort direction.
///
/// The NULLS-placement variants require the `nulls-ordering` feature:
///
#[cfg_attr(not(feature = "nulls-ordering"), doc = "```compile_fail")]
#[cfg_attr(feature = "nulls-ordering", doc = "```")]
/// use querykit::sql::{col, Ordering};
///
/// let ordering = Ordering::AscNullsLast(col("score"));
/// ```
#[derive(Debug, Clone)]
pub enum Ordering {
    /// `expr ASC`
    Asc(Expression),
    /// `expr DESC`
    Desc(Expression),
    /// `expr ASC NULLS LAST`
    #[cfg(feature = "nulls-ordering")]
    AscNullsLast(Expression),
    /// `expr DESC NULLS FIRST`
    #[cfg(feature = "nulls-ordering")]
    DescNullsFirst(Expression),
}

impl Ordering {
    /// The sorted expression.
    pub fn expression(&self) -> &Expression {
        match self {
            Ordering::Asc(expr) | Ordering::Desc(expr) => expr,
            #[cfg(feature = "nulls-ordering")]
            Ordering::AscNullsLast(expr) | Ordering::DescNullsFirst(expr) => expr,
        }
    }

    pub fn is_ascending(&self) -> bool {
        match self {
            Ordering::Asc(_) => true,
            Ordering::Desc(_) => false,
            #[cfg(feature = "nulls-ordering")]
            Ordering::AscNullsLast(_) => true,
            #[cfg(feature = "nulls-ordering")]
            Ordering::DescNullsFirst(_) => false,
        }
    }

    /// Flip the direction. ASC NULLS LAST pairs with DESC NULLS FIRST so that
    /// NULLs stay at the same end relative to the direction.
    pub fn reversed(&self) -> Ordering {
        match self {
            Ordering::Asc(expr) => Ordering::Desc(expr.clone()),
            Ordering::Desc(expr) => Ordering::Asc(expr.clone()),
            #[cfg(feature = "nulls-ordering")]
            Ordering::AscNullsLast(expr) => Ordering::DescNullsFirst(expr.clone()),
            #[cfg(feature = "nulls-ordering")]
            Ordering::DescNullsFirst(expr) => Ordering::AscNullsLast(expr.clone()),
        }
    }

    pub fn qualified(&self, alias: &TableAlias) -> Ordering {
        self.map_expression(|expr| expr.qualified(alias))
    }

    /// Rebuild the same variant around a transformed expression.
    pub(crate) fn map_expression(
        &self,
        transform: impl FnOnce(&Expression) -> Expression,
    ) -> Ordering {
        match self {
            Ordering::Asc(expr) => Ordering::Asc(transform(expr)),
            Ordering::Desc(expr) => Ordering::Desc(transform(expr)),
            #[cfg(feature = "nulls-ordering")]
            Ordering::AscNullsLast(expr) => Ordering::AscNullsLast(transform(expr)),
            #[cfg(feature = "nulls-ordering")]
            Ordering::DescNullsFirst(expr) => Ordering::DescNullsFirst(transform(expr)),
        }
    }

    pub fn to_sql(&self, dialect: Dialect) -> CompileResult<String> {
        OrderingTerm::new(self.clone()).to_sql(dialect)
    }
}

impl SqlOrderingTerm for Ordering {
    fn reversed(&self) -> OrderingTerm {
        OrderingTerm::new(Ordering::reversed(self))
    }

    fn qualified(&self, alias: &TableAlias) -> OrderingTerm {
        OrderingTerm::new(Ordering::qualified(self, alias))
    }

    fn accept(&self, visitor: &mut dyn OrderingVisitor) -> CompileResult<()> {
        visitor.visit_ordering(self)
    }
}

// A bare expression orders ascending.
impl SqlOrderingTerm for Expression {
    fn reversed(&self) -> OrderingTerm {
        OrderingTerm::new(Ordering::Desc(self.clone()))
    }

    fn qualified(&self, alias: &TableAlias) -> OrderingTerm {
        OrderingTerm::new(Expression::qualified(self, alias))
    }

    fn accept(&self, visitor: &mut dyn OrderingVisitor) -> CompileResult<()> {
        visitor.visit_expression(self)
    }
}
