//! # querykit
//!
//! Composable SQL expression and ORDER BY terms that compile to
//! multi-dialect SQL.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              Expression / OrderingTerm trees            │
//! │   (columns, literals, operators, NOT, COUNT, raw SQL)   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [qualified / negated / reversed]
//! ┌─────────────────────────────────────────────────────────┐
//! │            Rewritten trees (originals untouched)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [accept(visitor)]
//! ┌─────────────────────────────────────────────────────────┐
//! │             SqlCompiler ──▶ TokenStream                 │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [dialect]
//! ┌─────────────────────────────────────────────────────────┐
//! │                      SQL text                           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ```
//! use querykit::prelude::*;
//!
//! let t0 = TableAlias::new("t0");
//! let filter = col("favorite").negated().qualified(&t0);
//! assert_eq!(filter.to_sql(Dialect::Sqlite).unwrap(), "NOT t0.favorite");
//!
//! let order = col("age").asc().reversed().qualified(&t0);
//! assert_eq!(order.to_sql(Dialect::Sqlite).unwrap(), "t0.age DESC");
//! ```

pub mod config;
pub mod sql;

// Re-export SQL submodules at crate level for convenience
pub use sql::dialect;
pub use sql::expr;
pub use sql::ordering;
pub use sql::token;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::sql::alias::TableAlias;
    pub use crate::sql::compiler::SqlCompiler;
    pub use crate::sql::dialect::{Dialect, SqlDialect};
    pub use crate::sql::error::{CompileError, CompileResult};
    pub use crate::sql::expr::{
        // Constructors
        col,
        count_distinct,
        count_star,
        lit_bool,
        lit_float,
        lit_int,
        lit_null,
        lit_str,
        raw_sql,
        table_col,
        // Types
        BinaryOperator,
        CountSpec,
        Expression,
        Literal,
        Negation,
        SqlExpression,
    };
    pub use crate::sql::ordering::{Ordering, OrderingTerm, SqlOrderingTerm};
    pub use crate::sql::selectable::Selectable;
    pub use crate::sql::visitor::{ExpressionVisitor, OrderingVisitor};
}

// Also export at crate root for convenience
pub use dialect::Dialect;
pub use expr::{col, table_col, Expression, SqlExpression};
pub use ordering::{Ordering, OrderingTerm};
pub use sql::alias::TableAlias;
