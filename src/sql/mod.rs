//! SQL expression and ordering layer.
//!
//! - [`expr`] - Expression capability, handle and built-in node kinds
//! - [`ordering`] - ORDER BY terms and the canonical [`Ordering`] node
//! - [`selectable`] - SELECT list items
//! - [`visitor`] - Visitor interfaces consumed by `accept`
//! - [`compiler`] - Reference visitor emitting dialect-specific SQL
//! - [`token`] - Token types for SQL generation
//! - [`dialect`] - SQL dialect implementations

pub mod alias;
pub mod compiler;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod ordering;
pub mod selectable;
pub mod token;
pub mod visitor;


// Re-export commonly used types at the sql module level
pub use alias::TableAlias;
pub use compiler::SqlCompiler;
pub use dialect::{Dialect, SqlDialect, UnknownDialect};
pub use error::{CompileError, CompileResult};
pub use expr::{
    col, count_distinct, count_star, lit_bool, lit_float, lit_int, lit_null, lit_str, raw_sql,
    table_col, AsExpression, BinaryOp, BinaryOperator, Column, Count, CountSpec, Expression,
    InList, IsNull, Literal, Negation, RawSql, SqlExpression,
};
pub use ordering::{AsOrderingTerm, Ordering, OrderingTerm, SqlOrderingTerm};
pub use selectable::Selectable;
pub use token::{Token, TokenStream};
pub use visitor::{ExpressionVisitor, OrderingVisitor};
