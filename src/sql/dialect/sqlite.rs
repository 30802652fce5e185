//! SQLite dialect.
//!
//! SQLite differences from ANSI:
//! - Identifiers only need quoting when they are keywords or not plain words
//! - Booleans are stored as integers (1/0)
//! - NULLS FIRST/LAST accepted since 3.30

use super::helpers;
use super::SqlDialect;

/// SQLite SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct Sqlite;

impl SqlDialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_double_if_needed(ident)
    }

    fn format_bool(&self, b: bool) -> &'static str {
        helpers::format_bool_numeric(b)
    }
}
