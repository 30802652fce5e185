//! T-SQL (SQL Server / Azure SQL) dialect.
//!
//! T-SQL differences from ANSI:
//! - Square bracket identifier quoting (`[name]`)
//! - No native boolean literal (1/0)
//! - N'...' prefix for Unicode strings
//! - No NULLS FIRST/LAST before SQL Server 2022

use super::helpers;
use super::SqlDialect;

/// T-SQL (SQL Server) dialect.
#[derive(Debug, Clone, Copy)]
pub struct TSql;

impl SqlDialect for TSql {
    fn name(&self) -> &'static str {
        "tsql"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_bracket(ident)
    }

    fn quote_string(&self, s: &str) -> String {
        // Non-ASCII strings need the N prefix to survive as NVARCHAR
        if !s.is_ascii() {
            helpers::quote_string_unicode(s)
        } else {
            helpers::quote_string_single(s)
        }
    }

    fn format_bool(&self, b: bool) -> &'static str {
        helpers::format_bool_numeric(b)
    }

    fn format_bool_predicate(&self, b: bool) -> &'static str {
        helpers::format_bool_comparison(b)
    }

    fn supports_nulls_ordering(&self) -> bool {
        false
    }
}
