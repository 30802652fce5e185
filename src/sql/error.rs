//! Errors raised while compiling expressions and ordering terms to SQL.
//!
//! Rewrites (negation, qualification, reversal) are total and never fail;
//! only emission can.

/// Errors that can occur when a visitor compiles a node.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error("Cannot compile non-finite float literal: {0}")]
    NonFiniteFloat(f64),

    #[error("No visitor branch for expression: {0}")]
    UnsupportedExpression(String),

    #[error("No visitor branch for ordering term: {0}")]
    UnsupportedOrdering(String),
}

pub type CompileResult<T> = Result<T, CompileError>;
