//! Reference SQL compiler - a visitor that turns expression and ordering
//! trees into dialect-specific SQL text.
//!
//! Each node is emitted into a [`TokenStream`]; operands are compiled by
//! child compilers so the parent can decide whether they need parentheses.
//!
//! ```text
//! Expression::accept ──▶ SqlCompiler::visit_* ──▶ TokenStream ──▶ String
//! ```

use crate::config::Settings;

use super::dialect::{Dialect, SqlDialect};
use super::error::{CompileError, CompileResult};
use super::expr::{
    BinaryOp, BinaryOperator, Column, Count, CountSpec, Expression, InList, IsNull, Literal,
    Negation, RawSql, SqlExpression,
};
use super::ordering::{Ordering, OrderingTerm, SqlOrderingTerm};
use super::selectable::Selectable;
use super::token::{Token, TokenStream};
use super::visitor::{ExpressionVisitor, OrderingVisitor};

/// Binding strength of the last emitted node, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Or,
    And,
    Not,
    Comparison,
    Atom,
}

impl Precedence {
    fn of(op: BinaryOperator) -> Self {
        match op {
            BinaryOperator::Or => Precedence::Or,
            BinaryOperator::And => Precedence::And,
            _ => Precedence::Comparison,
        }
    }
}

/// Compiles nodes to SQL for one dialect.
///
/// A compiler accumulates tokens; use one compiler per compiled tree.
#[derive(Debug)]
pub struct SqlCompiler {
    dialect: Dialect,
    tokens: TokenStream,
    precedence: Precedence,
}

impl SqlCompiler {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            tokens: TokenStream::new(),
            precedence: Precedence::Atom,
        }
    }

    /// A compiler for the dialect configured in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.compiler.dialect)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The tokens emitted so far.
    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    pub fn into_tokens(self) -> TokenStream {
        self.tokens
    }

    /// Serialize the emitted tokens.
    pub fn finish(self) -> String {
        self.tokens.serialize(self.dialect)
    }

    /// Compile a whole expression tree.
    pub fn compile_expression(mut self, expr: &Expression) -> CompileResult<String> {
        expr.accept(&mut self)?;
        let dialect = self.dialect;
        let sql = self.finish();
        tracing::trace!(dialect = %dialect, sql = %sql, "compiled expression");
        Ok(sql)
    }

    /// Compile one ORDER BY term.
    pub fn compile_ordering(mut self, term: &OrderingTerm) -> CompileResult<String> {
        term.accept(&mut self)?;
        let dialect = self.dialect;
        let sql = self.finish();
        tracing::trace!(dialect = %dialect, sql = %sql, "compiled ordering term");
        Ok(sql)
    }

    /// Compile an `ORDER BY` clause. An empty list yields an empty string.
    pub fn compile_order_by(mut self, terms: &[OrderingTerm]) -> CompileResult<String> {
        if terms.is_empty() {
            return Ok(String::new());
        }
        self.tokens.push(Token::Raw("ORDER BY".into())).space();
        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                self.tokens.comma().space();
            }
            let mut child = self.child();
            term.accept(&mut child)?;
            self.tokens.append(&child.tokens);
        }
        Ok(self.finish())
    }

    /// Compile one SELECT list item.
    pub fn compile_selectable(mut self, selectable: &Selectable) -> CompileResult<String> {
        match selectable {
            Selectable::Expression(expr) => {
                expr.accept(&mut self)?;
            }
            Selectable::Aliased { expr, name } => {
                expr.accept(&mut self)?;
                self.tokens
                    .space()
                    .push(Token::As)
                    .space()
                    .push(Token::Ident(name.clone()));
            }
            Selectable::AllColumns { qualifier } => {
                if let Some(alias) = qualifier {
                    self.tokens
                        .push(Token::Ident(alias.name().to_string()))
                        .push(Token::Dot);
                }
                self.tokens.push(Token::Star);
            }
        }
        Ok(self.finish())
    }

    fn child(&self) -> SqlCompiler {
        SqlCompiler::new(self.dialect)
    }

    /// Emit `expr`, parenthesized when it binds looser than `min`.
    fn operand(&mut self, expr: &Expression, min: Precedence) -> CompileResult<()> {
        let mut child = self.child();
        expr.accept(&mut child)?;
        if child.precedence < min {
            self.tokens.lparen().append(&child.tokens).rparen();
        } else {
            self.tokens.append(&child.tokens);
        }
        Ok(())
    }
}

impl ExpressionVisitor for SqlCompiler {
    fn visit_column(&mut self, column: &Column) -> CompileResult<()> {
        if let Some(alias) = column.qualifier() {
            self.tokens
                .push(Token::Ident(alias.name().to_string()))
                .push(Token::Dot);
        }
        self.tokens.push(Token::Ident(column.name().to_string()));
        self.precedence = Precedence::Atom;
        Ok(())
    }

    fn visit_literal(&mut self, literal: &Literal) -> CompileResult<()> {
        self.tokens.push(match literal {
            Literal::Int(n) => Token::LitInt(*n),
            Literal::Float(f) if !f.is_finite() => return Err(CompileError::NonFiniteFloat(*f)),
            Literal::Float(f) => Token::LitFloat(*f),
            Literal::String(s) => Token::LitString(s.clone()),
            Literal::Bool(b) => Token::LitBool(*b),
            Literal::Null => Token::LitNull,
        });
        self.precedence = Precedence::Atom;
        Ok(())
    }

    fn visit_negation(&mut self, negation: &Negation) -> CompileResult<()> {
        self.tokens.push(Token::Not).space();
        self.operand(negation.inner(), Precedence::Atom)?;
        self.precedence = Precedence::Not;
        Ok(())
    }

    fn visit_binary(&mut self, binary: &BinaryOp) -> CompileResult<()> {
        let precedence = Precedence::of(binary.op());
        // AND/OR chain freely; comparison operands must be atoms
        let min = if binary.op().is_logical() {
            precedence
        } else {
            Precedence::Atom
        };
        self.operand(binary.left(), min)?;
        self.tokens.space().push(binary.op().to_token()).space();
        self.operand(binary.right(), min)?;
        self.precedence = precedence;
        Ok(())
    }

    fn visit_in_list(&mut self, in_list: &InList) -> CompileResult<()> {
        // "x IN ()" is invalid SQL: empty IN is FALSE, empty NOT IN is TRUE
        if in_list.values().is_empty() {
            self.tokens.push(if in_list.is_negated() {
                Token::True
            } else {
                Token::False
            });
            // may serialize as "1 = 0"
            self.precedence = Precedence::Comparison;
            return Ok(());
        }

        self.operand(in_list.expr(), Precedence::Atom)?;
        if in_list.is_negated() {
            self.tokens.space().push(Token::Not);
        }
        self.tokens.space().push(Token::In).space().lparen();
        for (i, value) in in_list.values().iter().enumerate() {
            if i > 0 {
                self.tokens.comma().space();
            }
            let mut child = self.child();
            value.accept(&mut child)?;
            self.tokens.append(&child.tokens);
        }
        self.tokens.rparen();
        self.precedence = Precedence::Comparison;
        Ok(())
    }

    fn visit_is_null(&mut self, is_null: &IsNull) -> CompileResult<()> {
        self.operand(is_null.expr(), Precedence::Atom)?;
        self.tokens.space().push(if is_null.is_negated() {
            Token::IsNotNull
        } else {
            Token::IsNull
        });
        self.precedence = Precedence::Comparison;
        Ok(())
    }

    fn visit_count(&mut self, count: &Count) -> CompileResult<()> {
        self.tokens.push(Token::FunctionName("COUNT".into())).lparen();
        match count.spec() {
            CountSpec::All => {
                self.tokens.push(Token::Star);
            }
            CountSpec::Distinct(expr) => {
                self.tokens.push(Token::Distinct).space();
                let mut child = self.child();
                expr.accept(&mut child)?;
                self.tokens.append(&child.tokens);
            }
        }
        self.tokens.rparen();
        self.precedence = Precedence::Atom;
        Ok(())
    }

    fn visit_raw(&mut self, raw: &RawSql) -> CompileResult<()> {
        self.tokens.push(Token::Raw(raw.sql().to_string()));
        // Unknown structure: always parenthesize as an operand
        self.precedence = Precedence::Or;
        Ok(())
    }

    fn visit_other(&mut self, expression: &dyn SqlExpression) -> CompileResult<()> {
        Err(CompileError::UnsupportedExpression(format!("{:?}", expression)))
    }
}

impl OrderingVisitor for SqlCompiler {
    fn visit_expression(&mut self, expression: &Expression) -> CompileResult<()> {
        expression.accept(self)
    }

    fn visit_ordering(&mut self, ordering: &Ordering) -> CompileResult<()> {
        let mut child = self.child();
        ordering.expression().accept(&mut child)?;
        self.tokens.append(&child.tokens).space();

        let nulls = match ordering {
            Ordering::Asc(_) => {
                self.tokens.push(Token::Asc);
                None
            }
            Ordering::Desc(_) => {
                self.tokens.push(Token::Desc);
                None
            }
            #[cfg(feature = "nulls-ordering")]
            Ordering::AscNullsLast(_) => {
                self.tokens.push(Token::Asc);
                Some(Token::NullsLast)
            }
            #[cfg(feature = "nulls-ordering")]
            Ordering::DescNullsFirst(_) => {
                self.tokens.push(Token::Desc);
                Some(Token::NullsFirst)
            }
        };

        if let Some(nulls) = nulls {
            if self.dialect.supports_nulls_ordering() {
                self.tokens.space().push(nulls);
            } else {
                tracing::debug!(
                    dialect = %self.dialect,
                    "dialect has no NULLS FIRST/LAST, dropping it from ORDER BY"
                );
            }
        }

        self.precedence = Precedence::Atom;
        Ok(())
    }

    fn visit_other_term(&mut self, term: &dyn SqlOrderingTerm) -> CompileResult<()> {
        Err(CompileError::UnsupportedOrdering(format!("{:?}", term)))
    }
}
