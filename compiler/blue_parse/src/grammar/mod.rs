//! Statement grammar.
//!
//! ```text
//! statement  = assignment | let | return | function | expression ;
//! assignment = IDENT "=" expr [";"] ;
//! let        = "let" IDENT "=" expr [";"] ;
//! return     = "return" expr [";"] ;
//! function   = "func" TYPE IDENT "(" [IDENT {"," IDENT}] ")" block ;
//! block      = "{" {statement} "}" ;
//! ```

mod expr;

pub use expr::Precedence;

use std::rc::Rc;

use blue_ir::{
    AssignmentStatement, BlockStatement, FunctionLiteral, Identifier, Keyword, LetStatement,
    ReturnStatement, Stmt, TokenKind,
};
use blue_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse the statement starting at the current token.
    ///
    /// Returns `None` when the statement is dropped; in every case but a
    /// closing brace, the reason has been recorded.
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        ensure_sufficient_stack(|| {
            trace!(token = ?self.current, "statement");
            match self.current.kind {
                TokenKind::Ident if self.peek.is_operator("=") => {
                    self.parse_assignment().map(Stmt::Assign)
                }
                TokenKind::Keyword => match self.current.keyword() {
                    Some(Keyword::Let) => self.parse_let().map(Stmt::Let),
                    Some(Keyword::Return) => self.parse_return().map(Stmt::Return),
                    Some(Keyword::Func) => self
                        .parse_function()
                        .map(|func| Stmt::Function(Rc::new(func))),
                    _ => {
                        self.error_at_current(ParseErrorKind::statement_start(&self.current));
                        None
                    }
                },
                TokenKind::RBrace => None,
                kind if Self::has_prefix_rule(kind) => self.parse_expression_statement(),
                _ => {
                    self.error_at_current(ParseErrorKind::statement_start(&self.current));
                    None
                }
            }
        })
    }

    /// `name = value`, with `current` on the name.
    fn parse_assignment(&mut self) -> Option<AssignmentStatement> {
        let name = Identifier::new(self.current.lexeme.as_str());
        // onto `=`, then onto the value
        self.advance();
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(AssignmentStatement { name, value })
    }

    fn parse_let(&mut self) -> Option<LetStatement> {
        if !self.expect_peek(TokenKind::Ident, "identifier after `let`") {
            return None;
        }
        if !self.peek.is_operator("=") {
            self.error_at_peek(ParseErrorKind::unexpected("`=`", &self.peek));
            return None;
        }
        self.parse_assignment()
            .map(|assignment| LetStatement { assignment })
    }

    fn parse_return(&mut self) -> Option<ReturnStatement> {
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(ReturnStatement { value })
    }

    /// `func Type name(params) { body }`. Ends on the closing brace.
    fn parse_function(&mut self) -> Option<FunctionLiteral> {
        if !matches!(self.peek.kind, TokenKind::Keyword | TokenKind::Ident) {
            self.error_at_peek(ParseErrorKind::unexpected("return type after `func`", &self.peek));
            return None;
        }
        self.advance();
        let return_type = self.current.lexeme.clone();

        if !self.expect_peek(TokenKind::Ident, "function name") {
            return None;
        }
        let name = Identifier::new(self.current.lexeme.as_str());

        if !self.expect_peek(TokenKind::LParen, "`(`") {
            return None;
        }
        let parameters = self.parse_parameters()?;

        if !self.expect_peek(TokenKind::LBrace, "`{`") {
            return None;
        }
        let body = self.parse_block();

        trace!(name = %name, params = parameters.len(), "function");
        Some(FunctionLiteral {
            return_type,
            name,
            parameters,
            body,
        })
    }

    /// Parameter names, with `current` on `(`. Ends on `)`.
    fn parse_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.peek.is(TokenKind::RParen) {
            self.advance();
            return Some(parameters);
        }

        loop {
            if !self.expect_peek(TokenKind::Ident, "parameter name") {
                return None;
            }
            parameters.push(Identifier::new(self.current.lexeme.as_str()));
            if !self.peek.is(TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        if !self.expect_peek(TokenKind::RParen, "`)` after parameters") {
            return None;
        }
        Some(parameters)
    }

    /// Statements up to the matching `}` or end of input, with `current` on
    /// `{`. Ends on the `}` (or `Eof`).
    pub(crate) fn parse_block(&mut self) -> BlockStatement {
        let mut statements = Vec::new();
        self.advance();
        while !self.current.is(TokenKind::RBrace) && !self.current.is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }
        BlockStatement { statements }
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Stmt::Expr(expr))
    }
}
