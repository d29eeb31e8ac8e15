//! Pratt expression parsing.
//!
//! Each token kind maps to at most one prefix rule and one infix rule. The
//! binding power of an infix token comes from [`Precedence::of`].

use blue_ir::{Expr, Operator, Token, TokenKind};
use blue_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseErrorKind, Parser};

/// Binding power, lowest to highest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `+ -`
    Sum,
    /// `* /`
    Product,
    /// `-x`
    Prefix,
    /// `f(x)`
    Call,
}

impl Precedence {
    /// Binding power of `token` in infix position.
    ///
    /// `=` and `==` have no infix binding and stop the expression.
    pub fn of(token: &Token) -> Precedence {
        match token.kind {
            TokenKind::Operator => match token.lexeme.as_str() {
                "+" | "-" => Precedence::Sum,
                "*" | "/" => Precedence::Product,
                _ => Precedence::Lowest,
            },
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PrefixRule {
    Identifier,
    Integer,
    Operator,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum InfixRule {
    Binary,
    Call,
}

fn prefix_rule(kind: TokenKind) -> Option<PrefixRule> {
    match kind {
        TokenKind::Ident => Some(PrefixRule::Identifier),
        TokenKind::Number => Some(PrefixRule::Integer),
        TokenKind::Operator => Some(PrefixRule::Operator),
        _ => None,
    }
}

fn infix_rule(kind: TokenKind) -> Option<InfixRule> {
    match kind {
        TokenKind::Operator => Some(InfixRule::Binary),
        TokenKind::LParen => Some(InfixRule::Call),
        _ => None,
    }
}

impl Parser<'_> {
    pub(crate) fn has_prefix_rule(kind: TokenKind) -> bool {
        prefix_rule(kind).is_some()
    }

    /// Parse an expression starting at the current token, binding tighter
    /// than `precedence`. Leaves `current` on the expression's last token.
    ///
    /// Returns `None` if any part of the expression is missing.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        ensure_sufficient_stack(|| {
            let Some(prefix) = prefix_rule(self.current.kind) else {
                self.error_at_current(ParseErrorKind::expected_expression(&self.current));
                return None;
            };
            let mut left = self.apply_prefix(prefix)?;

            while !self.peek.is(TokenKind::Semicolon) && precedence < Precedence::of(&self.peek) {
                let Some(infix) = infix_rule(self.peek.kind) else {
                    return Some(left);
                };
                self.advance();
                left = self.apply_infix(infix, left)?;
            }
            Some(left)
        })
    }

    fn apply_prefix(&mut self, rule: PrefixRule) -> Option<Expr> {
        trace!(?rule, token = ?self.current, "prefix");
        match rule {
            PrefixRule::Identifier => Some(Expr::ident(self.current.lexeme.as_str())),
            PrefixRule::Integer => self.parse_integer(),
            PrefixRule::Operator => {
                let op = self.current_operator()?;
                self.advance();
                let operand = self.parse_expression(Precedence::Prefix)?;
                Some(Expr::prefix(op, operand))
            }
        }
    }

    fn apply_infix(&mut self, rule: InfixRule, left: Expr) -> Option<Expr> {
        trace!(?rule, token = ?self.current, "infix");
        match rule {
            InfixRule::Binary => {
                let op = self.current_operator()?;
                let precedence = Precedence::of(&self.current);
                self.advance();
                let right = self.parse_expression(precedence)?;
                Some(Expr::infix(op, left, right))
            }
            InfixRule::Call => {
                let arguments = self.parse_call_arguments()?;
                Some(Expr::call(left, arguments))
            }
        }
    }

    fn parse_integer(&mut self) -> Option<Expr> {
        match self.current.lexeme.parse::<i64>() {
            Ok(value) => Some(Expr::int(value)),
            Err(_) => {
                let lexeme = self.current.lexeme.clone();
                self.error_at_current(ParseErrorKind::IntegerOutOfRange { lexeme });
                None
            }
        }
    }

    fn current_operator(&mut self) -> Option<Operator> {
        let op = Operator::from_lexeme(&self.current.lexeme);
        if op.is_none() {
            self.error_at_current(ParseErrorKind::expected_expression(&self.current));
        }
        op
    }

    /// Comma-separated arguments, with `current` on `(`. Ends on `)`.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expr>> {
        let mut arguments = Vec::new();
        if self.peek.is(TokenKind::RParen) {
            self.advance();
            return Some(arguments);
        }

        self.advance();
        arguments.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek.is(TokenKind::Comma) {
            self.advance();
            self.advance();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen, "`)` after arguments") {
            return None;
        }
        Some(arguments)
    }
}

#[cfg(test)]
mod tests;
