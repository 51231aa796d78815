//! Expression parsing.
//!
//! Assignment and the conditional operator are parsed by hand; binary
//! operators use precedence climbing over [`BinaryOp::precedence`].
//!
//! ```text
//! expr        = conditional (assign_op expr)?
//! conditional = binary(1) ("?" expr ":" conditional)?
//! binary(p)   = unary (op binary(prec(op) + 1) | "instanceof" type)*
//! unary       = ("+" | "-" | "!" | "~" | "++" | "--") unary
//!             | "(" type ")" unary
//!             | primary postfix*
//! ```
//!
//! [`BinaryOp::precedence`]: brew_ir::BinaryOp::precedence

mod operators;
mod postfix;
mod primary;

use brew_ir::{NodeId, NodeKind, TokenKind, UnaryOp};
use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, Parser};

/// Binding power of `instanceof`, shared with the relational operators.
const INSTANCEOF_PRECEDENCE: u8 = 7;

impl Parser<'_> {
    /// Parse a full expression, including assignment.
    pub(crate) fn parse_expr(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// Assignment is right-associative: `a = b = c` is `a = (b = c)`.
    fn parse_assignment(&mut self) -> Result<NodeId, ParseError> {
        let target = self.parse_conditional_expr()?;
        let Some((op, len)) = self.assign_op() else {
            return Ok(target);
        };
        self.advance_n(len);
        let value = self.parse_expr()?;
        let span = self.span_from(self.node_span(target).start);
        Ok(self.alloc(NodeKind::Assign(op), span, &[target, value]))
    }

    /// `cond ? a : b`, without assignment at the top.
    pub(crate) fn parse_conditional_expr(&mut self) -> Result<NodeId, ParseError> {
        let condition = self.parse_binary(1)?;
        if !self.eat(TokenKind::Question) {
            return Ok(condition);
        }
        let then_value = self.parse_expr()?;
        self.expect(TokenKind::Colon)?;
        let else_value = ensure_sufficient_stack(|| self.parse_conditional_expr())?;
        let span = self.span_from(self.node_span(condition).start);
        Ok(self.alloc(
            NodeKind::Conditional,
            span,
            &[condition, then_value, else_value],
        ))
    }

    /// Precedence climbing over binary operators binding at least as
    /// tightly as `min_prec`.
    fn parse_binary(&mut self, min_prec: u8) -> Result<NodeId, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            if self.check(TokenKind::Instanceof) {
                if INSTANCEOF_PRECEDENCE < min_prec {
                    break;
                }
                self.advance();
                let ty = self.parse_type()?;
                let span = self.span_from(self.node_span(left).start);
                left = self.alloc(NodeKind::InstanceOf, span, &[left, ty]);
                continue;
            }

            let Some((op, len)) = self.binary_op() else {
                break;
            };
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            trace!(op = op.symbol(), prec, "binary operator");
            self.advance_n(len);
            let right = self.parse_binary(prec + 1)?;
            let span = self.span_from(self.node_span(left).start);
            left = self.alloc(NodeKind::Binary(op), span, &[left, right]);
        }
        Ok(left)
    }

    /// Prefix operators and casts.
    fn parse_unary(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| {
            let op = match self.current_kind() {
                TokenKind::Plus => UnaryOp::Plus,
                TokenKind::Minus => UnaryOp::Neg,
                TokenKind::Bang => UnaryOp::Not,
                TokenKind::Tilde => UnaryOp::BitNot,
                TokenKind::PlusPlus => UnaryOp::PreInc,
                TokenKind::MinusMinus => UnaryOp::PreDec,
                TokenKind::LParen if self.at_cast() => return self.parse_cast(),
                _ => {
                    let primary = self.parse_primary()?;
                    return self.parse_postfix(primary);
                }
            };
            let start = self.start();
            self.advance();
            let operand = self.parse_unary()?;
            Ok(self.alloc(NodeKind::Unary(op), self.span_from(start), &[operand]))
        })
    }

    /// True if the `(` at the cursor opens a cast.
    ///
    /// `(primitive[]) x` is always a cast. `(Name) x` is a cast only when
    /// the token after `)` can start an operand that is not itself a binary
    /// operator, so `(a) + b` stays a parenthesized expression.
    fn at_cast(&mut self) -> bool {
        self.speculate(|p| {
            p.advance();
            let primitive = p.current_kind().is_primitive_type();
            if !p.skip_type() || !p.check(TokenKind::RParen) {
                return false;
            }
            if primitive {
                return true;
            }
            p.advance();
            matches!(
                p.current_kind(),
                TokenKind::Ident
                    | TokenKind::IntLiteral
                    | TokenKind::FloatLiteral
                    | TokenKind::CharLiteral
                    | TokenKind::StringLiteral
                    | TokenKind::True
                    | TokenKind::False
                    | TokenKind::Null
                    | TokenKind::LParen
                    | TokenKind::Bang
                    | TokenKind::Tilde
                    | TokenKind::This
                    | TokenKind::Super
                    | TokenKind::New
            ) || p.current_kind().is_primitive_type()
        })
    }

    fn parse_cast(&mut self) -> Result<NodeId, ParseError> {
        let start = self.start();
        let open = self.expect(TokenKind::LParen)?;
        let ty = self.parse_type()?;
        self.expect_closing(TokenKind::RParen, open)?;
        let operand = self.parse_unary()?;
        Ok(self.alloc(NodeKind::Cast, self.span_from(start), &[ty, operand]))
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
